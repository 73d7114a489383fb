use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("Failed to create output directory {path:?}")]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Source directory {0:?} not found")]
    SourceDirNotFound(PathBuf),

    #[error("Failed to list source directory {path:?}")]
    ReadSourceDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Shader compiler {0:?} not found")]
    CompilerNotFound(PathBuf),

    #[error("Failed to launch shader compiler {program:?}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error compiling {file_name}")]
    CompilationFailed {
        file_name: String,
        code: Option<i32>,
    },
}

impl BatchError {
    /// Name of the shader that stopped the batch, if a compilation failed.
    pub fn failed_file(&self) -> Option<&str> {
        match self {
            BatchError::CompilationFailed { file_name, .. } => Some(file_name.as_str()),
            _ => None,
        }
    }
}
