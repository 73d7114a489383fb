use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use crate::error::BatchError;

/// One `<compiler> <source> <flag> <output>` command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub source: PathBuf,
    pub output_flag: String,
    pub output: PathBuf,
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.program.display(),
            self.source.display(),
            self.output_flag,
            self.output.display()
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompileStatus {
    Success,
    /// `code` is `None` when the compiler was terminated by a signal.
    Failed { code: Option<i32> },
}

impl From<ExitStatus> for CompileStatus {
    fn from(status: ExitStatus) -> Self {
        if status.success() {
            CompileStatus::Success
        } else {
            CompileStatus::Failed {
                code: status.code(),
            }
        }
    }
}

/// Runs a single compilation to completion.
pub trait ShaderCompiler {
    fn compile(&mut self, invocation: &Invocation) -> Result<CompileStatus, BatchError>;
}

/// Shells out to the external compiler. Its stdout and stderr go straight to ours.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessCompiler;

impl ShaderCompiler for ProcessCompiler {
    fn compile(&mut self, invocation: &Invocation) -> Result<CompileStatus, BatchError> {
        let status = Command::new(&invocation.program)
            .arg(&invocation.source)
            .arg(&invocation.output_flag)
            .arg(&invocation.output)
            .status()
            .map_err(|err| match err.kind() {
                io::ErrorKind::NotFound => {
                    BatchError::CompilerNotFound(invocation.program.clone())
                }
                _ => BatchError::Spawn {
                    program: invocation.program.clone(),
                    source: err,
                },
            })?;

        Ok(status.into())
    }
}
