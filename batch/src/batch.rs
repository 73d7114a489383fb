use std::fs;
use std::io;
use std::path::PathBuf;

use crate::compiler::{CompileStatus, Invocation, ProcessCompiler, ShaderCompiler};
use crate::config::BatchConfig;
use crate::error::BatchError;

/// A source file picked up from the shader directory, with the artifact it maps to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceShader {
    /// Lossy UTF-8 rendering of the name, for messages only.
    pub file_name: String,
    pub path: PathBuf,
    pub output: PathBuf,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledShader {
    pub source: PathBuf,
    pub output: PathBuf,
}

/// Shaders compiled by a successful batch, in the order they ran.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub compiled: Vec<CompiledShader>,
}

/// Lists the source directory, without recursing, and keeps the entries
/// carrying the source extension. Order is whatever the filesystem returns.
pub fn discover_sources(config: &BatchConfig) -> Result<Vec<SourceShader>, BatchError> {
    let read_dir_error = |source: io::Error| match source.kind() {
        io::ErrorKind::NotFound => BatchError::SourceDirNotFound(config.source_dir.clone()),
        _ => BatchError::ReadSourceDir {
            path: config.source_dir.clone(),
            source,
        },
    };

    let mut sources = vec![];
    for entry in fs::read_dir(&config.source_dir).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;

        let file_name = entry.file_name();
        let Some(output) = config.output_path_for(&file_name) else {
            continue;
        };

        sources.push(SourceShader {
            path: config.source_dir.join(&file_name),
            file_name: file_name.to_string_lossy().into_owned(),
            output,
        });
    }

    Ok(sources)
}

pub struct BatchCompiler<C: ShaderCompiler> {
    config: BatchConfig,
    compiler: C,
}

impl<C: ShaderCompiler> BatchCompiler<C> {
    pub fn new(config: BatchConfig, compiler: C) -> Self {
        Self { config, compiler }
    }

    pub fn into_compiler(self) -> C {
        self.compiler
    }

    /// Compiles every shader in the source directory, one at a time,
    /// stopping at the first one the compiler rejects.
    pub fn run(&mut self) -> Result<BatchReport, BatchError> {
        // Must happen before `create_dir_all`, which would otherwise create a
        // missing source directory when it doubles as the output directory.
        if let Err(source) = fs::metadata(&self.config.source_dir) {
            return Err(match source.kind() {
                io::ErrorKind::NotFound => {
                    BatchError::SourceDirNotFound(self.config.source_dir.clone())
                }
                _ => BatchError::ReadSourceDir {
                    path: self.config.source_dir.clone(),
                    source,
                },
            });
        }

        fs::create_dir_all(&self.config.output_dir).map_err(|source| {
            BatchError::CreateOutputDir {
                path: self.config.output_dir.clone(),
                source,
            }
        })?;

        let sources = discover_sources(&self.config)?;
        log::debug!(
            "Found {} shader(s) in {:?}",
            sources.len(),
            self.config.source_dir
        );

        let mut report = BatchReport::default();
        for shader in sources {
            let invocation = Invocation {
                program: self.config.compiler_path.clone(),
                source: shader.path,
                output_flag: self.config.output_flag.clone(),
                output: shader.output,
            };

            log::info!("Compiling: {invocation}");

            if let CompileStatus::Failed { code } = self.compiler.compile(&invocation)? {
                return Err(BatchError::CompilationFailed {
                    file_name: shader.file_name,
                    code,
                });
            }

            report.compiled.push(CompiledShader {
                source: invocation.source,
                output: invocation.output,
            });
        }

        log::info!("All shaders compiled!");

        Ok(report)
    }
}

/// Runs a batch against the real compiler executable.
pub fn compile_shaders(config: BatchConfig) -> Result<BatchReport, BatchError> {
    BatchCompiler::new(config, ProcessCompiler).run()
}
