pub mod batch;
pub mod compiler;
pub mod config;
pub mod error;
pub mod log;

pub use batch::{
    BatchCompiler, BatchReport, CompiledShader, SourceShader, compile_shaders, discover_sources,
};
pub use compiler::{CompileStatus, Invocation, ProcessCompiler, ShaderCompiler};
pub use config::BatchConfig;
pub use error::BatchError;
