use std::ffi::OsStr;
use std::path::{Path, PathBuf};

pub const DEFAULT_COMPILER: &str = "slangc";
pub const DEFAULT_SHADER_DIR: &str = "shaders";
pub const DEFAULT_SOURCE_EXTENSION: &str = ".slang";
pub const DEFAULT_TARGET_EXTENSION: &str = ".spv";
pub const DEFAULT_OUTPUT_FLAG: &str = "-o";

/// Everything a batch needs to know: which compiler to run, where to look
/// and where the artifacts go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchConfig {
    pub compiler_path: PathBuf,
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    pub source_extension: String,
    pub target_extension: String,
    pub output_flag: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            compiler_path: PathBuf::from(DEFAULT_COMPILER),
            source_dir: PathBuf::from(DEFAULT_SHADER_DIR),
            output_dir: PathBuf::from(DEFAULT_SHADER_DIR),
            source_extension: DEFAULT_SOURCE_EXTENSION.to_string(),
            target_extension: DEFAULT_TARGET_EXTENSION.to_string(),
            output_flag: DEFAULT_OUTPUT_FLAG.to_string(),
        }
    }
}

impl BatchConfig {
    pub fn with_compiler(mut self, compiler_path: impl AsRef<Path>) -> Self {
        self.compiler_path = compiler_path.as_ref().to_path_buf();
        self
    }

    pub fn with_source_dir(mut self, source_dir: impl AsRef<Path>) -> Self {
        self.source_dir = source_dir.as_ref().to_path_buf();
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl AsRef<Path>) -> Self {
        self.output_dir = output_dir.as_ref().to_path_buf();
        self
    }

    pub fn with_source_extension(mut self, extension: impl Into<String>) -> Self {
        self.source_extension = extension.into();
        self
    }

    pub fn with_target_extension(mut self, extension: impl Into<String>) -> Self {
        self.target_extension = extension.into();
        self
    }

    pub fn with_output_flag(mut self, flag: impl Into<String>) -> Self {
        self.output_flag = flag.into();
        self
    }

    /// Where the artifact for `file_name` lands, or `None` if the name does
    /// not carry the source extension. Names need not be valid UTF-8.
    ///
    /// A name made only of the extension (`.slang`) keeps itself as the stem.
    pub fn output_path_for(&self, file_name: impl AsRef<OsStr>) -> Option<PathBuf> {
        let file_name = file_name.as_ref();
        let stem = file_name
            .as_encoded_bytes()
            .strip_suffix(self.source_extension.as_bytes())?;
        let stem = if stem.is_empty() {
            file_name
        } else {
            // SAFETY: `stem` is `file_name` minus a trailing UTF-8 string, so it
            // still ends on a valid boundary of the encoded bytes.
            unsafe { OsStr::from_encoded_bytes_unchecked(stem) }
        };

        let mut artifact = stem.to_os_string();
        artifact.push(&self.target_extension);
        Some(self.output_dir.join(artifact))
    }
}
