use std::path::{Path, PathBuf};

/// Configuration shared by the CLI commands.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the intermediate model description.
    pub model_file: PathBuf,

    /// Declaration generation settings.
    pub codegen: schemagen_codegen::Config,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_file: PathBuf::from("model_config.json"),
            codegen: schemagen_codegen::Config::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.model_file = path.into();
        self
    }

    pub fn codegen(mut self, codegen: schemagen_codegen::Config) -> Self {
        self.codegen = codegen;
        self
    }

    pub fn model_file_path(&self) -> &Path {
        &self.model_file
    }
}
