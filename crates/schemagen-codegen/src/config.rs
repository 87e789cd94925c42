use std::path::PathBuf;

/// Configuration for declaration generation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory receiving one file per model.
    pub output_dir: PathBuf,

    /// Package clause written at the top of each file.
    pub package: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("model"),
            package: "model".to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = path.into();
        self
    }

    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }
}
