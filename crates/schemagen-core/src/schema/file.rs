use super::Model;
use crate::{Error, Result};

use std::{fmt, path::Path, str::FromStr};

/// The persisted, hand-editable model description.
///
/// Serialized as a pretty-printed JSON array of models. Association
/// constraint kinds are dropped on save.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ModelFile {
    models: Vec<Model>,
}

impl ModelFile {
    pub fn new(models: Vec<Model>) -> Self {
        Self { models }
    }

    /// Loads a model file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|err| Error::from(err).context(format!("reading `{}`", path.display())))?;
        contents
            .parse()
            .map_err(|err: Error| err.context(format!("parsing `{}`", path.display())))
    }

    /// Saves the model file to disk.
    ///
    /// The contents are written to a sibling temporary file which is then
    /// renamed over `path`, so an existing file is either fully replaced or
    /// left untouched.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let contents = self.to_json()?;

        let file_name = path
            .file_name()
            .ok_or_else(|| Error::invalid_config(format!("`{}` is not a file path", path.display())))?;
        let tmp = path.with_file_name(format!(".{}.tmp", file_name.to_string_lossy()));

        std::fs::write(&tmp, contents)?;
        if let Err(err) = std::fs::rename(&tmp, path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(err.into());
        }

        Ok(())
    }

    pub fn models(&self) -> &[Model] {
        &self.models
    }

    pub fn into_models(self) -> Vec<Model> {
        self.models
    }

    pub fn model(&self, name: &str) -> Option<&Model> {
        self.models.iter().find(|model| model.name == name)
    }

    fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

impl From<Vec<Model>> for ModelFile {
    fn from(models: Vec<Model>) -> Self {
        Self::new(models)
    }
}

impl FromStr for ModelFile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

impl fmt::Display for ModelFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = self.to_json().map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
