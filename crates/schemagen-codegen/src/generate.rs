use crate::{expand, Config};
use schemagen_core::{Error, Merger, Model, Namer, Result};

use std::{collections::HashMap, path::PathBuf};

/// Renders and writes one declaration file per model.
#[derive(Debug)]
pub struct Generator<N> {
    namer: N,
    config: Config,
}

/// A rendered declaration, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    /// Raw name of the model it was rendered from.
    pub model: String,

    /// Name of the declared type.
    pub type_name: String,

    /// Output file name, from the model's singular form.
    pub file_name: String,

    pub source: String,
}

#[derive(Debug, Default)]
pub struct Report {
    pub written: Vec<Written>,
    pub failed: Vec<Failed>,
}

#[derive(Debug)]
pub struct Written {
    pub model: String,
    pub type_name: String,
    pub path: PathBuf,
}

#[derive(Debug)]
pub struct Failed {
    pub model: String,
    pub error: Error,
}

impl<N: Namer> Generator<N> {
    pub fn new(namer: N, config: Config) -> Self {
        Self { namer, config }
    }

    /// Merges and renders a single model.
    pub fn render(&self, model: &Model) -> Result<Unit> {
        let fields = Merger::new(&self.namer).merge(model)?;
        let file = expand::model(model, &fields, &self.namer, &self.config.package)?;

        let stem = self.namer.singularize(&model.name);
        if stem.is_empty() || stem == "." || stem == ".." || stem.contains(['/', '\\']) {
            return Err(Error::render(
                &model.name,
                format!("cannot name an output file after `{stem}`"),
            ));
        }

        Ok(Unit {
            model: model.name.clone(),
            type_name: self.namer.type_name(&model.name),
            file_name: format!("{stem}.go"),
            source: file.to_string(),
        })
    }

    /// Writes every model that renders; failures are collected per model and
    /// do not stop the others.
    ///
    /// Only failing to create the output directory aborts the run.
    pub fn generate(&self, models: &[Model]) -> Result<Report> {
        let dir = &self.config.output_dir;
        std::fs::create_dir_all(dir).map_err(|err| {
            Error::from(err).context(format!("creating output directory `{}`", dir.display()))
        })?;

        let mut report = Report::default();
        let mut claimed = HashMap::<String, String>::new();

        for model in models {
            match self.write(model, &mut claimed) {
                Ok(written) => {
                    tracing::info!(model = %model.name, path = %written.path.display(), "declaration written");
                    report.written.push(written);
                }
                Err(error) => {
                    tracing::warn!(model = %model.name, "{error}; output skipped");
                    report.failed.push(Failed {
                        model: model.name.clone(),
                        error,
                    });
                }
            }
        }

        Ok(report)
    }

    fn write(&self, model: &Model, claimed: &mut HashMap<String, String>) -> Result<Written> {
        let unit = self.render(model)?;

        if let Some(owner) = claimed.get(&unit.file_name) {
            return Err(Error::render(
                &model.name,
                format!("output `{}` already written for model `{owner}`", unit.file_name),
            ));
        }

        let path = self.config.output_dir.join(&unit.file_name);
        std::fs::write(&path, &unit.source)
            .map_err(|err| Error::from(err).context(format!("writing `{}`", path.display())))?;

        claimed.insert(unit.file_name, model.name.clone());

        Ok(Written {
            model: unit.model,
            type_name: unit.type_name,
            path,
        })
    }
}

impl Report {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}
