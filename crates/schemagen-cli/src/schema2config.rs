use crate::Config;
use anyhow::Result;
use clap::Parser;
use console::style;
use schemagen_core::{describe, Catalog, DefaultNamer, Description, TypeMap};
use schemagen_driver_postgresql::{ConnectionConfig, PostgreSQL, DEFAULT_SCHEMA};
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct Schema2ConfigCommand {
    /// Connection URL; when absent, DB_HOST, DB_PORT, DB_USER, DB_PASSWORD
    /// and DB_NAME are used
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Schema to introspect
    #[arg(long, env = "DB_SCHEMA", default_value = DEFAULT_SCHEMA)]
    schema: String,

    /// JSON file of extra type map entries
    #[arg(long)]
    type_map: Option<PathBuf>,
}

impl Schema2ConfigCommand {
    pub(crate) fn run(self, config: &Config) -> Result<()> {
        let connection = match &self.database_url {
            Some(url) => ConnectionConfig::from_url(url)?,
            None => ConnectionConfig::from_env()?,
        }
        .schema(&self.schema);

        let type_map = match &self.type_map {
            Some(path) => TypeMap::with_overrides_from(path)?,
            None => TypeMap::default(),
        };

        let catalog = PostgreSQL::connect_with_config(&connection)?;
        schema_to_config(catalog, &type_map, config)?;
        Ok(())
    }
}

/// Introspects `catalog` and writes the model description to
/// `config.model_file`.
///
/// The file is only written once introspection has fully succeeded.
pub fn schema_to_config(
    catalog: impl Catalog,
    type_map: &TypeMap,
    config: &Config,
) -> Result<Description> {
    println!();
    println!("  {}", style("Schema → Config").cyan().bold().underlined());
    println!();

    let description = describe(catalog, type_map, DefaultNamer)?;

    for warning in &description.warnings {
        println!(
            "  {} {}",
            style("!").yellow().bold(),
            style(format!("{warning}; add it to the type map")).yellow()
        );
    }

    description.models.save(config.model_file_path())?;

    println!(
        "  {} {}",
        style("✓").green().bold(),
        style(format!(
            "Wrote {} models to {}",
            description.models.models().len(),
            config.model_file_path().display()
        ))
        .dim()
    );
    println!();

    Ok(description)
}
