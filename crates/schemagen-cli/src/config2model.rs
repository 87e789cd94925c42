use crate::Config;
use anyhow::{bail, Result};
use clap::Parser;
use console::style;
use schemagen_codegen::{Generator, Report};
use schemagen_core::{DefaultNamer, ModelFile};
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct Config2ModelCommand {
    /// Directory receiving the generated files
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Package name written into each generated file
    #[arg(short, long)]
    package: Option<String>,
}

impl Config2ModelCommand {
    pub(crate) fn run(self, config: &Config) -> Result<()> {
        let mut codegen = config.codegen.clone();

        if let Some(output_dir) = self.output_dir {
            codegen = codegen.output_dir(output_dir);
        }

        if let Some(package) = self.package {
            codegen = codegen.package(package);
        }

        let report = config_to_model(&config.clone().codegen(codegen))?;

        if !report.is_success() {
            bail!(
                "{} of {} models failed to generate",
                report.failed.len(),
                report.failed.len() + report.written.len()
            );
        }

        Ok(())
    }
}

/// Generates one declaration file per model in `config.model_file`.
///
/// Models that fail are reported and skipped; the rest are still written.
pub fn config_to_model(config: &Config) -> Result<Report> {
    println!();
    println!("  {}", style("Config → Model").cyan().bold().underlined());
    println!();

    let models = ModelFile::load(config.model_file_path())?;
    let generator = Generator::new(DefaultNamer, config.codegen.clone());
    let report = generator.generate(models.models())?;

    for written in &report.written {
        println!(
            "  {} {} {}",
            style("✓").green().bold(),
            style(&written.type_name).bold(),
            style(written.path.display()).dim()
        );
    }

    for failed in &report.failed {
        println!(
            "  {} {} {}",
            style("✖").red().bold(),
            style(&failed.model).bold(),
            style(&failed.error).red()
        );
    }

    println!();
    Ok(report)
}
