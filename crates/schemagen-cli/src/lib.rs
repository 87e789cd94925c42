mod config;
mod config2model;
mod logging;
mod schema2config;

pub use config::*;
pub use config2model::{config_to_model, Config2ModelCommand};
pub use logging::init as init_logging;
pub use schema2config::{schema_to_config, Schema2ConfigCommand};

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Schemagen CLI library for building custom command-line tools
#[derive(Debug, Default)]
pub struct SchemagenCli {
    config: Config,
}

impl SchemagenCli {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse and execute CLI commands from command-line arguments
    pub fn parse_and_run(&self) -> Result<()> {
        self.run(Cli::parse())
    }

    /// Parse and execute CLI commands from an iterator of arguments
    pub fn parse_from<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        self.run(Cli::parse_from(args))
    }

    fn run(&self, cli: Cli) -> Result<()> {
        logging::init(&cli.log_level);

        let mut config = self.config.clone();
        if let Some(path) = cli.config {
            config = config.model_file(path);
        }

        match cli.command {
            Command::Schema2config(cmd) => cmd.run(&config),
            Command::Config2model(cmd) => cmd.run(&config),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "schemagen")]
#[command(about = "Generate model declarations from a database schema")]
#[command(version)]
struct Cli {
    /// Path of the intermediate model description
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Introspect the database and write the model description
    Schema2config(Schema2ConfigCommand),

    /// Generate one declaration file per model in the description
    Config2model(Config2ModelCommand),
}
