mod config;
pub use config::{Config, DdlConfig, GenerateConfig};

mod ddl;
pub use ddl::ddl;

mod generate;
pub use generate::{generate, Summary};

mod init;
pub use init::init;

mod source;
mod theme;
mod writer;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Name of the configuration file picked up from the working directory.
pub const CONFIG_FILE: &str = "tabula.toml";

#[derive(Parser, Debug)]
#[command(name = "tabula")]
#[command(about = "Tabula - typed table accessors and DDL from schema declarations")]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to ./tabula.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Generate accessor modules from schema files
    Generate(generate::GenerateCommand),

    /// Print CREATE TABLE statements for schema files
    Ddl(ddl::DdlCommand),

    /// Write an example schema and configuration file
    Init(init::InitCommand),
}

impl Cli {
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Loads the configuration and executes the selected command.
    pub fn run(self) -> Result<()> {
        let config = Config::discover(self.config.as_deref())?;

        match self.command {
            Command::Generate(cmd) => cmd.run(&config),
            Command::Ddl(cmd) => cmd.run(&config),
            Command::Init(cmd) => cmd.run(),
        }
    }
}
