//! CLI command dispatch and execution

use anyhow::Result;
use clap::{Parser, Subcommand};

mod show;
mod vars;

/// confluence-config - Resolve Confluence connection settings from the environment
#[derive(Parser, Debug)]
#[command(
    name = "confluence-config",
    version,
    about = "Resolve Confluence connection settings from the environment",
    long_about = "Resolves domain, credentials, auth type and API path from CONFLUENCE_* \
                  environment variables, applying alias precedence"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the resolved configuration and where each value came from
    Show(show::ShowArgs),

    /// List recognized environment variables and whether they are set
    Vars(vars::VarsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Show(args) => show::execute(args),
            Commands::Vars(args) => vars::execute(args),
        }
    }
}
