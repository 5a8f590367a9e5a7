//! confluence-config - Show the Confluence connection settings in effect
//!
//! A thin CLI over `confluence-config-core`: snapshots the `CONFLUENCE_*`
//! environment variables, resolves them, and reports which alias supplied
//! each value.

use clap::Parser;

mod commands;

use commands::Cli;

fn main() {
    confluence_config_core::logging::init();

    let cli = Cli::parse();

    if let Err(e) = cli.execute() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
