//! Show command implementation

use anyhow::Result;
use clap::Args;
use confluence_config_core::{
    AmbientEnvironment, ConfigSources, ResolvedConfig, ValueSource, resolve_with_sources,
};
use serde_json::json;
use tracing::debug;

/// Show the resolved configuration
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Print the token instead of a mask
    #[arg(long)]
    show_token: bool,
}

/// Execute the show command
pub fn execute(args: ShowArgs) -> Result<()> {
    let env = AmbientEnvironment::from_process_env();
    debug!(keys = env.len(), "snapshotted process environment");

    let (config, sources) = resolve_with_sources(&env)?;
    let config = if args.show_token {
        config
    } else {
        config.redacted()
    };

    if args.json {
        let output = json!({
            "domain": entry(&config.domain, Some(sources.domain)),
            "email": match &config.email {
                Some(email) => entry(email, sources.email),
                None => serde_json::Value::Null,
            },
            "token": entry(&config.token, Some(sources.token)),
            "authType": entry(config.auth_type.as_str(), Some(sources.auth_type)),
            "apiPath": entry(&config.api_path, Some(sources.api_path)),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_text(&config, &sources);
    }

    Ok(())
}

fn entry(value: &str, source: Option<ValueSource>) -> serde_json::Value {
    json!({
        "value": value,
        "source": source.map(|s| s.to_string()),
    })
}

fn print_text(config: &ResolvedConfig, sources: &ConfigSources) {
    println!("Configuration:");
    println!("  domain: {} (from {})", config.domain, sources.domain);
    match (&config.email, sources.email) {
        (Some(email), Some(source)) => println!("  email: {email} (from {source})"),
        _ => println!("  email: (not set)"),
    }
    println!("  token: {} (from {})", config.token, sources.token);
    println!("  auth_type: {} (from {})", config.auth_type, sources.auth_type);
    println!("  api_path: {} (from {})", config.api_path, sources.api_path);
}
