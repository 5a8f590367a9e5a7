//! Vars command implementation

use anyhow::Result;
use clap::Args;
use confluence_config_core::AmbientEnvironment;
use confluence_config_core::config::FIELDS;
use serde_json::json;

/// List recognized environment variables
#[derive(Args, Debug)]
pub struct VarsArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Execute the vars command
pub fn execute(args: VarsArgs) -> Result<()> {
    let env = AmbientEnvironment::from_process_env();

    let mut rows: Vec<(&str, &str, usize, bool)> = Vec::new();
    for spec in &FIELDS {
        for (idx, key) in spec.candidates.iter().enumerate() {
            rows.push((*key, spec.name, idx + 1, env.is_set(key)));
        }
    }

    if args.json {
        let output: Vec<_> = rows
            .iter()
            .map(|(key, field, priority, set)| {
                json!({
                    "name": key,
                    "field": field,
                    "priority": priority,
                    "set": set,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Recognized variables:");
        for (key, field, priority, set) in rows {
            let status = if set { "(set)" } else { "(not set)" };
            println!("  {key:<22} {field:<9} priority {priority} {status}");
        }
    }

    Ok(())
}
