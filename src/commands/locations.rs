//! `waypath locations` command - list every known location

use waypath_core::error::Result;
use waypath_core::planner::Planner;

use crate::cli::{Cli, OutputFormat};

pub fn execute(cli: &Cli, planner: &Planner) -> Result<()> {
    let locations = planner.locations();

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "count": locations.len(),
                "locations": locations,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if locations.is_empty() && !cli.quiet {
                println!("No locations found");
            }
            for location in &locations {
                println!("{}", location);
            }
        }
    }

    Ok(())
}
