//! `waypath nearest` command - closest reachable destinations

use waypath_core::bail_invalid;
use waypath_core::error::Result;
use waypath_core::planner::Planner;

use crate::cli::{Cli, OutputFormat};

pub fn execute(cli: &Cli, planner: Planner, start: &str, limit: Option<usize>) -> Result<()> {
    let planner = match limit {
        Some(0) => bail_invalid!("limit", "must be at least 1"),
        Some(limit) => planner.with_nearest_limit(limit),
        None => planner,
    };

    let destinations = planner.closest_destinations(start)?;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "start": start,
                "destinations": destinations,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Closest destinations from {}:", start);
            }
            for (i, destination) in destinations.iter().enumerate() {
                println!("{:>3}. {}", i + 1, destination);
            }
        }
    }

    Ok(())
}
