//! `waypath path` command - quickest route between two locations
//!
//! An unreachable destination is a normal outcome: the command reports
//! `no path exists` and succeeds. Unknown locations are errors.

use waypath_core::error::Result;
use waypath_core::planner::{Planner, Route};

use crate::cli::{Cli, OutputFormat};

pub fn execute(cli: &Cli, planner: &Planner, start: &str, end: &str) -> Result<()> {
    let route = planner.route(start, end)?;

    match cli.format {
        OutputFormat::Json => output_json(start, end, route.as_ref())?,
        OutputFormat::Human => output_human(cli, start, end, route.as_ref()),
    }

    Ok(())
}

fn output_json(start: &str, end: &str, route: Option<&Route>) -> Result<()> {
    let output = serde_json::json!({
        "start": start,
        "end": end,
        "found": route.is_some(),
        "route": route,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_human(cli: &Cli, start: &str, end: &str, route: Option<&Route>) {
    let Some(route) = route else {
        println!("no path exists from {} to {}", start, end);
        return;
    };

    if !cli.quiet {
        println!("Quickest route from {} to {}:", start, end);
    }
    for (i, stop) in route.stops.iter().enumerate() {
        match i.checked_sub(1).and_then(|leg| route.legs.get(leg)) {
            Some(seconds) => println!("{:>3}. {} (+{} s)", i + 1, stop, format_seconds(*seconds)),
            None => println!("{:>3}. {}", i + 1, stop),
        }
    }
    println!("total: {} s", format_seconds(route.total_seconds));
}

/// One decimal place, matching the precision of typical edge-list files
pub fn format_seconds(seconds: f64) -> String {
    format!("{:.1}", seconds)
}
