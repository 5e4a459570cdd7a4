//! CLI argument parsing for waypath
//!
//! Global flags: --graph, --format, --quiet, --verbose, --log-level, --log-json

pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use output::OutputFormat;

/// Waypath - quickest routes between locations
#[derive(Parser, Debug)]
#[command(name = "waypath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Edge-list file to load (overrides the `graph` config entry)
    #[arg(long, global = true, env = "WAYPATH_GRAPH")]
    pub graph: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter (e.g. `debug` or `waypath_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every location in the graph
    Locations,

    /// Show the quickest route between two locations
    Path {
        /// Starting location
        start: String,

        /// Destination
        end: String,
    },

    /// List the closest destinations reachable from a location
    Nearest {
        /// Starting location
        start: String,

        /// Maximum number of destinations (defaults to `nearest_limit` from config)
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_path_with_globals() {
        let cli = Cli::try_parse_from([
            "waypath",
            "--format",
            "json",
            "path",
            "Union South",
            "Van Vleck",
            "--graph",
            "campus.dot",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.graph, Some(PathBuf::from("campus.dot")));
        match cli.command {
            Some(Commands::Path { start, end }) => {
                assert_eq!(start, "Union South");
                assert_eq!(end, "Van Vleck");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_nearest_limit() {
        let cli = Cli::try_parse_from(["waypath", "nearest", "Union South", "-n", "3"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Nearest { limit: Some(3), .. })
        ));
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["waypath", "--format", "yaml", "locations"]).is_err());
    }
}
