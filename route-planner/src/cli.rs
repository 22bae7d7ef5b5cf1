//! Command-line argument handling.

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};

/// Command line of the route planner.
///
/// With no subcommand, prints the best routes between two stations.
#[derive(Debug, Parser)]
#[command(name = "route-planner", version)]
#[command(subcommand_negates_reqs = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<CliCommand>,

    /// railway network JSON file
    #[arg(value_parser = json_path, required = true)]
    data: Option<PathBuf>,

    /// station to start from
    #[arg(value_parser = station_name, required = true)]
    origin: Option<String>,

    /// station to travel to
    #[arg(value_parser = station_name, required = true)]
    destination: Option<String>,

    /// how many routes to print; negative values print none
    #[arg(value_parser = max_results, required = true, allow_negative_numbers = true)]
    max_results: Option<usize>,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// serve the HTTP API over a network
    Serve {
        /// railway network JSON file
        #[arg(value_parser = json_path)]
        data: PathBuf,
    },
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the best routes between two stations.
    Query(QueryArgs),
    /// Serve the HTTP API over a network.
    Serve { data: PathBuf },
}

/// Arguments for a one-shot route query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryArgs {
    pub data: PathBuf,
    pub origin: String,
    pub destination: String,
    pub max_results: usize,
}

fn json_path(s: &str) -> Result<PathBuf, String> {
    if s.to_ascii_lowercase().ends_with(".json") {
        Ok(PathBuf::from(s))
    } else {
        Err("File provided must be a JSON".to_string())
    }
}

fn station_name(s: &str) -> Result<String, String> {
    let numeric = s.trim().parse::<f64>().is_ok_and(f64::is_finite);
    if s.trim().is_empty() || numeric {
        Err("Station must be a string".to_string())
    } else {
        Ok(s.to_string())
    }
}

fn max_results(s: &str) -> Result<usize, String> {
    let n = s
        .trim()
        .parse::<i64>()
        .map_err(|_| "Max results must be a number".to_string())?;
    Ok(usize::try_from(n.max(0)).unwrap_or(usize::MAX))
}

impl Cli {
    /// Resolve the parsed arguments into a command.
    pub fn into_command(self) -> Result<Command, clap::Error> {
        if let Some(CliCommand::Serve { data }) = self.command {
            return Ok(Command::Serve { data });
        }

        match (self.data, self.origin, self.destination, self.max_results) {
            (Some(data), Some(origin), Some(destination), Some(max_results)) => {
                Ok(Command::Query(QueryArgs {
                    data,
                    origin,
                    destination,
                    max_results,
                }))
            }
            _ => Err(Cli::command().error(
                ErrorKind::MissingRequiredArgument,
                "a query needs <DATA> <ORIGIN> <DESTINATION> <MAX_RESULTS>",
            )),
        }
    }
}
