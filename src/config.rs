use clap::{error::ErrorKind, Parser};

/// Fixed location of the GTFS stops file, relative to the working directory.
pub const STOPS_PATH: &str = "./data/stops.txt";

pub const DEFAULT_PORT: u16 = 8080;

/// Serves the stops of a GTFS feed as JSON.
#[derive(Debug, Parser)]
#[command(name = "madrid-metro-api", version)]
pub struct Cli {
    /// TCP port to listen on
    #[arg(default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

/// Whether a rejected command line should end the process with a failure.
///
/// A port that does not parse can never be bound, so it is fatal. Wrong
/// argument counts, `--help` and `--version` only print and exit.
pub fn is_fatal(err: &clap::Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::ValueValidation | ErrorKind::InvalidValue
    )
}
