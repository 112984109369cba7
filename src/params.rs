//! Use clap crate to parse command line arguments

use std::path::PathBuf;

use clap::Parser;

/// Estimate an earthquake's epicenter and magnitude from three seismograph stations
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Params {
    /// The JSON file with station records under the "Event" key
    #[arg(default_value = "data/test.json")]
    pub file: PathBuf,

    /// 1-based position of a record to use, repeat three times (default: the first three records)
    #[arg(short, long = "select", value_name = "N")]
    pub select: Vec<usize>,

    /// TOML file overriding the physical constants
    #[arg(short, long, value_name = "PATH")]
    pub model: Option<PathBuf>,

    /// Only report per-station magnitudes of every record
    #[arg(long, conflicts_with = "select")]
    pub list: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}
