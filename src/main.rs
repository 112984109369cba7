//! Estimate an earthquake's epicenter and magnitude from seismograph readings.
//!
//! Run:
//! ```bash
//! $ epicenter -h
//! ```
//! to see which parameters can be tweaked.

mod params;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Builder, Env, Target};
use log::info;
use serde::Serialize;
use yansi::Paint;

use epicenter::data::EventFile;
use epicenter::solver::FormattedResult;
use epicenter::{EpicenterSolver, SeismicModel, StationReading};
use params::Params;

#[derive(Serialize)]
struct StationReport<'a> {
    name: &'a str,
    distance_km: f64,
    magnitude: String,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    stations: Vec<StationReport<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    epicenter: Option<FormattedResult>,
}

fn main() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("warn"))
        .target(Target::Stderr)
        .format_timestamp(None)
        .init();

    // Parse argruments
    let params = Params::parse();

    let model = match &params.model {
        Some(path) => SeismicModel::from_toml_file(path)?,
        None => SeismicModel::default(),
    };

    info!("Loading events from \"{}\"", params.file.display());
    let events = EventFile::read(&params.file)?;

    let readings = if params.list {
        events.readings(&model)?
    } else if params.select.is_empty() {
        let positions: Vec<usize> = (1..=events.records.len().min(3)).collect();
        events.select(&positions, &model)?
    } else {
        events.select(&params.select, &model)?
    };

    // Solve!
    let result = if params.list {
        None
    } else {
        let solver = EpicenterSolver::new(model)?;
        Some(
            solver
                .solve(&readings)
                .context("could not locate the epicenter")?,
        )
    };

    if params.json {
        let report = JsonReport {
            stations: readings.iter().map(station_report).collect(),
            epicenter: result.map(|r| r.formatted()),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    // Print the answer
    for reading in &readings {
        println!(
            "STATION: {} , MAGNITUDE : {:.2}",
            Paint::new(reading.name()).bold(),
            reading.local_magnitude()
        );
        info!("{reading}");
    }
    if let Some(result) = result {
        println!(
            "Latitude = {} and longitude = {}",
            Paint::green(result.latitude_str()),
            Paint::green(result.longitude_str())
        );
        println!("Magnitude = {}", Paint::yellow(result.magnitude_str()).bold());
    }

    Ok(())
}

fn station_report(reading: &StationReading) -> StationReport<'_> {
    StationReport {
        name: reading.name(),
        distance_km: reading.distance_km(),
        magnitude: format!("{:.2}", reading.local_magnitude()),
    }
}
