//! azmet - download hourly AZMET weather station data.

use anyhow::Context;
use azmet::{Azmet, WeatherStation};
use chrono::{Datelike, Local};
use clap::Parser;
use std::io::{self, Write};

#[derive(Parser)]
#[command(name = "azmet", version, about = "Download hourly AZMET weather station data")]
struct Cli {
    /// Year to fetch, 2003 through 2099. Defaults to the current year.
    #[arg(short, long)]
    year: Option<i32>,

    /// Station name (e.g. "phoenix-greenway") or provider code (e.g. 12).
    #[arg(short, long, default_value = "PhoenixGreenway")]
    station: WeatherStation,

    /// Print one JSON object per record instead of a table.
    #[arg(long)]
    json: bool,

    /// List the known stations and exit.
    #[arg(long)]
    list_stations: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.list_stations {
        for station in WeatherStation::ALL {
            println!("{:>3}  {}", station.code(), station.name());
        }
        return Ok(());
    }

    let year = cli.year.unwrap_or_else(|| Local::now().year());
    let client = Azmet::builder().build()?;
    let dataset = client
        .hourly(cli.station, year)
        .with_context(|| format!("Error retrieving weather data for {} in {}", cli.station, year))?;

    if cli.json {
        let mut out = io::stdout().lock();
        for record in &dataset {
            serde_json::to_writer(&mut out, record)?;
            writeln!(out)?;
        }
    } else {
        println!("{}", dataset.to_dataframe()?);
    }
    Ok(())
}
