use azmet::{Azmet, AzmetError, WeatherStation};

fn main() -> Result<(), AzmetError> {
    // Set RUST_LOG=info (or debug) to see download progress
    env_logger::init();

    let client = Azmet::builder().build()?;
    let dataset = client.hourly(WeatherStation::Tucson, 2023)?;

    println!("Downloaded {} hourly records", dataset.len());
    if let Some(first) = dataset.records().first() {
        println!("First observation at {}: {:?}", first.timestamp(), first.reading());
    }
    Ok(())
}
