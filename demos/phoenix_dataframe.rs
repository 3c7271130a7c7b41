use azmet::{Azmet, WeatherStation};
use polars::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let client = Azmet::builder().build()?;
    let dataset = client.hourly(WeatherStation::PhoenixEncanto, 2023)?;
    let df = dataset.to_dataframe()?;
    println!("Shape: {:?}", df.shape());

    // Hours above 43°C (roughly 110°F)
    let scorching = df
        .lazy()
        .filter(col("air_temperature").gt(lit(43.0f32)))
        .select([col("datetime"), col("air_temperature"), col("relative_humidity")])
        .collect()?;
    println!("{} scorching hours:\n{}", scorching.height(), scorching);

    Ok(())
}
