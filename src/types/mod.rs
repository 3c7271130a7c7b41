pub mod hourly_dataset;
pub mod station;
pub mod weather_data;
