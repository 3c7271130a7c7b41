pub mod hourly;
