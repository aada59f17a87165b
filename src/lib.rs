pub mod config;
pub mod crlset;
pub mod telemetry;
