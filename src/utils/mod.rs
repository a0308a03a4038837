pub mod config;
pub mod coords;
pub mod error;
pub mod telemetry;
pub mod yaml;
