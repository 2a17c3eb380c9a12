pub mod config;
pub mod error;
pub mod pools;
pub mod telemetry;
