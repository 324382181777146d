//! Clarion: feasibility scenarios for commercial property repositioning.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;

pub use error::AppError;
