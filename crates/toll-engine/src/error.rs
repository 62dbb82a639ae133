//! Error types for toll-engine input handling.
//!
//! Fee calculation itself cannot fail. These errors come from turning
//! untrusted text (vehicle tags, timezones, timestamps) into engine inputs.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TollError {
    #[error("Unknown vehicle class: '{0}'. Expected one of: Motorbike, Tractor, Emergency, Diplomat, Lorry, Bus, Car")]
    UnknownVehicleClass(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid timestamp '{input}': {reason}")]
    InvalidTimestamp { input: String, reason: String },
}

pub type Result<T> = std::result::Result<T, TollError>;
