use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong between reading telemetry and reducing it.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The caller broke a precondition (e.g. reducing an empty region).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A sample is missing a numeric field or holds a value the exact
    /// decimal policy cannot represent.
    #[error("Data integrity violation: {0}")]
    DataIntegrity(String),

    #[error("Failed to read telemetry from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The telemetry document is not a JSON array.
    #[error("Malformed telemetry document: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TelemetryError>;
