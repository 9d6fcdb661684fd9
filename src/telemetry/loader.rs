use std::fmt;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::Sample;
use crate::error::{Result, TelemetryError};
use crate::mock_data;

/// Where the process gets its one-and-only dataset from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TelemetrySource {
    /// JSON array of sample records on disk.
    File(PathBuf),
    /// Deterministically generated samples (see `mock_data`).
    Synthetic { samples: usize, seed: u64 },
}

impl fmt::Display for TelemetrySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "file:{}", path.display()),
            Self::Synthetic { samples, seed } => {
                write!(f, "synthetic:{samples}@seed={seed}")
            }
        }
    }
}

/// Materialize every sample of `source`.
pub fn load(source: &TelemetrySource) -> Result<Vec<Sample>> {
    match source {
        TelemetrySource::File(path) => load_file(path),
        TelemetrySource::Synthetic { samples, seed } => {
            Ok(mock_data::generate(*samples, *seed))
        }
    }
}

pub fn load_file(path: &Path) -> Result<Vec<Sample>> {
    let raw = std::fs::read_to_string(path).map_err(|source| TelemetryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&raw)
}

/// Parse a JSON array of sample records.
///
/// The document shape is checked first so that a bad record is reported
/// by its position rather than as a generic syntax error.
pub fn parse(raw: &str) -> Result<Vec<Sample>> {
    let records: Vec<Value> = serde_json::from_str(raw)?;

    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            serde_json::from_value::<Sample>(record)
                .map_err(|e| TelemetryError::DataIntegrity(format!("record {i}: {e}")))
        })
        .collect()
}
