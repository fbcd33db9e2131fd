/// Error type for the fallible edges of the core: configuration
/// validation and writing rendered reports.
///
/// Scanning and name resolution never fail; they degrade to the next
/// fallback and log at debug level instead.
use std::io;

use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid size threshold: {0} (must be a finite number >= 0)")]
    InvalidThreshold(f64),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
