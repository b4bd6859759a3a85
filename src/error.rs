use std::path::PathBuf;

use thiserror::Error;

use crate::core::ReportFamily;

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("element family mismatch: collection expects {expected}, got {found}")]
    FamilyMismatch {
        expected: ReportFamily,
        found: ReportFamily,
    },

    #[error("sink write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("legacy canvas write failed")]
    Format(#[from] std::fmt::Error),

    #[error("serialization failed: {0}")]
    Serialization(String),
}
