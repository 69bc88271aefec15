use std::path::PathBuf;

use thiserror::Error;

use crate::ingestion::LoadSeverity;

/// Convenience result type for table loading and column access.
pub type TableResult<T> = Result<T, TableError>;

/// Error type returned by table construction and column lookup.
///
/// Load failures abort construction; lookup failures only affect the call that raised them.
/// Malformed numbers and type mismatches are not errors (see [`crate::access`]).
#[derive(Debug, Error)]
pub enum TableError {
    /// The source could not be opened or read.
    #[error("source unavailable ({}): {source}", display_path(.path))]
    SourceUnavailable {
        /// Path of the source, if it was opened from the filesystem.
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    /// A header row was requested but the first line is missing or empty.
    #[error("header row requested but the first line is empty")]
    EmptyHeader,

    /// No field matches the requested name.
    #[error("column '{name}' does not exist")]
    ColumnNotFound { name: String },

    /// A 1-based ordinal selector is outside `1..=field_count`.
    #[error("column ordinal {ordinal} is out of range (table has {field_count} fields)")]
    ColumnOutOfRange { ordinal: usize, field_count: usize },
}

impl TableError {
    pub(crate) fn source_unavailable(path: Option<PathBuf>, source: std::io::Error) -> Self {
        Self::SourceUnavailable { path, source }
    }

    /// Severity used when reporting this error to a [`crate::ingestion::LoadObserver`].
    pub fn severity(&self) -> LoadSeverity {
        match self {
            Self::SourceUnavailable { .. } => LoadSeverity::Critical,
            Self::EmptyHeader | Self::ColumnNotFound { .. } | Self::ColumnOutOfRange { .. } => {
                LoadSeverity::Error
            }
        }
    }
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map_or_else(|| "<reader>".to_string(), |p| p.display().to_string())
}
