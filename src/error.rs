//! Error type shared by the scatter callbacks.
//!
//! Every variant except [`Error::Io`] describes a wiring mistake between a
//! widget and the data it drives. Handlers return these before mutating
//! anything, so the host can surface them immediately.

use std::path::PathBuf;

/// Result type alias for scatterview operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No data source or axis range is registered under this name.
    #[error("no model named '{name}' is registered")]
    MissingModel { name: String },

    /// The data source has no column with this name.
    #[error("data source '{source_name}' has no column '{column}'")]
    MissingColumn { source_name: String, column: String },

    /// A column does not have as many rows as the rest of the source.
    #[error("column '{column}' of '{source_name}' has {actual} rows, expected {expected}")]
    ColumnLength {
        source_name: String,
        column: String,
        expected: usize,
        actual: usize,
    },

    /// A selection refers to a row that does not exist.
    #[error("row {index} is out of range for '{source_name}' ({rows} rows)")]
    SelectionOutOfRange {
        source_name: String,
        index: usize,
        rows: usize,
    },

    /// Reading or writing a file failed.
    #[error("i/o error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file could not be parsed or written.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    pub fn missing_model(name: impl Into<String>) -> Self {
        Self::MissingModel { name: name.into() }
    }

    pub fn missing_column(source_name: impl Into<String>, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            source_name: source_name.into(),
            column: column.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// `true` for errors caused by names that do not resolve (models or columns).
    pub fn is_wiring(&self) -> bool {
        matches!(self, Self::MissingModel { .. } | Self::MissingColumn { .. })
    }
}
