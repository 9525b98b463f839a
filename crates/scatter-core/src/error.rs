// File: crates/scatter-core/src/error.rs
// Summary: Error taxonomy for loading, scale computation and rendering.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the core crate.
pub type Result<T> = std::result::Result<T, ChartError>;

/// Failures while reading the input table. All of them abort the chart.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("failed to open {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column `{0}`")]
    MissingColumn(String),

    /// A numeric column held something that is not a finite decimal number.
    #[error("line {line}: column `{column}` is not a number: {value:?}")]
    InvalidNumber {
        line: u64,
        column: String,
        value: String,
    },

    #[error("input has a header but no data rows")]
    Empty,
}

/// Everything that can stop the chart from rendering.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error(transparent)]
    DataLoad(#[from] DataLoadError),

    #[error("cannot compute a scale over an empty dataset")]
    EmptyDataset,

    #[error("degenerate scale domain [{min}, {max}]")]
    DegenerateDomain { min: f64, max: f64 },

    #[error("degenerate scale range [{min}, {max}]")]
    DegenerateRange { min: f64, max: f64 },

    #[error("render target is no longer available")]
    RenderTargetUnavailable,

    #[error("no mark with key `{0}`")]
    UnknownMark(String),

    #[error("raster backend failure: {0}")]
    Raster(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl DataLoadError {
    pub fn open(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Open { path: path.into(), source }
    }

    pub fn invalid_number(line: u64, column: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            line,
            column: column.into(),
            value: value.into(),
        }
    }
}
