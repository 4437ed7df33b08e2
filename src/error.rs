use std::io;

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Could not open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Could not read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Line {line}: could not convert '{token}' to a number")]
    Parse { line: usize, token: String },

    /// Every data line must carry as many columns as the first one.
    #[error("Line {line}: expected {expected} columns, found {found}")]
    Columns {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Bin bound must be positive, got {0}")]
    BinBound(i64),

    #[error(transparent)]
    Args(#[from] clap::Error),

    #[error("Invalid options: {0}")]
    Options(String),

    #[error("Failed to render chart: {0}")]
    Render(String),
}

impl<E> From<DrawingAreaErrorKind<E>> for Error
where
    E: std::error::Error + Send + Sync,
{
    fn from(error: DrawingAreaErrorKind<E>) -> Self {
        Error::Render(error.to_string())
    }
}
