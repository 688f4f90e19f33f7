use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading either input. Any of these aborts the run.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("missing {}", path.display())]
    MissingInputFile { path: PathBuf },

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed csv in {}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{} has no '{column}' column", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },
}

impl InputError {
    pub fn is_missing_file(&self) -> bool {
        matches!(self, InputError::MissingInputFile { .. })
    }
}
