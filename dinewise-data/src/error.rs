//! Error types raised while loading a business dataset.

use std::io;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Fatal problems with a dataset as a whole.
///
/// Problems confined to a single row are not errors; such rows are skipped
/// and counted in the [`LoadSummary`](crate::LoadSummary).
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset file could not be opened.
    #[error("failed to open dataset at {path}")]
    Open {
        /// Requested dataset path.
        path: Utf8PathBuf,
        /// Source error from the filesystem.
        #[source]
        source: io::Error,
    },
    /// The header row could not be read.
    #[error("failed to read the header row of {path}")]
    Header {
        /// Dataset path.
        path: Utf8PathBuf,
        /// Source error from `csv`.
        #[source]
        source: csv::Error,
    },
    /// A required column is absent from the header row.
    #[error("dataset {path} has no `{column}` column")]
    MissingColumn {
        /// Dataset path.
        path: Utf8PathBuf,
        /// Name of the missing column.
        column: &'static str,
    },
    /// Reading failed part-way through the file.
    #[error("failed to read dataset {path}")]
    Read {
        /// Dataset path.
        path: Utf8PathBuf,
        /// Source error from `csv`.
        #[source]
        source: csv::Error,
    },
}
