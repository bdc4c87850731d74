//! Error types emitted by the Dinewise CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use dinewise_data::DatasetError;
use dinewise_scorer::ScoreWeightsError;
use thiserror::Error;

/// Errors emitted by the Dinewise CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Long flag name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it instead.
        env: &'static str,
    },
    /// The dataset path does not exist or is not a regular file.
    #[error("dataset path {path:?} does not exist or is not a file")]
    MissingDataset {
        /// Path that was configured.
        path: Utf8PathBuf,
    },
    /// The dataset path could not be inspected due to an IO error.
    #[error("failed to inspect dataset path {path:?}: {source}")]
    InspectDataset {
        /// Path that was configured.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Loading the dataset failed.
    #[error(transparent)]
    LoadDataset(#[from] DatasetError),
    /// The scoring weights were rejected while building the catalogue.
    #[error("failed to build the restaurant catalogue: {0}")]
    BuildCatalogue(#[from] ScoreWeightsError),
    /// Installing the log subscriber failed.
    #[error("failed to initialise logging: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
    /// Serialising the recommendation output failed.
    #[error("failed to serialise recommendations: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing the recommendation output failed.
    #[error("failed to write recommendations: {0}")]
    WriteOutput(#[source] std::io::Error),
}
