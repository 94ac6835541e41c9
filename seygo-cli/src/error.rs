//! Error types emitted by the SeyGo CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use seygo_core::{PlaceFeatureError, PreferencesError, RecommendError};
use seygo_scorer::WeightsError;
use thiserror::Error;

/// Errors emitted by the SeyGo CLI.
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
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option naming the input.
        field: &'static str,
        /// Path that was not found.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option naming the input.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option naming the input.
        field: &'static str,
        /// Path being inspected.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Reading an input file failed.
    #[error("failed to read {field} file {path:?}: {source}")]
    OpenInput {
        /// Option naming the input.
        field: &'static str,
        /// Path of the input file.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// An input file did not contain the expected JSON.
    #[error("failed to parse {field} JSON at {path:?}: {source}")]
    ParseInput {
        /// Option naming the input.
        field: &'static str,
        /// Path of the input file.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The recommendation request failed validation.
    #[error("recommendation request in {path:?} is invalid: {source}")]
    InvalidRequest {
        /// Path of the request file.
        path: Utf8PathBuf,
        /// Validation failure.
        #[source]
        source: PreferencesError,
    },
    /// A place record failed validation.
    #[error("place record in {path:?} is invalid: {source}")]
    InvalidPlace {
        /// Path of the places file.
        path: Utf8PathBuf,
        /// Validation failure.
        #[source]
        source: PlaceFeatureError,
    },
    /// A configured signal weight was unusable.
    #[error("invalid signal weights: {0}")]
    InvalidWeights(#[from] WeightsError),
    /// The recommender rejected its inputs.
    #[error("recommendation failed: {0}")]
    Recommend(#[from] RecommendError),
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Creating the output file failed.
    #[error("failed to create output file {path:?}: {source}")]
    CreateOutput {
        /// Requested output path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
