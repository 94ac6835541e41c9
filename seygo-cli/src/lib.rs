//! Command-line interface for the SeyGo recommendation engine.
//!
//! Subcommands:
//! - `recommend` ranks a JSON place catalogue for a JSON request.
//! - `classify` shows how place records map onto the taxonomy.
//! - `categories` prints the taxonomy table.
#![forbid(unsafe_code)]

use std::io::Write;

use camino::Utf8Path;
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde::de::DeserializeOwned;
use seygo_fs::read_utf8_file;

mod catalogue;
mod error;
mod recommend;

pub use error::CliError;

use catalogue::{ClassifyArgs, run_categories, run_classify};
use recommend::{RecommendArgs, run_recommend};

pub(crate) const ARG_RECOMMEND_REQUEST: &str = "request";
pub(crate) const ARG_RECOMMEND_PLACES: &str = "places";
pub(crate) const ARG_RECOMMEND_OUTPUT: &str = "output";
pub(crate) const ARG_W_CONTENT: &str = "w-content";
pub(crate) const ARG_W_KEYWORD: &str = "w-keyword";
pub(crate) const ARG_W_TAXONOMY: &str = "w-taxonomy";
pub(crate) const ARG_W_POPULARITY: &str = "w-popularity";
pub(crate) const ARG_W_DISTANCE: &str = "w-distance";
pub(crate) const ENV_RECOMMEND_REQUEST: &str = "SEYGO_CMDS_RECOMMEND_REQUEST_PATH";
pub(crate) const ENV_RECOMMEND_PLACES: &str = "SEYGO_CMDS_RECOMMEND_PLACES";
pub(crate) const ARG_CLASSIFY_PLACES: &str = "places";
pub(crate) const ENV_CLASSIFY_PLACES: &str = "SEYGO_CMDS_CLASSIFY_PLACES";

/// Run the SeyGo CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration, input loading,
/// ranking or output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Recommend(args) => run_recommend(args, &mut stdout),
        Command::Classify(args) => run_classify(args, &mut stdout),
        Command::Categories => run_categories(&mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "seygo",
    about = "Rank and classify places for SeyGo travellers",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank a place catalogue for a recommendation request.
    Recommend(RecommendArgs),
    /// Classify place records into the taxonomy.
    Classify(ClassifyArgs),
    /// Print the taxonomy groups and their categories.
    Categories,
}

/// Decode a JSON document from `path`, naming `field` in errors.
pub(crate) fn load_json<T: DeserializeOwned>(
    path: &Utf8Path,
    field: &'static str,
) -> Result<T, CliError> {
    let contents = read_utf8_file(path).map_err(|source| CliError::OpenInput {
        field,
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| CliError::ParseInput {
        field,
        path: path.to_path_buf(),
        source,
    })
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize + ?Sized>(
    writer: &mut dyn Write,
    value: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    writer.flush().map_err(CliError::WriteOutput)
}

/// Check that `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match seygo_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests;
