//! Taxonomy inspection commands: `classify` and `categories`.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use seygo_core::{PlaceFeature, PlaceRecord};

use crate::{
    ARG_CLASSIFY_PLACES, CliError, ENV_CLASSIFY_PLACES, load_json, require_existing, write_json,
};

/// CLI arguments for the `classify` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "classify",
    about = "Assign taxonomy categories and groups to place records"
)]
#[ortho_config(prefix = "SEYGO")]
pub(crate) struct ClassifyArgs {
    /// Path to a JSON array of place records.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) places: Option<Utf8PathBuf>,
}

impl ClassifyArgs {
    pub(crate) fn into_config(self) -> Result<ClassifyConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ClassifyConfig::try_from(merged)
    }
}

/// Resolved `classify` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ClassifyConfig {
    pub(crate) places: Utf8PathBuf,
}

impl TryFrom<ClassifyArgs> for ClassifyConfig {
    type Error = CliError;

    fn try_from(args: ClassifyArgs) -> Result<Self, Self::Error> {
        let places = args.places.ok_or(CliError::MissingArgument {
            field: ARG_CLASSIFY_PLACES,
            env: ENV_CLASSIFY_PLACES,
        })?;
        Ok(Self { places })
    }
}

pub(crate) fn run_classify(args: ClassifyArgs, stdout: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing(&config.places, ARG_CLASSIFY_PLACES)?;
    let features = classify_places(&config)?;
    write_json(stdout, &features)
}

/// Convert every record in the configured file, filling in taxonomy fields.
pub(crate) fn classify_places(config: &ClassifyConfig) -> Result<Vec<PlaceFeature>, CliError> {
    let records: Vec<PlaceRecord> = load_json(&config.places, ARG_CLASSIFY_PLACES)?;
    let features = records
        .into_iter()
        .map(|record| {
            PlaceFeature::try_from(record).map_err(|source| CliError::InvalidPlace {
                path: config.places.clone(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    debug!("classified {} places from {}", features.len(), config.places);
    Ok(features)
}

pub(crate) fn run_categories(stdout: &mut dyn Write) -> Result<(), CliError> {
    write_json(stdout, seygo_core::groups())
}
