//! Recommend command implementation for the SeyGo CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use seygo_core::{
    PlaceFeature, PlaceRecord, RecommendationRequest, Recommender, ScoredPlace, UserPreferences,
};
use seygo_scorer::{Signal, SignalRecommender, SignalWeights};

use crate::{
    ARG_RECOMMEND_OUTPUT, ARG_RECOMMEND_PLACES, ARG_RECOMMEND_REQUEST, ARG_W_CONTENT,
    ARG_W_DISTANCE, ARG_W_KEYWORD, ARG_W_POPULARITY, ARG_W_TAXONOMY, CliError,
    ENV_RECOMMEND_PLACES, ENV_RECOMMEND_REQUEST, load_json, require_existing, write_json,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "recommend",
    long_about = "Rank a JSON list of place records for a JSON recommendation \
                 request. Signal weights can come from CLI flags, \
                 configuration files, or environment variables; unset \
                 weights keep their defaults.",
    about = "Rank places for a recommendation request"
)]
#[ortho_config(prefix = "SEYGO")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON file containing a recommendation request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Path to a JSON array of place records.
    #[arg(long = ARG_RECOMMEND_PLACES, value_name = "path")]
    #[serde(default)]
    pub(crate) places: Option<Utf8PathBuf>,
    /// Write results here instead of standard output.
    #[arg(long = ARG_RECOMMEND_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Base weight of the content signal.
    #[arg(long = ARG_W_CONTENT, value_name = "weight")]
    #[serde(default)]
    pub(crate) w_content: Option<f64>,
    /// Base weight of the keyword signal.
    #[arg(long = ARG_W_KEYWORD, value_name = "weight")]
    #[serde(default)]
    pub(crate) w_keyword: Option<f64>,
    /// Base weight of the taxonomy signal.
    #[arg(long = ARG_W_TAXONOMY, value_name = "weight")]
    #[serde(default)]
    pub(crate) w_taxonomy: Option<f64>,
    /// Base weight of the popularity signal.
    #[arg(long = ARG_W_POPULARITY, value_name = "weight")]
    #[serde(default)]
    pub(crate) w_popularity: Option<f64>,
    /// Base weight of the distance signal.
    #[arg(long = ARG_W_DISTANCE, value_name = "weight")]
    #[serde(default)]
    pub(crate) w_distance: Option<f64>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }

    const fn weight_overrides(&self) -> [(Signal, Option<f64>); 5] {
        [
            (Signal::Content, self.w_content),
            (Signal::Keyword, self.w_keyword),
            (Signal::Taxonomy, self.w_taxonomy),
            (Signal::Popularity, self.w_popularity),
            (Signal::Distance, self.w_distance),
        ]
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecommendConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Path to the JSON place catalogue.
    pub(crate) places: Utf8PathBuf,
    /// Optional output file; standard output when absent.
    pub(crate) output: Option<Utf8PathBuf>,
    /// Validated base weights.
    pub(crate) weights: SignalWeights,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.request_path, ARG_RECOMMEND_REQUEST)?;
        require_existing(&self.places, ARG_RECOMMEND_PLACES)?;
        Ok(())
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let weights = args
            .weight_overrides()
            .into_iter()
            .filter_map(|(signal, weight)| weight.map(|value| (signal, value)))
            .fold(SignalWeights::default(), |weights, (signal, value)| {
                weights.with(signal, value)
            })
            .validate()?;
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_RECOMMEND_REQUEST,
            env: ENV_RECOMMEND_REQUEST,
        })?;
        let places = args.places.ok_or(CliError::MissingArgument {
            field: ARG_RECOMMEND_PLACES,
            env: ENV_RECOMMEND_PLACES,
        })?;
        Ok(Self {
            request_path,
            places,
            output: args.output,
            weights,
        })
    }
}

pub(crate) fn run_recommend(args: RecommendArgs, stdout: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    recommend_with_config(&config, stdout)
}

/// Rank the configured inputs and write the results to `--output` or `stdout`.
pub(crate) fn recommend_with_config(
    config: &RecommendConfig,
    stdout: &mut dyn Write,
) -> Result<(), CliError> {
    config.validate_sources()?;
    let results = execute_recommend(config)?;
    match config.output.as_deref() {
        Some(path) => write_to_file(path, &results),
        None => write_json(stdout, &results),
    }
}

/// Load the inputs named by `config` and rank them.
pub(crate) fn execute_recommend(config: &RecommendConfig) -> Result<Vec<ScoredPlace>, CliError> {
    let preferences = load_preferences(&config.request_path)?;
    let places = load_places(&config.places)?;
    let recommender = SignalRecommender::new(config.weights)?;
    let results = recommender.recommend(&places, &preferences)?;
    info!(
        "ranked {} of {} places from {}",
        results.len(),
        places.len(),
        config.places
    );
    Ok(results)
}

/// Load and validate a [`RecommendationRequest`] from disk.
pub(crate) fn load_preferences(path: &Utf8Path) -> Result<UserPreferences, CliError> {
    let request: RecommendationRequest = load_json(path, ARG_RECOMMEND_REQUEST)?;
    UserPreferences::try_from(request).map_err(|source| CliError::InvalidRequest {
        path: path.to_path_buf(),
        source,
    })
}

/// Load place records from disk and convert them into validated features.
pub(crate) fn load_places(path: &Utf8Path) -> Result<Vec<PlaceFeature>, CliError> {
    let records: Vec<PlaceRecord> = load_json(path, ARG_RECOMMEND_PLACES)?;
    records
        .into_iter()
        .map(|record| {
            PlaceFeature::try_from(record).map_err(|source| CliError::InvalidPlace {
                path: path.to_path_buf(),
                source,
            })
        })
        .collect()
}

fn write_to_file(path: &Utf8Path, results: &[ScoredPlace]) -> Result<(), CliError> {
    let mut file = seygo_fs::create_utf8_file(path).map_err(|source| CliError::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;
    write_json(&mut file, results)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
