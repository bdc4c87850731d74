//! Recommend command implementation for the Dinewise CLI.

use std::io::Write;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use dinewise_core::{
    DEFAULT_CATEGORY, DEFAULT_STARS, RecommendRequest, RecommendResponse, Recommender,
};
use dinewise_data::load_businesses;
use dinewise_recommender::FuzzyRecommender;
use dinewise_scorer::{ScoreWeights, build_catalogue};
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{ARG_DATASET, CliError, ENV_DATASET};

/// How recommendations are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// Pretty-printed JSON document.
    #[default]
    Json,
    /// One line per recommendation.
    Text,
}

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Load a business dataset and recommend up to five open \
                 restaurants. Cities and categories are matched fuzzily; \
                 thresholds relax when nothing qualifies and the best \
                 restaurants overall are shown as a last resort.",
    about = "Recommend restaurants from a business dataset"
)]
#[ortho_config(prefix = "DINEWISE")]
pub(crate) struct RecommendArgs {
    /// Path to the business CSV dataset.
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Minimum star rating (1.0 to 5.0; anything else means 3.0).
    #[arg(long, value_name = "stars", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) stars: Option<f64>,
    /// Minimum number of reviews.
    #[arg(long = "review-count", value_name = "count", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) review_count: Option<i64>,
    /// Free-text category, e.g. "Sushi Bars".
    #[arg(long, value_name = "text")]
    #[serde(default)]
    pub(crate) categories: Option<String>,
    /// Free-text city.
    #[arg(long, value_name = "text")]
    #[serde(default)]
    pub(crate) city: Option<String>,
    /// Comma-separated attribute keywords, e.g. "GoodForKids, wifi".
    #[arg(long, value_name = "text")]
    #[serde(default)]
    pub(crate) attributes: Option<String>,
    /// Output format.
    #[arg(long, value_enum, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
    /// Log pipeline decisions at debug level.
    #[arg(long)]
    #[serde(default)]
    pub(crate) verbose: bool,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecommendConfig {
    /// Path to the business dataset.
    pub(crate) dataset: Utf8PathBuf,
    /// The request exactly as the caller phrased it.
    pub(crate) request: RecommendRequest,
    /// Output format.
    pub(crate) format: OutputFormat,
    /// Whether debug logging was requested.
    pub(crate) verbose: bool,
}

impl RecommendConfig {
    pub(crate) fn validate_dataset(&self) -> Result<(), CliError> {
        Self::require_existing(&self.dataset)
    }

    fn require_existing(path: &Utf8Path) -> Result<(), CliError> {
        match dinewise_fs::is_regular_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::MissingDataset {
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingDataset {
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectDataset {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let dataset = args.dataset.ok_or(CliError::MissingArgument {
            field: ARG_DATASET,
            env: ENV_DATASET,
        })?;
        let request = RecommendRequest {
            stars: args.stars.unwrap_or(DEFAULT_STARS),
            review_count: args.review_count.unwrap_or_default(),
            categories: args
                .categories
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_owned()),
            city: args.city,
            attributes: args.attributes,
        };
        Ok(Self {
            dataset,
            request,
            format: args.format.unwrap_or_default(),
            verbose: args.verbose,
        })
    }
}

/// JSON document written for one invocation.
#[derive(Debug, Serialize)]
struct RecommendOutput<'a> {
    request: &'a RecommendRequest,
    #[serde(flatten)]
    response: &'a RecommendResponse,
}

/// Load the dataset named by `config`, answer its request and write the
/// response.
pub(crate) fn execute_recommend(
    config: &RecommendConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let response = recommend_from_dataset(config)?;
    match config.format {
        OutputFormat::Json => write_json(writer, &config.request, &response),
        OutputFormat::Text => write_text(writer, &response),
    }
}

fn recommend_from_dataset(config: &RecommendConfig) -> Result<RecommendResponse, CliError> {
    config.validate_dataset()?;
    let dataset = load_businesses(&config.dataset)?;
    let catalogue = build_catalogue(dataset.businesses, ScoreWeights::default())?;
    info!(
        "catalogue ready: {} restaurants in {} cities",
        catalogue.len(),
        catalogue.cities().len()
    );
    let recommender = FuzzyRecommender::new(Arc::new(catalogue));
    Ok(recommender.recommend(&config.request))
}

fn write_json(
    writer: &mut dyn Write,
    request: &RecommendRequest,
    response: &RecommendResponse,
) -> Result<(), CliError> {
    let output = RecommendOutput { request, response };
    let payload = serde_json::to_string_pretty(&output).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

fn write_text(writer: &mut dyn Write, response: &RecommendResponse) -> Result<(), CliError> {
    for (rank, recommendation) in (1_usize..).zip(&response.recommendations) {
        writeln!(
            writer,
            "{rank}. {} ({:.1} stars, {} reviews) - {}, {} [{}]",
            recommendation.name,
            recommendation.stars,
            recommendation.review_count,
            recommendation.address,
            recommendation.city,
            recommendation.categories,
        )
        .map_err(CliError::WriteOutput)?;
    }
    for note in [&response.message, &response.city_warning].into_iter().flatten() {
        writeln!(writer, "{note}").map_err(CliError::WriteOutput)?;
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
