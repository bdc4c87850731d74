//! Command-line interface for Dinewise restaurant recommendations.
//!
//! `dinewise recommend` loads a business dataset once, scores its open
//! restaurants and answers a single free-text request. Options layer from
//! CLI flags over `DINEWISE_*` environment variables over configuration
//! files.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod logging;
mod recommend;

pub use error::CliError;

use recommend::RecommendArgs;

const ARG_DATASET: &str = "dataset";
const ENV_DATASET: &str = "DINEWISE_CMDS_RECOMMEND_DATASET";

/// Run the Dinewise CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] when arguments or configuration are invalid, the
/// dataset cannot be loaded, or the output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse()?;
    match cli.command {
        Command::Recommend(args) => {
            let config = args.into_config()?;
            logging::init(config.verbose)?;
            let mut stdout = std::io::stdout().lock();
            recommend::execute_recommend(&config, &mut stdout)
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "dinewise",
    about = "Restaurant recommendations from a local business dataset",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Recommend restaurants matching a free-text request.
    Recommend(RecommendArgs),
}

#[cfg(test)]
mod tests;
