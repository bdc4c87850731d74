//! Log subscriber installation for the binary.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;

use crate::CliError;

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "debug";

/// Install a stderr formatter that also receives `log` records from the
/// library crates.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects `debug` over the
/// default `warn`.
pub(crate) fn init(verbose: bool) -> Result<(), CliError> {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish()
        .try_init()?;
    Ok(())
}
