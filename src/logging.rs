
//! Logging setup.

use tracing::warn;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

use std::sync::OnceLock;

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

const FALLBACK_FILTER: &str = "info";

/// Parses `filter`, or falls back to `info` and returns the parse
/// error alongside the fallback.
fn filter_or_fallback(filter: &str) -> (EnvFilter, Option<ParseError>) {
  match EnvFilter::try_new(filter) {
    Ok(env_filter) => (env_filter, None),
    Err(err) => (EnvFilter::new(FALLBACK_FILTER), Some(err)),
  }
}

/// Installs a global `tracing` subscriber which writes to standard
/// error, filtered by `filter` (in `EnvFilter` syntax, such as
/// `info` or `stepworks=debug`). Only the first call has any effect.
pub fn init_logging(filter: &str) {
  LOGGER_INITIALIZED.get_or_init(|| {
    let (env_filter, parse_error) = filter_or_fallback(filter);
    let result = tracing_subscriber::fmt()
      .with_env_filter(env_filter)
      .with_writer(std::io::stderr)
      .with_target(true)
      .try_init();
    if result.is_err() {
      // Somebody else already installed a subscriber; use theirs.
      tracing::debug!("global tracing subscriber already initialized");
    }
    if let Some(err) = parse_error {
      warn!(filter, error = %err, fallback = FALLBACK_FILTER, "invalid log filter");
    }
  });
}
