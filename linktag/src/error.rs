use linktag_config::ConfigError;
use linktag_helpers::OptionsError;
use linktag_url::UrlError;
use thiserror::Error;

/// Top-level error type for the linktag crate.
#[derive(Debug, Error)]
pub enum LinktagError {
  #[error(transparent)]
  Config(#[from] ConfigError),

  #[error("URL error: {0}")]
  Url(#[from] UrlError),

  #[error("Option error: {0}")]
  Options(#[from] OptionsError),

  #[error("Invalid argument '{0}'. Expected KEY=VALUE")]
  InvalidPair(String),

  #[error("Usage error: {0}")]
  Usage(String),
}
