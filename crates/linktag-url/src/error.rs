use thiserror::Error;

/// Errors raised while resolving a [`crate::LinkTarget`] into a URL.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UrlError {
  /// The route names no controller and the request has no current one.
  #[error("cannot resolve route without a controller")]
  MissingController,

  /// A full URL was requested but neither the route nor the request names a
  /// host.
  #[error("cannot build an absolute URL for `{path}` without a host")]
  MissingHost { path: String },
}
