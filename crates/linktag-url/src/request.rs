/// Read-only view of the request a page is being rendered for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
  /// Path and query of the current request, e.g. `/posts/show/3`.
  pub request_uri: String,
  pub controller:  Option<String>,
  pub action:      Option<String>,
  pub host:        Option<String>,
  pub protocol:    String,
}

impl RequestContext {
  #[must_use]
  pub fn new(request_uri: impl Into<String>) -> Self {
    Self {
      request_uri: request_uri.into(),
      controller:  None,
      action:      None,
      host:        None,
      protocol:    "http".to_string(),
    }
  }

  #[must_use]
  pub fn with_controller(mut self, controller: impl Into<String>) -> Self {
    self.controller = Some(controller.into());
    self
  }

  #[must_use]
  pub fn with_action(mut self, action: impl Into<String>) -> Self {
    self.action = Some(action.into());
    self
  }

  #[must_use]
  pub fn with_host(mut self, host: impl Into<String>) -> Self {
    self.host = Some(host.into());
    self
  }

  #[must_use]
  pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
    self.protocol = protocol.into();
    self
  }
}

impl Default for RequestContext {
  fn default() -> Self {
    Self::new("/")
  }
}
