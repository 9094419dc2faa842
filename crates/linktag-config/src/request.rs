use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// The request links are rendered for.
///
/// Helpers compare resolved URLs against `uri` to detect the current page,
/// and fall back to `controller`/`action` when a route leaves them out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestConfig {
  /// Path of the current request.
  pub uri: String,

  /// Controller handling the current request.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub controller: Option<String>,

  /// Action handling the current request.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub action: Option<String>,

  /// Host used for absolute URLs.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub host: Option<String>,

  /// Protocol used for absolute URLs.
  pub protocol: String,
}

impl Default for RequestConfig {
  fn default() -> Self {
    Self {
      uri:        "/".to_string(),
      controller: None,
      action:     None,
      host:       None,
      protocol:   "http".to_string(),
    }
  }
}

/// The `[request]` section of a single config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RequestLayer {
  pub uri:        Option<String>,
  pub controller: Option<String>,
  pub action:     Option<String>,
  pub host:       Option<String>,
  pub protocol:   Option<String>,
}

impl RequestConfig {
  /// Merge a file's `[request]` section into this one. Keys the section sets
  /// replace ours.
  pub fn merge(&mut self, layer: RequestLayer) {
    if let Some(uri) = layer.uri {
      self.uri = uri;
    }
    if let Some(protocol) = layer.protocol {
      self.protocol = protocol;
    }
    if layer.controller.is_some() {
      self.controller = layer.controller;
    }
    if layer.action.is_some() {
      self.action = layer.action;
    }
    if layer.host.is_some() {
      self.host = layer.host;
    }
  }

  /// Apply a single `request.<field>` override. An empty value clears
  /// optional fields.
  ///
  /// # Errors
  ///
  /// Returns an error if `field` is not a request field.
  pub fn apply_override(
    &mut self,
    field: &str,
    value: &str,
  ) -> Result<(), ConfigError> {
    let optional = || (!value.is_empty()).then(|| value.to_string());
    match field {
      "uri" => self.uri = value.to_string(),
      "protocol" => self.protocol = value.to_string(),
      "controller" => self.controller = optional(),
      "action" => self.action = optional(),
      "host" => self.host = optional(),
      _ => {
        return Err(ConfigError::Config(format!(
          "Unknown configuration key: 'request.{field}'. See documentation \
           for supported keys."
        )));
      },
    }
    Ok(())
  }
}
