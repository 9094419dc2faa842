use std::{
  fs,
  path::{Path, PathBuf},
  sync::OnceLock,
};

use serde::{Deserialize, Serialize};

use crate::{
  error::ConfigError,
  request::{RequestConfig, RequestLayer},
};

/// Configuration for linktag.
///
/// Holds the site-wide helper settings and a description of the request
/// links are rendered for. Fields are typically loaded from a TOML or JSON
/// file and adjusted through `--config KEY=VALUE` overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Directory bare image names are served from.
  pub images_dir: String,

  /// Extension appended to image names without one.
  pub default_image_extension: String,

  /// Whether void tags are closed XHTML style.
  pub xhtml: bool,

  /// The current request.
  pub request: RequestConfig,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      images_dir:              "/images".to_string(),
      default_image_extension: "png".to_string(),
      xhtml:                   true,
      request:                 RequestConfig::default(),
    }
  }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
  match value.to_lowercase().as_str() {
    "true" | "yes" | "1" => Ok(true),
    "false" | "no" | "0" => Ok(false),
    _ => {
      Err(ConfigError::Config(format!(
        "Invalid boolean value for '{key}': '{value}'. Expected true/false, \
         yes/no, or 1/0"
      )))
    },
  }
}

/// One configuration file as written on disk.
///
/// Keys the file leaves out stay `None`, so layering files with
/// [`Config::merge`] only touches what each file actually sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConfigLayer {
  pub images_dir:              Option<String>,
  pub default_image_extension: Option<String>,
  pub xhtml:                   Option<bool>,
  pub request:                 RequestLayer,
}

impl ConfigLayer {
  /// Read a layer from a TOML or JSON file, chosen by extension.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or parsed, or if the format is
  /// unsupported.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| {
      ConfigError::Io {
        path: path.to_path_buf(),
        source,
      }
    })?;

    let extension = path
      .extension()
      .and_then(|ext| ext.to_str())
      .map(str::to_lowercase);

    match extension.as_deref() {
      Some("json") => {
        serde_json::from_str(&content).map_err(|source| {
          ConfigError::Serde {
            path: path.to_path_buf(),
            source,
          }
        })
      },
      Some("toml") => {
        toml::from_str(&content).map_err(|source| {
          ConfigError::Toml {
            path: path.to_path_buf(),
            source,
          }
        })
      },
      Some(_) => {
        Err(ConfigError::Config(format!(
          "Unsupported config file format: {}",
          path.display()
        )))
      },
      None => {
        Err(ConfigError::Config(format!(
          "Config file has no extension: {}",
          path.display()
        )))
      },
    }
  }
}

impl Config {
  /// Load configuration from a file (TOML or JSON).
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or parsed, or if the format is
  /// unsupported.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let mut config = Self::default();
    config.merge(ConfigLayer::from_file(path)?);
    Ok(config)
  }

  /// Load configuration from the given files, merged in order, or from a
  /// discovered config file when none are given. Overrides are applied last.
  ///
  /// # Errors
  ///
  /// Returns an error if a file cannot be loaded or an override is invalid.
  pub fn load(
    config_files: &[PathBuf],
    config_overrides: &[String],
  ) -> Result<Self, ConfigError> {
    let mut config = Self::default();

    if config_files.is_empty() {
      if let Some(discovered) = Self::find_config_file() {
        log::info!("Using discovered config file: {}", discovered.display());
        config.merge(ConfigLayer::from_file(&discovered)?);
      }
    } else {
      for path in config_files {
        config.merge(ConfigLayer::from_file(path)?);
      }

      if config_files.len() > 1 {
        log::info!("Loaded and merged {} config files", config_files.len());
      }
    }

    if !config_overrides.is_empty() {
      config.apply_overrides(config_overrides)?;
    }

    Ok(config)
  }

  /// Apply configuration overrides from KEY=VALUE strings.
  ///
  /// Nested keys use dots, e.g. `request.host=example.com`.
  ///
  /// # Errors
  ///
  /// Returns an error if an override is not in KEY=VALUE format, names an
  /// unknown key, or has a value of the wrong type.
  pub fn apply_overrides(
    &mut self,
    overrides: &[String],
  ) -> Result<(), ConfigError> {
    for override_str in overrides {
      let (key, value) = override_str.split_once('=').ok_or_else(|| {
        ConfigError::Config(format!(
          "Invalid config override format: '{override_str}'. Expected \
           KEY=VALUE"
        ))
      })?;

      self.apply_override(key.trim(), value.trim())?;
    }

    Ok(())
  }

  /// Apply a single override.
  ///
  /// # Errors
  ///
  /// Returns an error for unknown keys and invalid values.
  pub fn apply_override(
    &mut self,
    key: &str,
    value: &str,
  ) -> Result<(), ConfigError> {
    match key {
      "images_dir" => self.images_dir = value.to_string(),
      "default_image_extension" => {
        self.default_image_extension =
          value.trim_start_matches('.').to_string();
      },
      "xhtml" => self.xhtml = parse_bool(key, value)?,
      _ => {
        let Some(field) = key.strip_prefix("request.") else {
          return Err(ConfigError::Config(format!(
            "Unknown configuration key: '{key}'. See documentation for \
             supported keys."
          )));
        };
        self.request.apply_override(field, value)?;
      },
    }

    log::debug!("Applied config override {key}={value}");
    Ok(())
  }

  /// Merge a file layer into this config. Every key the layer sets replaces
  /// the current value, even when it equals the default.
  pub fn merge(&mut self, layer: ConfigLayer) {
    if let Some(images_dir) = layer.images_dir {
      self.images_dir = images_dir;
    }
    if let Some(extension) = layer.default_image_extension {
      self.default_image_extension = extension;
    }
    if let Some(xhtml) = layer.xhtml {
      self.xhtml = xhtml;
    }
    self.request.merge(layer.request);
  }

  /// Search for config files in common locations
  #[must_use]
  pub fn find_config_file() -> Option<PathBuf> {
    static RESULT: OnceLock<Option<PathBuf>> = OnceLock::new();
    RESULT
      .get_or_init(|| {
        let config_filenames = [
          "linktag.toml",
          "linktag.json",
          ".linktag.toml",
          ".linktag.json",
          ".config/linktag.toml",
          ".config/linktag.json",
        ];

        let current_dir = std::env::current_dir().ok()?;
        for filename in &config_filenames {
          let config_path = current_dir.join(filename);
          if config_path.exists() {
            return Some(config_path);
          }
        }

        if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME") {
          let xdg_config_dir = PathBuf::from(xdg_config_home);
          for filename in &["linktag.toml", "linktag.json"] {
            let config_path = xdg_config_dir.join(filename);
            if config_path.exists() {
              return Some(config_path);
            }
          }
        }

        if let Ok(home) = std::env::var("HOME") {
          let home_config_dir =
            PathBuf::from(home).join(".config").join("linktag");
          for filename in &["config.toml", "config.json"] {
            let config_path = home_config_dir.join(filename);
            if config_path.exists() {
              return Some(config_path);
            }
          }
        }

        None
      })
      .clone()
  }

  /// Generate a default configuration file with commented explanations
  ///
  /// # Errors
  ///
  /// Returns an error if the format is unsupported or the file cannot be
  /// written.
  pub fn generate_default_config(
    format: &str,
    path: &Path,
  ) -> Result<(), ConfigError> {
    let config_content = crate::templates::get_template(format)
      .map_err(|e| ConfigError::Template(e.to_string()))?;

    fs::write(path, config_content).map_err(|source| {
      ConfigError::Io {
        path: path.to_path_buf(),
        source,
      }
    })?;

    log::info!("Created default configuration file: {}", path.display());
    Ok(())
  }
}
