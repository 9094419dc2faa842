use std::fmt;

/// Error type for template operations.
#[derive(Debug)]
pub enum TemplateError {
  /// The requested configuration format is not supported.
  UnsupportedFormat(String),
}

impl fmt::Display for TemplateError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::UnsupportedFormat(format) => {
        write!(f, "Unsupported config format: {format}")
      },
    }
  }
}

impl std::error::Error for TemplateError {}

/// Default configuration in TOML, with every field explained.
pub const DEFAULT_TOML_TEMPLATE: &str = r#"# linktag configuration file

# Directory that bare image names are served from
images_dir = "/images"

# Extension appended to image names without one
default_image_extension = "png"

# Close void tags XHTML style (<img ... />) rather than HTML style (<img ...>)
xhtml = true

# The request links are rendered for. Links that resolve to `uri` count as
# the current page.
[request]
uri = "/"
protocol = "http"

# Controller and action of the current request. Routes that omit them fall
# back to these.
# controller = "posts"
# action = "index"

# Host used when rendering absolute URLs
# host = "example.com"
"#;

/// Default configuration in JSON.
pub const DEFAULT_JSON_TEMPLATE: &str = r#"{
  "images_dir": "/images",
  "default_image_extension": "png",
  "xhtml": true,
  "request": {
    "uri": "/",
    "protocol": "http"
  }
}
"#;

/// Get the default configuration template for `format` (`toml` or `json`).
///
/// # Errors
///
/// Returns [`TemplateError::UnsupportedFormat`] for any other format.
pub fn get_template(format: &str) -> Result<&'static str, TemplateError> {
  match format.to_lowercase().as_str() {
    "toml" => Ok(DEFAULT_TOML_TEMPLATE),
    "json" => Ok(DEFAULT_JSON_TEMPLATE),
    _ => Err(TemplateError::UnsupportedFormat(format.to_string())),
  }
}
