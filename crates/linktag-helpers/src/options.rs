//! Typed option structures for the helpers.
//!
//! Callers that receive options as loose `key=value` pairs (a template
//! engine, the CLI) go through the `from_pairs` constructors, which normalize
//! keys and lift the reserved pseudo-attributes into named fields. Everything
//! else ends up in [`Attributes`] and is emitted on the tag verbatim.

use std::str::FromStr;

use linktag_html::Attributes;

use crate::OptionsError;

/// Normalize an option key: trim it and drop a leading `:`, so `:confirm`
/// and `confirm` name the same option.
fn normalize_key(key: &str) -> Result<String, OptionsError> {
  let key = key.trim();
  let key = key.strip_prefix(':').unwrap_or(key).trim();
  if key.is_empty() {
    return Err(OptionsError::EmptyKey);
  }
  Ok(key.to_string())
}

fn parse_bool(key: &str, value: &str) -> Result<bool, OptionsError> {
  match value.trim().to_lowercase().as_str() {
    "true" | "yes" | "1" | "" => Ok(true),
    "false" | "no" | "0" => Ok(false),
    _ => {
      Err(OptionsError::InvalidBoolean {
        key:   key.to_string(),
        value: value.to_string(),
      })
    },
  }
}

/// A popup window opened instead of following the link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Popup {
  /// `window.open(this.href)`.
  Default,
  /// `window.open(this.href, name, features)`.
  Window { name: String, features: String },
}

impl Popup {
  /// Parse `true`, or `name,features` where `features` may itself contain
  /// commas (`help,height=300,width=600`).
  fn parse(value: &str) -> Option<Self> {
    match value.trim() {
      "" | "true" | "yes" | "1" => Some(Self::Default),
      "false" | "no" | "0" => None,
      window => {
        let (name, features) = window.split_once(',').unwrap_or((window, ""));
        Some(Self::Window {
          name:     name.trim().to_string(),
          features: features.trim().to_string(),
        })
      },
    }
  }
}

/// What clicking the link does besides navigating.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LinkBehaviour {
  #[default]
  Follow,
  Popup(Popup),
  /// Submit a dynamically created POST form targeting the href.
  Post,
}

/// HTML options for anchors and buttons.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlOptions {
  /// Message for a JavaScript `confirm()` guard.
  pub confirm:    Option<String>,
  pub behaviour:  LinkBehaviour,
  pub attributes: Attributes,
}

impl HtmlOptions {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  #[must_use]
  pub fn confirm(mut self, message: impl Into<String>) -> Self {
    self.confirm = Some(message.into());
    self
  }

  #[must_use]
  pub fn behaviour(mut self, behaviour: LinkBehaviour) -> Self {
    self.behaviour = behaviour;
    self
  }

  #[must_use]
  pub fn attr(
    mut self,
    name: impl Into<String>,
    value: impl Into<String>,
  ) -> Self {
    self.attributes.insert(name, value);
    self
  }

  /// Build options from raw pairs.
  ///
  /// `confirm`, `popup` and `post` are reserved; every other key becomes an
  /// attribute. Later pairs override earlier ones.
  ///
  /// # Errors
  ///
  /// Returns an [`OptionsError`] for empty keys, unparsable booleans, or when
  /// both `popup` and `post` are requested.
  pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, OptionsError>
  where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
  {
    let mut options = Self::default();
    let mut popup = None;
    let mut post = false;

    for (key, value) in pairs {
      let key = normalize_key(key.as_ref())?;
      let value = value.into();
      match key.as_str() {
        "confirm" => options.confirm = Some(value),
        "popup" => popup = Popup::parse(&value),
        "post" => post = parse_bool(&key, &value)?,
        _ => {
          options.attributes.insert(key, value);
        },
      }
    }

    options.behaviour = match (popup, post) {
      (Some(_), true) => return Err(OptionsError::ConflictingBehaviour),
      (Some(popup), false) => LinkBehaviour::Popup(popup),
      (None, true) => LinkBehaviour::Post,
      (None, false) => LinkBehaviour::Follow,
    };

    Ok(options)
  }
}

/// Width and height of a linked image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSize {
  pub width:  String,
  pub height: Option<String>,
}

impl ImageSize {
  /// Split a `WxH` string. Without an `x` the whole value is the width.
  #[must_use]
  pub fn parse(size: &str) -> Self {
    match size.split_once('x') {
      Some((width, height)) => {
        Self {
          width:  width.to_string(),
          height: Some(height.to_string()),
        }
      },
      None => {
        Self {
          width:  size.to_string(),
          height: None,
        }
      },
    }
  }
}

/// Attributes for the `<img>` inside an image link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageOptions {
  pub alt:    Option<String>,
  pub size:   Option<ImageSize>,
  pub border: Option<String>,
  pub align:  Option<String>,
}

impl ImageOptions {
  /// Move the image-specific attributes (`alt`, `size`, `border`, `align`)
  /// out of `html`.
  pub fn extract(html: &mut HtmlOptions) -> Self {
    let attrs = &mut html.attributes;
    Self {
      alt:    attrs.remove("alt"),
      size:   attrs.remove("size").as_deref().map(ImageSize::parse),
      border: attrs.remove("border"),
      align:  attrs.remove("align"),
    }
  }
}

/// How a mailto link is obfuscated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MailEncoding {
  #[default]
  None,
  /// Percent-encode word characters of the address in the href.
  Hex,
  /// Emit the whole anchor through an encoded `document.write`.
  Javascript,
}

impl FromStr for MailEncoding {
  type Err = OptionsError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "" | "none" => Ok(Self::None),
      "hex" => Ok(Self::Hex),
      "javascript" | "js" => Ok(Self::Javascript),
      other => Err(OptionsError::UnknownEncoding(other.to_string())),
    }
  }
}

/// Options for [`crate::LinkHelper::mail_to`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MailOptions {
  pub encode:      MailEncoding,
  pub cc:          Option<String>,
  pub bcc:         Option<String>,
  pub subject:     Option<String>,
  pub body:        Option<String>,
  /// Shown in place of `@` in the link text.
  pub replace_at:  Option<String>,
  /// Shown in place of `.` in the link text.
  pub replace_dot: Option<String>,
  pub attributes:  Attributes,
}

impl MailOptions {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  #[must_use]
  pub fn encode(mut self, encode: MailEncoding) -> Self {
    self.encode = encode;
    self
  }

  /// Build options from raw pairs. `encode`, `cc`, `bcc`, `subject`, `body`,
  /// `replace_at` and `replace_dot` are reserved.
  ///
  /// # Errors
  ///
  /// Returns an [`OptionsError`] for empty keys or an unknown encoding.
  pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, OptionsError>
  where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
  {
    let mut options = Self::default();

    for (key, value) in pairs {
      let key = normalize_key(key.as_ref())?;
      let value = value.into();
      match key.as_str() {
        "encode" => options.encode = value.parse()?,
        "cc" => options.cc = Some(value),
        "bcc" => options.bcc = Some(value),
        "subject" => options.subject = Some(value),
        "body" => options.body = Some(value),
        "replace_at" => options.replace_at = Some(value),
        "replace_dot" => options.replace_dot = Some(value),
        _ => {
          options.attributes.insert(key, value);
        },
      }
    }

    Ok(options)
  }
}
