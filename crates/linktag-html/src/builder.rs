use std::{borrow::Cow, fmt::Write};

use crate::Attributes;

/// Renders HTML elements for the link helpers.
///
/// Implementations are responsible for escaping attribute values. Element
/// content is passed through as-is, since helpers nest already rendered
/// markup (an `<img>` inside an `<a>`, for instance).
pub trait TagBuilder {
  /// Render a void element such as `<img>` or `<input>`.
  fn tag(&self, name: &str, attributes: &Attributes) -> String;

  /// Render an element wrapping `content`.
  fn content_tag(
    &self,
    name: &str,
    content: &str,
    attributes: &Attributes,
  ) -> String;

  /// Escape text for inclusion in markup.
  fn escape<'a>(&self, text: &'a str) -> Cow<'a, str> {
    escape_html(text)
  }
}

/// Escape `&`, `<`, `>` and `"`.
#[must_use]
pub fn escape_html(text: &str) -> Cow<'_, str> {
  html_escape::encode_double_quoted_attribute(text)
}

/// Default [`TagBuilder`].
#[derive(Debug, Clone, Copy)]
pub struct HtmlTagBuilder {
  /// Close void elements XHTML style (`<br />`) instead of `<br>`.
  pub xhtml: bool,
}

impl Default for HtmlTagBuilder {
  fn default() -> Self {
    Self { xhtml: true }
  }
}

impl HtmlTagBuilder {
  #[must_use]
  pub const fn new(xhtml: bool) -> Self {
    Self { xhtml }
  }

  fn open(name: &str, attributes: &Attributes) -> String {
    let mut out = String::with_capacity(name.len() + 2 + attributes.len() * 16);
    out.push('<');
    out.push_str(name);
    for (key, value) in attributes.iter() {
      // Writing into a String cannot fail
      let _ = write!(
        out,
        " {key}=\"{}\"",
        html_escape::encode_double_quoted_attribute(value)
      );
    }
    out
  }
}

impl TagBuilder for HtmlTagBuilder {
  fn tag(&self, name: &str, attributes: &Attributes) -> String {
    let mut out = Self::open(name, attributes);
    out.push_str(if self.xhtml { " />" } else { ">" });
    out
  }

  fn content_tag(
    &self,
    name: &str,
    content: &str,
    attributes: &Attributes,
  ) -> String {
    let mut out = Self::open(name, attributes);
    out.push('>');
    out.push_str(content);
    out.push_str("</");
    out.push_str(name);
    out.push('>');
    out
  }
}
