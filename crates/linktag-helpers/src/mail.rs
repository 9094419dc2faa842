use std::fmt::Write;

use linktag_url::encode::encode_component;

use crate::{LinkHelper, MailEncoding, MailOptions};

/// `?cc=..&bcc=..&body=..&subject=..`, or nothing when no extras are set.
fn mail_extras(options: &MailOptions) -> String {
  let fields = [
    ("cc", &options.cc),
    ("bcc", &options.bcc),
    ("body", &options.body),
    ("subject", &options.subject),
  ];

  let mut extras = String::new();
  for (key, value) in fields {
    if let Some(value) = value {
      extras.push(if extras.is_empty() { '?' } else { '&' });
      extras.push_str(key);
      extras.push('=');
      extras.push_str(&encode_component(value));
    }
  }
  extras
}

/// Percent-encode ASCII word characters by code point, leaving everything
/// else (`@`, `.`, non-ASCII) as is.
fn hex_encode_address(address: &str) -> String {
  let mut out = String::with_capacity(address.len() * 3);
  for c in address.chars() {
    if c.is_ascii_alphanumeric() || c == '_' {
      // Writing into a String cannot fail
      let _ = write!(out, "%{:x}", u32::from(c));
    } else {
      out.push(c);
    }
  }
  out
}

/// Percent-encode every byte as two lowercase hex digits.
fn hex_encode_bytes(text: &str) -> String {
  let mut out = String::with_capacity(text.len() * 3);
  for byte in text.bytes() {
    let _ = write!(out, "%{byte:02x}");
  }
  out
}

fn escape_single_quoted(text: &str) -> String {
  text.replace('\\', "\\\\").replace('\'', "\\'")
}

impl LinkHelper<'_> {
  /// Render a `mailto:` link, optionally obfuscated.
  ///
  /// - [`MailEncoding::None`] renders a plain anchor.
  /// - [`MailEncoding::Hex`] percent-encodes the address in the href.
  /// - [`MailEncoding::Javascript`] writes the plain anchor from an encoded
  ///   `document.write` call inside a `<script>`.
  ///
  /// Without a `name` the address is the link text, with `replace_at` and
  /// `replace_dot` applied in the plain and hex forms.
  #[must_use]
  pub fn mail_to(
    &self,
    address: &str,
    name: Option<&str>,
    options: &MailOptions,
  ) -> String {
    let name = name.filter(|name| !name.is_empty());
    let extras = mail_extras(options);
    let tags = self.tags();

    log::debug!("Rendering mailto link with {:?} encoding", options.encode);

    match options.encode {
      MailEncoding::Javascript => {
        let mut attributes = options.attributes.clone();
        attributes.insert("href", format!("mailto:{address}{extras}"));
        let anchor =
          tags.content_tag("a", name.unwrap_or(address), &attributes);
        let statement =
          format!("document.write('{}');", escape_single_quoted(&anchor));
        format!(
          "<script type=\"text/javascript\">eval(unescape('{}'))</script>",
          hex_encode_bytes(&statement)
        )
      },
      MailEncoding::Hex | MailEncoding::None => {
        let href_address = if options.encode == MailEncoding::Hex {
          hex_encode_address(address)
        } else {
          address.to_string()
        };

        let mut attributes = options.attributes.clone();
        attributes.insert("href", format!("mailto:{href_address}{extras}"));

        let content = name.map_or_else(
          || {
            let mut shown = address.to_string();
            if let Some(ref at) = options.replace_at {
              shown = shown.replace('@', at);
            }
            if let Some(ref dot) = options.replace_dot {
              shown = shown.replace('.', dot);
            }
            shown
          },
          str::to_string,
        );
        tags.content_tag("a", &content, &attributes)
      },
    }
  }
}

#[cfg(test)]
mod tests {
  use linktag_html::HtmlTagBuilder;
  use linktag_url::{RequestContext, RouteResolver};

  use super::*;

  fn mail(address: &str, name: Option<&str>, options: &MailOptions) -> String {
    let request = RequestContext::default();
    let tags = HtmlTagBuilder::default();
    LinkHelper::new(&RouteResolver, &tags, &request)
      .mail_to(address, name, options)
  }

  #[test]
  fn test_plain() {
    assert_eq!(
      mail("me@x.com", None, &MailOptions::new()),
      r#"<a href="mailto:me@x.com">me@x.com</a>"#
    );
    assert_eq!(
      mail("me@x.com", Some("Mail me"), &MailOptions::new()),
      r#"<a href="mailto:me@x.com">Mail me</a>"#
    );
  }

  #[test]
  fn test_hex_encode_address() {
    assert_eq!(hex_encode_address("me@x.com"), "%6d%65@%78.%63%6f%6d");
    assert_eq!(hex_encode_address("a_b-1"), "%61%5f%62-%31");
    assert_eq!(hex_encode_address("é@x"), "é@%78");
  }

  #[test]
  fn test_hex() {
    let options = MailOptions::new().encode(MailEncoding::Hex);
    assert_eq!(
      mail("me@x.com", None, &options),
      r#"<a href="mailto:%6d%65@%78.%63%6f%6d">me@x.com</a>"#
    );
  }

  #[test]
  fn test_javascript() {
    let options = MailOptions::new().encode(MailEncoding::Javascript);
    let out = mail("a@b", None, &options);
    let expected = hex_encode_bytes(
      r#"document.write('<a href="mailto:a@b">a@b</a>');"#,
    );
    assert_eq!(
      out,
      format!(
        "<script type=\"text/javascript\">eval(unescape('{expected}'))</script>"
      )
    );
    assert!(out.contains("%64%6f%63%75%6d%65%6e%74"));
  }

  #[test]
  fn test_hex_encode_bytes_pads() {
    assert_eq!(hex_encode_bytes("\n "), "%0a%20");
    assert_eq!(hex_encode_bytes("é"), "%c3%a9");
  }

  #[test]
  fn test_extras_order_and_encoding() {
    let options = MailOptions {
      cc: Some("boss@x.com".to_string()),
      subject: Some("Hello there".to_string()),
      body: Some("Line & more".to_string()),
      ..MailOptions::default()
    };
    assert_eq!(
      mail_extras(&options),
      "?cc=boss%40x.com&body=Line%20%26%20more&subject=Hello%20there"
    );
    assert_eq!(mail_extras(&MailOptions::new()), "");
  }

  #[test]
  fn test_replace_at_and_dot_only_affect_text() {
    let options = MailOptions {
      replace_at: Some(" at ".to_string()),
      replace_dot: Some(" dot ".to_string()),
      ..MailOptions::default()
    };
    assert_eq!(
      mail("me@x.com", None, &options),
      r#"<a href="mailto:me@x.com">me at x dot com</a>"#
    );
    assert_eq!(
      mail("me@x.com", Some("Me"), &options),
      r#"<a href="mailto:me@x.com">Me</a>"#
    );
  }

  #[test]
  fn test_attributes_are_kept() {
    let mut options = MailOptions::new();
    options.attributes.insert("class", "email");
    assert_eq!(
      mail("me@x.com", None, &options),
      r#"<a class="email" href="mailto:me@x.com">me@x.com</a>"#
    );
  }
}
