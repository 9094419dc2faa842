//! Percent-encoding sets shared by route and mailto URL assembly.

use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left bare in query keys and values: alphanumerics and `*-._`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
  .remove(b'*')
  .remove(b'-')
  .remove(b'.')
  .remove(b'_');

/// Path segments additionally keep `~`, `:` and `@` intact.
const SEGMENT: &AsciiSet = &COMPONENT.remove(b'~').remove(b':').remove(b'@');

/// Encode a query-string key or value. Spaces become `%20`.
#[must_use]
pub fn encode_component(value: &str) -> Cow<'_, str> {
  utf8_percent_encode(value, COMPONENT).into()
}

/// Encode a single path segment.
#[must_use]
pub fn encode_segment(value: &str) -> Cow<'_, str> {
  utf8_percent_encode(value, SEGMENT).into()
}
