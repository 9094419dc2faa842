use std::collections::BTreeMap;

/// HTML attributes for a single tag.
///
/// Attributes are kept sorted by name so that rendered markup is stable
/// regardless of the order options were supplied in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
  inner: BTreeMap<String, String>,
}

impl Attributes {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Set an attribute, returning the previous value if there was one.
  pub fn insert(
    &mut self,
    name: impl Into<String>,
    value: impl Into<String>,
  ) -> Option<String> {
    self.inner.insert(name.into(), value.into())
  }

  pub fn remove(&mut self, name: &str) -> Option<String> {
    self.inner.remove(name)
  }

  #[must_use]
  pub fn get(&self, name: &str) -> Option<&str> {
    self.inner.get(name).map(String::as_str)
  }

  #[must_use]
  pub fn contains(&self, name: &str) -> bool {
    self.inner.contains_key(name)
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.inner.is_empty()
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.inner.len()
  }

  /// Iterate over `(name, value)` pairs in name order.
  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
  }

  /// Return a copy of these attributes with `name` set to `value`.
  #[must_use]
  pub fn with(
    mut self,
    name: impl Into<String>,
    value: impl Into<String>,
  ) -> Self {
    self.insert(name, value);
    self
  }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    Self {
      inner: iter
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect(),
    }
  }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Attributes {
  fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
    self
      .inner
      .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
  }
}
