use indexmap::IndexMap;

/// Destination of a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
  /// A URL or path used verbatim.
  Literal(String),
  /// A destination described by controller, action and parameters.
  Route(RouteQuery),
}

impl LinkTarget {
  #[must_use]
  pub fn literal(url: impl Into<String>) -> Self {
    Self::Literal(url.into())
  }
}

impl From<&str> for LinkTarget {
  fn from(url: &str) -> Self {
    Self::Literal(url.to_string())
  }
}

impl From<String> for LinkTarget {
  fn from(url: String) -> Self {
    Self::Literal(url)
  }
}

impl From<RouteQuery> for LinkTarget {
  fn from(query: RouteQuery) -> Self {
    Self::Route(query)
  }
}

/// Structured description of a destination.
///
/// Unset `controller` and `action` fall back to the current request's, see
/// [`crate::RouteResolver`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteQuery {
  pub controller: Option<String>,
  pub action:     Option<String>,
  pub id:         Option<String>,
  /// Extra parameters, appended to the query string in insertion order.
  pub params:     IndexMap<String, String>,
  pub anchor:     Option<String>,
  /// Emit only the path instead of a full URL. Resolvers treat `None` as
  /// `false`; the link helpers default it to `true`.
  pub only_path:  Option<bool>,
  pub host:       Option<String>,
  pub protocol:   Option<String>,
}

impl RouteQuery {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  #[must_use]
  pub fn controller(mut self, controller: impl Into<String>) -> Self {
    self.controller = Some(controller.into());
    self
  }

  #[must_use]
  pub fn action(mut self, action: impl Into<String>) -> Self {
    self.action = Some(action.into());
    self
  }

  #[must_use]
  pub fn id(mut self, id: impl Into<String>) -> Self {
    self.id = Some(id.into());
    self
  }

  #[must_use]
  pub fn param(
    mut self,
    key: impl Into<String>,
    value: impl Into<String>,
  ) -> Self {
    self.params.insert(key.into(), value.into());
    self
  }

  #[must_use]
  pub fn anchor(mut self, anchor: impl Into<String>) -> Self {
    self.anchor = Some(anchor.into());
    self
  }

  #[must_use]
  pub const fn only_path(mut self, only_path: bool) -> Self {
    self.only_path = Some(only_path);
    self
  }

  #[must_use]
  pub fn host(mut self, host: impl Into<String>) -> Self {
    self.host = Some(host.into());
    self
  }

  #[must_use]
  pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
    self.protocol = Some(protocol.into());
    self
  }
}
