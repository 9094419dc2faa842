use std::fmt::Write;

use crate::{
  LinkTarget,
  RequestContext,
  RouteQuery,
  UrlError,
  encode::{encode_component, encode_segment},
};

/// Turns a [`LinkTarget`] into an href for the given request.
pub trait UrlResolver {
  /// Resolve `target` in the context of `request`.
  ///
  /// # Errors
  ///
  /// Returns a [`UrlError`] when the target cannot be mapped to a URL.
  fn resolve(
    &self,
    target: &LinkTarget,
    request: &RequestContext,
  ) -> Result<String, UrlError>;
}

impl<F> UrlResolver for F
where
  F: Fn(&LinkTarget, &RequestContext) -> Result<String, UrlError>,
{
  fn resolve(
    &self,
    target: &LinkTarget,
    request: &RequestContext,
  ) -> Result<String, UrlError> {
    self(target, request)
  }
}

/// Resolves routes onto `/controller/action/id` paths.
///
/// - The controller defaults to the request's current controller.
/// - The action defaults to the current action when the controller is
///   unchanged, otherwise to `index`.
/// - A trailing `index` action is dropped when there is no id.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteResolver;

impl RouteResolver {
  fn path_for(
    query: &RouteQuery,
    request: &RequestContext,
  ) -> Result<String, UrlError> {
    let controller = query
      .controller
      .as_deref()
      .or(request.controller.as_deref())
      .ok_or(UrlError::MissingController)?;

    let same_controller = request.controller.as_deref() == Some(controller);
    let action = query.action.as_deref().unwrap_or_else(|| {
      if same_controller {
        request.action.as_deref().unwrap_or("index")
      } else {
        "index"
      }
    });

    let mut path = String::new();
    for segment in controller.split('/').filter(|s| !s.is_empty()) {
      path.push('/');
      path.push_str(&encode_segment(segment));
    }

    if action != "index" || query.id.is_some() {
      path.push('/');
      path.push_str(&encode_segment(action));
    }

    if let Some(ref id) = query.id {
      path.push('/');
      path.push_str(&encode_segment(id));
    }

    if path.is_empty() {
      path.push('/');
    }

    let mut separator = '?';
    for (key, value) in &query.params {
      // Writing into a String cannot fail
      let _ = write!(
        path,
        "{separator}{}={}",
        encode_component(key),
        encode_component(value)
      );
      separator = '&';
    }

    if let Some(ref anchor) = query.anchor {
      path.push('#');
      path.push_str(&encode_component(anchor));
    }

    Ok(path)
  }
}

impl UrlResolver for RouteResolver {
  fn resolve(
    &self,
    target: &LinkTarget,
    request: &RequestContext,
  ) -> Result<String, UrlError> {
    let query = match target {
      LinkTarget::Literal(url) => return Ok(url.clone()),
      LinkTarget::Route(query) => query,
    };

    let path = Self::path_for(query, request)?;
    if query.only_path.unwrap_or(false) {
      log::debug!("Resolved route to path {path}");
      return Ok(path);
    }

    let host = query
      .host
      .as_deref()
      .or(request.host.as_deref())
      .ok_or_else(|| UrlError::MissingHost { path: path.clone() })?;
    let protocol = query.protocol.as_deref().unwrap_or(&request.protocol);

    let url = format!("{protocol}://{host}{path}");
    log::debug!("Resolved route to URL {url}");
    Ok(url)
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, reason = "Fine in tests")]
  use super::*;

  fn request() -> RequestContext {
    RequestContext::new("/posts/show/3")
      .with_controller("posts")
      .with_action("show")
      .with_host("example.com")
  }

  fn path(query: RouteQuery) -> String {
    RouteResolver
      .resolve(&query.only_path(true).into(), &request())
      .unwrap()
  }

  #[test]
  fn test_literal_passes_through() {
    let url = RouteResolver
      .resolve(&LinkTarget::literal("http://a"), &request())
      .unwrap();
    assert_eq!(url, "http://a");
  }

  #[test]
  fn test_defaults_to_current_controller_and_action() {
    assert_eq!(path(RouteQuery::new().id("3")), "/posts/show/3");
    assert_eq!(path(RouteQuery::new().action("list")), "/posts/list");
  }

  #[test]
  fn test_other_controller_defaults_to_index() {
    assert_eq!(path(RouteQuery::new().controller("users")), "/users");
    assert_eq!(
      path(RouteQuery::new().controller("users").id("7")),
      "/users/index/7"
    );
  }

  #[test]
  fn test_namespaced_controller_keeps_slashes() {
    assert_eq!(
      path(RouteQuery::new().controller("admin/users").action("edit")),
      "/admin/users/edit"
    );
  }

  #[test]
  fn test_params_and_anchor() {
    let query = RouteQuery::new()
      .action("list")
      .param("page", "2")
      .param("q", "rust lang")
      .anchor("results");
    assert_eq!(path(query), "/posts/list?page=2&q=rust%20lang#results");
  }

  #[test]
  fn test_full_url_uses_request_host_and_protocol() {
    let url = RouteResolver
      .resolve(&RouteQuery::new().action("list").into(), &request())
      .unwrap();
    assert_eq!(url, "http://example.com/posts/list");

    let url = RouteResolver
      .resolve(
        &RouteQuery::new()
          .action("list")
          .host("other.org")
          .protocol("https")
          .into(),
        &request(),
      )
      .unwrap();
    assert_eq!(url, "https://other.org/posts/list");
  }

  #[test]
  fn test_missing_controller() {
    let err = RouteResolver
      .resolve(&RouteQuery::new().into(), &RequestContext::default())
      .unwrap_err();
    assert_eq!(err, UrlError::MissingController);
  }

  #[test]
  fn test_missing_host() {
    let err = RouteResolver
      .resolve(
        &RouteQuery::new().controller("users").into(),
        &RequestContext::default(),
      )
      .unwrap_err();
    assert_eq!(err, UrlError::MissingHost {
      path: "/users".to_string(),
    });
  }

  #[test]
  fn test_closure_resolver() {
    let resolver = |_: &LinkTarget,
                    _: &RequestContext|
     -> Result<String, UrlError> { Ok("/fixed".to_string()) };
    assert_eq!(
      resolver
        .resolve(&LinkTarget::literal("/x"), &request())
        .unwrap(),
      "/fixed"
    );
  }
}
