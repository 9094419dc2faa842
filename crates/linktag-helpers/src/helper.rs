use linktag_html::{Attributes, TagBuilder};
use linktag_url::{LinkTarget, RequestContext, UrlError, UrlResolver};

use crate::{HtmlOptions, javascript};

/// Settings that are fixed for a site rather than passed per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperSettings {
  /// Directory bare image names are looked up in.
  pub images_dir:              String,
  /// Extension appended to image paths that have none.
  pub default_image_extension: String,
}

impl Default for HelperSettings {
  fn default() -> Self {
    Self {
      images_dir:              "/images".to_string(),
      default_image_extension: "png".to_string(),
    }
  }
}

/// Replacement markup used when a conditional link is suppressed.
pub enum Fallback<'f> {
  /// Called with the link name.
  Name(&'f dyn Fn(&str) -> String),
  /// Called with the link name, its target and its HTML options.
  Full(&'f dyn Fn(&str, &LinkTarget, &HtmlOptions) -> String),
}

impl std::fmt::Debug for Fallback<'_> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Name(_) => f.write_str("Fallback::Name(..)"),
      Self::Full(_) => f.write_str("Fallback::Full(..)"),
    }
  }
}

/// Link helpers bound to one request.
pub struct LinkHelper<'a> {
  resolver: &'a dyn UrlResolver,
  tags:     &'a dyn TagBuilder,
  request:  &'a RequestContext,
  settings: HelperSettings,
}

impl<'a> LinkHelper<'a> {
  #[must_use]
  pub fn new(
    resolver: &'a dyn UrlResolver,
    tags: &'a dyn TagBuilder,
    request: &'a RequestContext,
  ) -> Self {
    Self {
      resolver,
      tags,
      request,
      settings: HelperSettings::default(),
    }
  }

  #[must_use]
  pub fn with_settings(mut self, settings: HelperSettings) -> Self {
    self.settings = settings;
    self
  }

  #[must_use]
  pub const fn settings(&self) -> &HelperSettings {
    &self.settings
  }

  #[must_use]
  pub const fn request(&self) -> &RequestContext {
    self.request
  }

  pub(crate) fn tags(&self) -> &dyn TagBuilder {
    self.tags
  }

  /// Resolve `target` to an href. Routes default to `only_path`.
  ///
  /// # Errors
  ///
  /// Propagates the resolver's [`UrlError`].
  pub fn url_for(&self, target: &LinkTarget) -> Result<String, UrlError> {
    match target {
      LinkTarget::Route(query) if query.only_path.is_none() => {
        let mut query = query.clone();
        query.only_path = Some(true);
        self
          .resolver
          .resolve(&LinkTarget::Route(query), self.request)
      },
      _ => self.resolver.resolve(target, self.request),
    }
  }

  /// Render an anchor to `target`. Without a `name` (or with an empty one)
  /// the escaped href doubles as the link text.
  ///
  /// # Errors
  ///
  /// Propagates the resolver's [`UrlError`] for route targets.
  pub fn link_to(
    &self,
    name: Option<&str>,
    target: &LinkTarget,
    html: &HtmlOptions,
  ) -> Result<String, UrlError> {
    let href = match target {
      LinkTarget::Literal(url) => url.clone(),
      LinkTarget::Route(_) => self.url_for(target)?,
    };

    let content = match name {
      Some(name) if !name.is_empty() => name.into(),
      _ => self.tags.escape(&href),
    };
    let mut attributes = link_attributes(html);
    attributes.insert("href", href.as_str());
    Ok(self.tags.content_tag("a", &content, &attributes))
  }

  /// Render the link unless `condition` holds, in which case the escaped
  /// name (or the fallback's output) is returned instead. An empty name is
  /// replaced by the resolved URL.
  ///
  /// # Errors
  ///
  /// Propagates the resolver's [`UrlError`] when the link is rendered.
  pub fn link_to_unless(
    &self,
    condition: bool,
    name: &str,
    target: &LinkTarget,
    html: &HtmlOptions,
    fallback: Option<&Fallback<'_>>,
  ) -> Result<String, UrlError> {
    if !condition {
      return self.link_to(Some(name), target, html);
    }

    let url;
    let name = if name.is_empty() {
      url = self.url_for(target)?;
      url.as_str()
    } else {
      name
    };

    log::debug!("Suppressing link `{name}`");
    Ok(match fallback {
      None => self.tags.escape(name).into_owned(),
      Some(Fallback::Name(render)) => render(name),
      Some(Fallback::Full(render)) => render(name, target, html),
    })
  }

  /// Render the link only if `condition` holds.
  ///
  /// # Errors
  ///
  /// Propagates the resolver's [`UrlError`] when the link is rendered.
  pub fn link_to_if(
    &self,
    condition: bool,
    name: &str,
    target: &LinkTarget,
    html: &HtmlOptions,
    fallback: Option<&Fallback<'_>>,
  ) -> Result<String, UrlError> {
    self.link_to_unless(!condition, name, target, html, fallback)
  }

  /// Render the link unless it points at the current page.
  ///
  /// # Errors
  ///
  /// Propagates the resolver's [`UrlError`].
  pub fn link_to_unless_current(
    &self,
    name: &str,
    target: &LinkTarget,
    html: &HtmlOptions,
    fallback: Option<&Fallback<'_>>,
  ) -> Result<String, UrlError> {
    let current = self.current_page(target)?;
    self.link_to_unless(current, name, target, html, fallback)
  }

  /// Whether `target` resolves to the current request's URI.
  ///
  /// # Errors
  ///
  /// Propagates the resolver's [`UrlError`].
  pub fn current_page(&self, target: &LinkTarget) -> Result<bool, UrlError> {
    Ok(self.url_for(target)? == self.request.request_uri)
  }
}

/// Attributes for an anchor, with the reserved options turned into an
/// `onclick` handler.
fn link_attributes(html: &HtmlOptions) -> Attributes {
  let mut attributes = html.attributes.clone();
  if let Some(onclick) =
    javascript::onclick(html.confirm.as_deref(), &html.behaviour)
  {
    attributes.insert("onclick", onclick);
  }
  attributes
}
