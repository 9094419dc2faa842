use linktag_html::Attributes;
use linktag_url::{LinkTarget, UrlError};

use crate::{HtmlOptions, ImageOptions, LinkHelper};

/// `logo.png` → `Logo`, `icons/ARROW.gif` → `Arrow`.
fn default_alt(src: &str) -> String {
  let file = src.rsplit('/').next().unwrap_or(src);
  let stem = file.split('.').next().unwrap_or(file);

  let mut chars = stem.chars();
  chars.next().map_or_else(String::new, |first| {
    first
      .to_uppercase()
      .chain(chars.flat_map(char::to_lowercase))
      .collect()
  })
}

impl LinkHelper<'_> {
  /// Path of an image: names without a `/` live in the images directory,
  /// and file names without an extension get the default one.
  #[must_use]
  pub fn image_path(&self, src: &str) -> String {
    let settings = self.settings();
    let mut path = if src.contains('/') {
      src.to_string()
    } else {
      format!("{}/{src}", settings.images_dir.trim_end_matches('/'))
    };

    let file = path.rsplit('/').next().unwrap_or_default();
    if !file.contains('.') && !settings.default_image_extension.is_empty() {
      path.push('.');
      path.push_str(&settings.default_image_extension);
    }
    path
  }

  /// Render an `<img>` wrapped in a link to `target`.
  ///
  /// `alt`, `size` (`WxH`), `border` and `align` in `html` apply to the image;
  /// the remaining options apply to the anchor.
  ///
  /// # Errors
  ///
  /// Propagates the resolver's [`UrlError`] for route targets.
  pub fn link_image_to(
    &self,
    src: &str,
    target: &LinkTarget,
    html: &HtmlOptions,
  ) -> Result<String, UrlError> {
    let mut html = html.clone();
    let image = ImageOptions::extract(&mut html);

    let mut attributes = Attributes::new();
    attributes.insert("src", self.image_path(src));
    attributes.insert("alt", image.alt.unwrap_or_else(|| default_alt(src)));
    if let Some(size) = image.size {
      attributes.insert("width", size.width);
      if let Some(height) = size.height {
        attributes.insert("height", height);
      }
    }
    attributes.extend(
      [("border", image.border), ("align", image.align)]
        .into_iter()
        .filter_map(|(name, value)| value.map(|value| (name, value))),
    );

    let img = self.tags().tag("img", &attributes);
    self.link_to(Some(img.as_str()), target, &html)
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, reason = "Fine in tests")]
  use linktag_html::HtmlTagBuilder;
  use linktag_url::{RequestContext, RouteResolver};

  use super::*;
  use crate::HelperSettings;

  #[test]
  fn test_default_alt() {
    assert_eq!(default_alt("logo"), "Logo");
    assert_eq!(default_alt("icons/ARROW.gif"), "Arrow");
    assert_eq!(default_alt("/a/b/rss.feed.png"), "Rss");
    assert_eq!(default_alt(""), "");
  }

  #[test]
  fn test_image_path() {
    let request = RequestContext::default();
    let tags = HtmlTagBuilder::default();
    let helper = LinkHelper::new(&RouteResolver, &tags, &request);

    assert_eq!(helper.image_path("logo"), "/images/logo.png");
    assert_eq!(helper.image_path("logo.gif"), "/images/logo.gif");
    assert_eq!(helper.image_path("/img/logo"), "/img/logo.png");
    assert_eq!(helper.image_path("/v1.2/logo"), "/v1.2/logo.png");
    assert_eq!(helper.image_path("http://cdn/x.jpg"), "http://cdn/x.jpg");
  }

  #[test]
  fn test_image_path_with_custom_settings() {
    let request = RequestContext::default();
    let tags = HtmlTagBuilder::default();
    let helper = LinkHelper::new(&RouteResolver, &tags, &request)
      .with_settings(HelperSettings {
        images_dir:              "/static/img/".to_string(),
        default_image_extension: "svg".to_string(),
      });

    assert_eq!(helper.image_path("logo"), "/static/img/logo.svg");
  }

  #[test]
  fn test_link_image_to() {
    let request = RequestContext::default();
    let tags = HtmlTagBuilder::default();
    let helper = LinkHelper::new(&RouteResolver, &tags, &request);

    let out = helper
      .link_image_to("logo", &"/".into(), &HtmlOptions::new())
      .unwrap();
    assert_eq!(
      out,
      r#"<a href="/"><img alt="Logo" src="/images/logo.png" /></a>"#
    );
  }

  #[test]
  fn test_link_image_to_splits_options() {
    let request = RequestContext::default();
    let tags = HtmlTagBuilder::default();
    let helper = LinkHelper::new(&RouteResolver, &tags, &request);

    let html = HtmlOptions::new()
      .attr("alt", "Home")
      .attr("size", "30x45")
      .attr("border", "0")
      .attr("align", "left")
      .attr("class", "nav")
      .confirm("Leave?");
    let out = helper.link_image_to("home", &"/".into(), &html).unwrap();
    assert_eq!(
      out,
      "<a class=\"nav\" href=\"/\" onclick=\"return confirm('Leave?');\">\
       <img align=\"left\" alt=\"Home\" border=\"0\" height=\"45\" \
       src=\"/images/home.png\" width=\"30\" /></a>"
    );
  }

  #[test]
  fn test_link_image_to_size_without_height() {
    let request = RequestContext::default();
    let tags = HtmlTagBuilder::default();
    let helper = LinkHelper::new(&RouteResolver, &tags, &request);

    let html = HtmlOptions::new().attr("size", "30");
    let out = helper.link_image_to("home", &"/".into(), &html).unwrap();
    assert!(out.contains(r#"width="30""#));
    assert!(!out.contains("height"));
  }
}
