use linktag_html::Attributes;
use linktag_url::{LinkTarget, UrlError};

use crate::{HtmlOptions, LinkBehaviour, LinkHelper, javascript};

impl LinkHelper<'_> {
  /// Render a one-button form that POSTs to `target`.
  ///
  /// The button is labelled `name`, or the URL when no name is given. A
  /// `disabled` attribute is normalized to `disabled="disabled"` when truthy
  /// (including an empty value) and dropped otherwise.
  ///
  /// # Errors
  ///
  /// Propagates the resolver's [`UrlError`] for route targets.
  pub fn button_to(
    &self,
    name: Option<&str>,
    target: &LinkTarget,
    html: &HtmlOptions,
  ) -> Result<String, UrlError> {
    let url = match target {
      LinkTarget::Literal(url) => url.clone(),
      LinkTarget::Route(_) => self.url_for(target)?,
    };

    if html.behaviour != LinkBehaviour::Follow {
      log::warn!("Ignoring popup/post behaviour on button `{url}`");
    }

    let mut input = html.attributes.clone();
    if let Some(disabled) = input.remove("disabled")
      && matches!(
        disabled.trim().to_lowercase().as_str(),
        "" | "true" | "disabled" | "yes" | "1"
      )
    {
      input.insert("disabled", "disabled");
    }
    if let Some(onclick) =
      javascript::onclick(html.confirm.as_deref(), &LinkBehaviour::Follow)
    {
      input.insert("onclick", onclick);
    }
    input.insert("type", "submit");
    input.insert(
      "value",
      name.filter(|name| !name.is_empty()).unwrap_or(&url),
    );

    let tags = self.tags();
    let form = Attributes::new()
      .with("method", "post")
      .with("action", url.as_str())
      .with("class", "button-to");
    let div =
      tags.content_tag("div", &tags.tag("input", &input), &Attributes::new());
    Ok(tags.content_tag("form", &div, &form))
  }
}
