//! Turns parsed commands into markup using the configured helpers.

use linktag_config::Config;
use linktag_helpers::{Fallback, HelperSettings, LinkHelper};
use linktag_html::{HtmlTagBuilder, escape_html};
use linktag_url::{RequestContext, RouteResolver};

use crate::{cli::Commands, error::LinktagError};

/// Request context described by the configuration.
#[must_use]
pub fn request_context(config: &Config) -> RequestContext {
  let request = &config.request;
  RequestContext {
    request_uri: request.uri.clone(),
    controller:  request.controller.clone(),
    action:      request.action.clone(),
    host:        request.host.clone(),
    protocol:    request.protocol.clone(),
  }
}

/// Helper settings described by the configuration.
#[must_use]
pub fn helper_settings(config: &Config) -> HelperSettings {
  HelperSettings {
    images_dir:              config.images_dir.clone(),
    default_image_extension: config.default_image_extension.clone(),
  }
}

/// Render the output of `command`.
///
/// # Errors
///
/// Returns an error if the arguments cannot be turned into options, if a
/// route cannot be resolved, or if `command` does not render markup.
pub fn render(
  command: &Commands,
  config: &Config,
) -> Result<String, LinktagError> {
  let request = request_context(config);
  let tags = HtmlTagBuilder::new(config.xhtml);
  let helper = LinkHelper::new(&RouteResolver, &tags, &request)
    .with_settings(helper_settings(config));

  let output = match command {
    Commands::Url { target } => helper.url_for(&target.to_target()?)?,

    Commands::Current { target } => {
      helper.current_page(&target.to_target()?)?.to_string()
    },

    Commands::Link {
      name,
      target,
      html,
      link_if,
      unless,
      unless_current,
      fallback,
    } => {
      let target = target.to_target()?;
      let options = html.to_options(&[])?;
      let label = name.as_deref().unwrap_or_default();
      let template = fallback.as_deref().unwrap_or_default();
      let render_fallback =
        |name: &str| template.replace("{name}", &escape_html(name));
      let fallback = fallback
        .is_some()
        .then_some(Fallback::Name(&render_fallback));

      if *unless_current {
        helper.link_to_unless_current(
          label,
          &target,
          &options,
          fallback.as_ref(),
        )?
      } else if let Some(condition) = unless {
        helper.link_to_unless(
          *condition,
          label,
          &target,
          &options,
          fallback.as_ref(),
        )?
      } else if let Some(condition) = link_if {
        helper.link_to_if(
          *condition,
          label,
          &target,
          &options,
          fallback.as_ref(),
        )?
      } else {
        helper.link_to(name.as_deref(), &target, &options)?
      }
    },

    Commands::Image {
      src,
      target,
      html,
      alt,
      size,
      border,
      align,
    } => {
      let options = html.to_options(&[
        ("alt", alt.as_ref()),
        ("size", size.as_ref()),
        ("border", border.as_ref()),
        ("align", align.as_ref()),
      ])?;
      helper.link_image_to(src, &target.to_target()?, &options)?
    },

    Commands::Mail {
      address,
      name,
      mail,
    } => helper.mail_to(address, name.as_deref(), &mail.to_options()?),

    Commands::Button { name, target, html } => {
      helper.button_to(
        name.as_deref(),
        &target.to_target()?,
        &html.to_options(&[])?,
      )?
    },

    Commands::Init { .. } | Commands::Completions { .. } => {
      return Err(LinktagError::Usage(
        "`init` and `completions` do not render markup".to_string(),
      ));
    },
  };

  log::debug!("Rendered {} bytes", output.len());
  Ok(output)
}
