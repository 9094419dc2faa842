use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use linktag_helpers::{HtmlOptions, LinkTarget, MailOptions, RouteQuery};

use crate::error::LinktagError;

/// Command line interface for linktag
#[derive(Parser, Debug)]
#[command(author, version, about = "linktag: render HTML link helpers")]
pub struct Cli {
  /// Subcommand to execute (see [`Commands`])
  #[command(subcommand)]
  pub command: Commands,

  /// Enable verbose debug logging
  #[arg(short, long, global = true)]
  pub verbose: bool,

  /// Path to configuration file(s) (TOML or JSON, can be specified multiple
  /// times) Multiple files are merged in order, with later files overriding
  /// earlier ones
  #[arg(short = 'c', long = "config-file", action = clap::ArgAction::Append, global = true)]
  pub config_files: Vec<PathBuf>,

  /// Override configuration values (KEY=VALUE format, can be used multiple
  /// times)
  #[arg(long = "config", action = clap::ArgAction::Append, global = true)]
  pub config_overrides: Vec<String>,
}

/// All supported subcommands for the linktag CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Initialize a new linktag configuration file
  Init {
    /// Path to create the configuration file at
    #[arg(short, long, default_value = "linktag.toml")]
    output: PathBuf,

    /// Format of the configuration file.
    #[arg(short = 'F', long, default_value = "toml", value_parser = ["toml", "json"])]
    format: String,

    /// Force overwrite if file already exists
    #[arg(short, long)]
    force: bool,
  },

  /// Print a shell completion script.
  Completions {
    /// Shell to generate completions for.
    #[arg(value_enum)]
    shell: clap_complete::Shell,
  },

  /// Print the URL a target resolves to.
  Url {
    #[command(flatten)]
    target: TargetArgs,
  },

  /// Render an anchor.
  Link {
    /// Link text. Defaults to the URL.
    name: Option<String>,

    #[command(flatten)]
    target: TargetArgs,

    #[command(flatten)]
    html: HtmlArgs,

    /// Only render the link if this is true, otherwise print the escaped
    /// name.
    #[arg(long = "if", value_name = "BOOL", conflicts_with_all = ["unless", "unless_current"])]
    link_if: Option<bool>,

    /// Print the escaped name (or URL, without a name) instead of the link
    /// if this is true.
    #[arg(long, value_name = "BOOL", conflicts_with = "unless_current")]
    unless: Option<bool>,

    /// Print the escaped name instead of the link if the target is the
    /// current page.
    #[arg(long)]
    unless_current: bool,

    /// Markup printed instead of a suppressed link. `{name}` is replaced
    /// with the escaped link name.
    #[arg(long, value_name = "TEMPLATE")]
    fallback: Option<String>,
  },

  /// Render an image wrapped in an anchor.
  Image {
    /// Image name or path. Bare names are looked up in the images
    /// directory.
    src: String,

    #[command(flatten)]
    target: TargetArgs,

    #[command(flatten)]
    html: HtmlArgs,

    /// Alternative text. Defaults to the capitalized file name.
    #[arg(long)]
    alt: Option<String>,

    /// Image size as WIDTHxHEIGHT.
    #[arg(long, value_name = "WxH")]
    size: Option<String>,

    /// Image border width.
    #[arg(long)]
    border: Option<String>,

    /// Image alignment.
    #[arg(long)]
    align: Option<String>,
  },

  /// Render a mailto link.
  Mail {
    /// Email address to link to.
    address: String,

    /// Link text. Defaults to the address.
    #[arg(short, long)]
    name: Option<String>,

    #[command(flatten)]
    mail: MailArgs,
  },

  /// Render a form with a single submit button.
  Button {
    /// Button label. Defaults to the URL.
    name: Option<String>,

    #[command(flatten)]
    target: TargetArgs,

    #[command(flatten)]
    html: HtmlArgs,
  },

  /// Print whether a target resolves to the current request URI.
  Current {
    #[command(flatten)]
    target: TargetArgs,
  },
}

/// Where a link points.
#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
  /// Literal URL or path.
  #[arg(long, conflicts_with_all = ["controller", "action", "id", "params", "anchor", "absolute"])]
  pub href: Option<String>,

  /// Route controller. Defaults to the current request's.
  #[arg(long)]
  pub controller: Option<String>,

  /// Route action.
  #[arg(long)]
  pub action: Option<String>,

  /// Route id.
  #[arg(long)]
  pub id: Option<String>,

  /// Extra route parameter (can be specified multiple times)
  #[arg(long = "param", value_name = "KEY=VALUE", action = clap::ArgAction::Append)]
  pub params: Vec<String>,

  /// Route fragment.
  #[arg(long)]
  pub anchor: Option<String>,

  /// Render a full URL instead of a path.
  #[arg(long)]
  pub absolute: bool,
}

/// Options for the rendered anchor or button.
#[derive(Args, Debug, Clone, Default)]
pub struct HtmlArgs {
  /// HTML attribute (can be specified multiple times)
  #[arg(long = "attr", value_name = "KEY=VALUE", action = clap::ArgAction::Append)]
  pub attrs: Vec<String>,

  /// Ask for confirmation before following the link.
  #[arg(long)]
  pub confirm: Option<String>,

  /// Open the link in a popup window, optionally named and with window
  /// features.
  #[arg(long, num_args = 0..=1, default_missing_value = "true", value_name = "NAME,FEATURES")]
  pub popup: Option<String>,

  /// Follow the link with a POST request.
  #[arg(long)]
  pub post: bool,
}

/// Options for mailto links.
#[derive(Args, Debug, Clone, Default)]
pub struct MailArgs {
  /// Obfuscation applied to the link.
  #[arg(short, long, default_value = "none", value_parser = ["none", "hex", "javascript"])]
  pub encode: String,

  /// Carbon copy recipients.
  #[arg(long)]
  pub cc: Option<String>,

  /// Blind carbon copy recipients.
  #[arg(long)]
  pub bcc: Option<String>,

  /// Message subject.
  #[arg(long)]
  pub subject: Option<String>,

  /// Message body.
  #[arg(long)]
  pub body: Option<String>,

  /// Text shown instead of `@` in the link text.
  #[arg(long)]
  pub replace_at: Option<String>,

  /// Text shown instead of `.` in the link text.
  #[arg(long)]
  pub replace_dot: Option<String>,

  /// HTML attribute (can be specified multiple times)
  #[arg(long = "attr", value_name = "KEY=VALUE", action = clap::ArgAction::Append)]
  pub attrs: Vec<String>,
}

/// Split `KEY=VALUE` arguments.
///
/// # Errors
///
/// Returns [`LinktagError::InvalidPair`] for arguments without `=`.
pub fn parse_pairs(
  args: &[String],
) -> Result<Vec<(String, String)>, LinktagError> {
  args
    .iter()
    .map(|arg| {
      arg
        .split_once('=')
        .map(|(key, value)| (key.trim().to_string(), value.to_string()))
        .ok_or_else(|| LinktagError::InvalidPair(arg.clone()))
    })
    .collect()
}

impl TargetArgs {
  /// Build the link target these arguments describe.
  ///
  /// # Errors
  ///
  /// Returns an error for malformed `--param` values.
  pub fn to_target(&self) -> Result<LinkTarget, LinktagError> {
    if let Some(ref href) = self.href {
      return Ok(LinkTarget::Literal(href.clone()));
    }

    let mut query = RouteQuery {
      controller: self.controller.clone(),
      action: self.action.clone(),
      id: self.id.clone(),
      anchor: self.anchor.clone(),
      ..RouteQuery::default()
    };
    query.params.extend(parse_pairs(&self.params)?);
    if self.absolute {
      query.only_path = Some(false);
    }
    Ok(LinkTarget::Route(query))
  }
}

impl HtmlArgs {
  /// Build HTML options, treating `--confirm`, `--popup` and `--post` like
  /// their `--attr` spellings.
  ///
  /// # Errors
  ///
  /// Returns an error for malformed attributes or conflicting options.
  pub fn to_options(
    &self,
    extra: &[(&str, Option<&String>)],
  ) -> Result<HtmlOptions, LinktagError> {
    let mut pairs = parse_pairs(&self.attrs)?;
    for (key, value) in extra {
      if let Some(value) = value {
        pairs.push(((*key).to_string(), (*value).clone()));
      }
    }
    if let Some(ref confirm) = self.confirm {
      pairs.push(("confirm".to_string(), confirm.clone()));
    }
    if let Some(ref popup) = self.popup {
      pairs.push(("popup".to_string(), popup.clone()));
    }
    if self.post {
      pairs.push(("post".to_string(), "true".to_string()));
    }
    Ok(HtmlOptions::from_pairs(pairs)?)
  }
}

impl MailArgs {
  /// Build mail options.
  ///
  /// # Errors
  ///
  /// Returns an error for malformed attributes.
  pub fn to_options(&self) -> Result<MailOptions, LinktagError> {
    let mut pairs = parse_pairs(&self.attrs)?;
    pairs.push(("encode".to_string(), self.encode.clone()));
    let reserved = [
      ("cc", &self.cc),
      ("bcc", &self.bcc),
      ("subject", &self.subject),
      ("body", &self.body),
      ("replace_at", &self.replace_at),
      ("replace_dot", &self.replace_dot),
    ];
    for (key, value) in reserved {
      if let Some(value) = value {
        pairs.push((key.to_string(), value.clone()));
      }
    }
    Ok(MailOptions::from_pairs(pairs)?)
  }
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
