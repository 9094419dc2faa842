//! `linktag-helpers`.
//!
//! View helpers that assemble anchors, image links, obfuscated mailto links
//! and single-button forms. URL resolution and tag rendering are delegated to
//! the [`UrlResolver`] and [`TagBuilder`] the [`LinkHelper`] is built with.
//!
//! # Example
//!
//! ```
//! use linktag_helpers::{HtmlOptions, LinkHelper};
//! use linktag_html::HtmlTagBuilder;
//! use linktag_url::{RequestContext, RouteResolver};
//!
//! let request = RequestContext::new("/");
//! let tags = HtmlTagBuilder::default();
//! let helper = LinkHelper::new(&RouteResolver, &tags, &request);
//! let html = helper
//!   .link_to(Some("Home"), &"/".into(), &HtmlOptions::default())
//!   .unwrap();
//! assert_eq!(html, r#"<a href="/">Home</a>"#);
//! ```

pub mod error;
mod button;
mod helper;
mod image;
mod javascript;
mod mail;
pub mod options;

pub use error::OptionsError;
pub use helper::{Fallback, HelperSettings, LinkHelper};
pub use javascript::escape_javascript;
pub use linktag_html::{Attributes, TagBuilder};
pub use linktag_url::{
  LinkTarget,
  RequestContext,
  RouteQuery,
  UrlError,
  UrlResolver,
};
pub use options::{
  HtmlOptions,
  ImageOptions,
  ImageSize,
  LinkBehaviour,
  MailEncoding,
  MailOptions,
  Popup,
};
