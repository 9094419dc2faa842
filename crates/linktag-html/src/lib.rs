//! `linktag-html`.
//!
//! Minimal markup assembly for the link helpers: an ordered attribute map, the
//! [`TagBuilder`] seam the helpers render through, and [`HtmlTagBuilder`], the
//! default implementation backed by the `html-escape` crate.
//!
//! # Example
//!
//! ```
//! use linktag_html::{Attributes, HtmlTagBuilder, TagBuilder};
//!
//! let mut attrs = Attributes::new();
//! attrs.insert("href", "/about");
//! let html = HtmlTagBuilder::default().content_tag("a", "About", &attrs);
//! assert_eq!(html, r#"<a href="/about">About</a>"#);
//! ```

mod attributes;
mod builder;

pub use attributes::Attributes;
pub use builder::{HtmlTagBuilder, TagBuilder, escape_html};
