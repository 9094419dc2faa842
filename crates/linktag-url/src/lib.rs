//! `linktag-url`.
//!
//! Describes where a link points ([`LinkTarget`]) and turns that description
//! into an href through the [`UrlResolver`] seam. [`RouteResolver`] is the
//! built-in resolver: it maps a [`RouteQuery`] onto the conventional
//! `/controller/action/id` layout, scoped to the current [`RequestContext`].

pub mod encode;
pub mod error;
mod request;
mod resolver;
mod target;

pub use error::UrlError;
pub use request::RequestContext;
pub use resolver::{RouteResolver, UrlResolver};
pub use target::{LinkTarget, RouteQuery};
