//! Expose linktag's command handling for use in tests and tooling. The
//! helpers themselves live in `linktag-helpers`.
pub mod cli;
pub mod error;
pub mod render;
