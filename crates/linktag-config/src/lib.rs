pub mod config;
pub mod error;
pub mod request;
pub mod templates;

pub use config::{Config, ConfigLayer};
pub use error::ConfigError;
pub use request::{RequestConfig, RequestLayer};
