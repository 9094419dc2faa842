use thiserror::Error;

/// Errors raised while normalizing raw `key=value` options.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
  #[error("option keys must not be empty")]
  EmptyKey,

  /// A link cannot both open a popup and submit a POST form.
  #[error("`popup` and `post` cannot be used on the same link")]
  ConflictingBehaviour,

  #[error("unknown mail encoding `{0}`. Expected `hex` or `javascript`")]
  UnknownEncoding(String),

  #[error("invalid boolean value for `{key}`: `{value}`")]
  InvalidBoolean { key: String, value: String },
}
