use std::io;

use thiserror::Error;

/// A violated option contract or an unresolvable reference found while
/// synthesizing a build plan. Synthesis fails on the first violation and
/// never produces a partial plan.
#[derive(Debug, Error)]
pub enum SynthesisError {
  #[error("invalid type for option `{option}`: expected {expected}, received {received}")]
  InvalidOptionType { option: String, expected: &'static str, received: String },

  #[error("invalid value for option `{option}`: {reason}")]
  InvalidOptionValue { option: String, reason: String },

  #[error("page `{page}` references unknown chunk `{chunk}`")]
  UnknownChunkReference { page: String, chunk: String },

  #[error("copy pattern source `{from}` does not exist")]
  MissingCopySource { from: String },

  #[error("failed to read `{path}`: {source}")]
  Io { path: String, source: io::Error },
}

impl SynthesisError {
  pub fn invalid_type(
    option: impl Into<String>,
    expected: &'static str,
    received: impl Into<String>,
  ) -> Self {
    Self::InvalidOptionType { option: option.into(), expected, received: received.into() }
  }

  pub fn invalid_value(option: impl Into<String>, reason: impl Into<String>) -> Self {
    Self::InvalidOptionValue { option: option.into(), reason: reason.into() }
  }

  pub fn io(path: impl Into<String>, source: io::Error) -> Self {
    Self::Io { path: path.into(), source }
  }
}

pub type SynthesisResult<T> = Result<T, SynthesisError>;
