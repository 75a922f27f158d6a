use std::str::FromStr;

/// Forces how `to` is interpreted when the source is a single file:
/// `dir` appends the source base name beneath `to`, `file` takes `to`
/// as the exact destination path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToType {
  File,
  Dir,
}

impl FromStr for ToType {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "file" => Ok(Self::File),
      "dir" => Ok(Self::Dir),
      _ => Err(format!("Invalid toType \"{s}\".")),
    }
  }
}

#[derive(Debug, Clone)]
pub struct CopyPattern {
  /// Literal path or glob, relative to the build root.
  pub from: String,
  /// Destination relative to the output folder.
  pub to: String,
  pub to_type: Option<ToType>,
  /// Prefix stripped from wildcard matches before appending beneath `to`.
  /// Defaults to the fixed (non-wildcard) prefix of `from`.
  pub context: Option<String>,
}

impl CopyPattern {
  pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
    Self { from: from.into(), to: to.into(), to_type: None, context: None }
  }

  pub fn has_wildcard(&self) -> bool {
    self.from.contains(['*', '?', '['])
  }
}
