use std::path::Path;

use packplan_utils::path_ext::PathExt;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetDisposition {
  /// Inline the file as a base64 data URI.
  Embed,
  /// Emit the file under the assets path and reference it by URL.
  Copy,
  /// Left to the bundler's default handling.
  Unclassified,
}

/// Static-asset classification rule. `classify` is a pure function of the
/// file extension, the file size and the configured lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetRules {
  pub embed_limit: u64,
  pub embed_extensions: Vec<String>,
  pub copy_extensions: Vec<String>,
  pub assets_relative_path: String,
}

impl AssetRules {
  /// Extension match is case-insensitive and dot-less; the size threshold is
  /// inclusive at `embed_limit`.
  pub fn classify(&self, path: &Path, size: u64) -> AssetDisposition {
    let Some(ext) = path.extension_lowercase() else {
      return AssetDisposition::Unclassified;
    };
    if self.embed_extensions.iter().any(|e| *e == ext) && size <= self.embed_limit {
      AssetDisposition::Embed
    } else if self.copy_extensions.iter().any(|e| *e == ext)
      || self.embed_extensions.iter().any(|e| *e == ext)
    {
      AssetDisposition::Copy
    } else {
      AssetDisposition::Unclassified
    }
  }
}
