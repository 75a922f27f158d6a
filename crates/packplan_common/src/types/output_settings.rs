use std::path::PathBuf;

use serde::Serialize;

/// Output locations and filename templates. Templates use `[name]`, `[id]`
/// and `[hash]` placeholders; production defaults prepend a content hash,
/// a user-supplied chunk template is taken verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputSettings {
  pub path: PathBuf,
  pub public_path: String,
  pub js_filename: String,
  pub js_chunk_filename: String,
  pub css_filename: String,
  pub css_chunk_filename: String,
  pub assets_relative_path: String,
}
