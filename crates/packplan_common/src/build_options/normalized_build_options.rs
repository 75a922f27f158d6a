use std::path::PathBuf;

use indexmap::IndexMap;

use crate::{CopyPattern, Mode, PageOptions, TargetPreset};

/// `BuildOptions` after validation and default resolution. Immutable for the
/// rest of synthesis; filename templates are already mode-specific.
#[allow(clippy::struct_excessive_bools)] // Using raw booleans is more clear in this case
#[derive(Debug)]
pub struct NormalizedBuildOptions {
  pub target: TargetPreset,
  pub mode: Mode,
  pub root_folder: PathBuf,
  pub output_folder: PathBuf,

  pub entry: IndexMap<String, String>,
  pub pages: Option<Vec<PageOptions>>,
  pub polyfills: Vec<String>,
  pub webworker_polyfills: Vec<String>,

  pub embed_limit: u64,
  pub embed_extensions: Vec<String>,
  pub copy_extensions: Vec<String>,
  pub assets_relative_path: String,
  pub copy_patterns: Vec<CopyPattern>,

  pub css_modules: bool,
  pub sourcemaps: bool,
  pub skip_postprocess: bool,
  pub public_path: String,
  pub js_filename: String,
  pub js_chunk_filename: String,
  pub css_filename: String,
  pub css_chunk_filename: String,
}

impl NormalizedBuildOptions {
  pub fn is_production(&self) -> bool {
    self.mode.is_production()
  }
}
