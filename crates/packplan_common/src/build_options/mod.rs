pub mod copy_pattern;
pub mod mode;
pub mod normalized_build_options;
pub mod page_options;
pub mod target_preset;

use std::path::PathBuf;

use indexmap::IndexMap;

use crate::{CopyPattern, Mode, PageOptions};

/// The raw user-supplied option set. Every field is optional; absent options
/// take documented defaults during normalization, and required options
/// (`root_folder`, `entry`) are checked there as well.
#[derive(Default, Debug, Clone)]
pub struct BuildOptions {
  pub mode: Option<Mode>,
  pub root_folder: Option<PathBuf>,
  pub output_folder: Option<PathBuf>,

  /// Bundle name to entry source path, in declaration order.
  pub entry: Option<IndexMap<String, String>>,
  pub pages: Option<Vec<PageOptions>>,
  pub polyfills: Option<Vec<String>>,
  pub webworker_polyfills: Option<Vec<String>>,

  // --- Assets
  pub embed_limit: Option<u64>,
  pub embed_extensions: Option<Vec<String>>,
  pub copy_extensions: Option<Vec<String>>,
  pub assets_relative_path: Option<String>,
  pub copy_patterns: Option<Vec<CopyPattern>>,

  // --- Output
  pub css_modules: Option<bool>,
  pub sourcemaps: Option<bool>,
  pub skip_postprocess: Option<bool>,
  pub public_path: Option<String>,
  pub js_filename: Option<String>,
  pub js_chunk_filename: Option<String>,
}
