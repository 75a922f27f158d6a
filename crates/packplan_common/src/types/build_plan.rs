use serde::Serialize;

use crate::{
  AssetRules, BundleEntry, CopyMapping, IntegrityPolicy, Mode, OutputSettings, PagePlan,
  TargetPreset,
};

/// The fully-specified build description handed to the external bundling
/// engine. One plan per invocation, immutable once produced.
#[allow(clippy::struct_excessive_bools)] // Using raw booleans is more clear in this case
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildPlan {
  pub target: TargetPreset,
  pub mode: Mode,
  pub entries: Vec<BundleEntry>,
  pub pages: Vec<PagePlan>,
  pub copy_mappings: Vec<CopyMapping>,
  pub assets: AssetRules,
  pub output: OutputSettings,
  pub minify: bool,
  pub sourcemaps: bool,
  pub css_modules: bool,
  pub skip_postprocess: bool,
  pub integrity: Option<IntegrityPolicy>,
}
