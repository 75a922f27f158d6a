mod build_options;
mod types;

pub use build_options::{
  copy_pattern::{CopyPattern, ToType},
  mode::Mode,
  normalized_build_options::NormalizedBuildOptions,
  page_options::PageOptions,
  target_preset::TargetPreset,
  BuildOptions,
};

pub use crate::types::{
  asset_rules::{AssetDisposition, AssetRules},
  build_plan::BuildPlan,
  bundle_entry::{BundleEntry, EntryPool},
  copy_mapping::{CopyMapping, MappingKind},
  integrity_policy::IntegrityPolicy,
  module_ref::ModuleRef,
  output_settings::OutputSettings,
  page_plan::PagePlan,
};
