use std::path::Path;

use sugar_path::SugarPath;

use packplan_common::{
  AssetDisposition, BuildOptions, BuildPlan, NormalizedBuildOptions, TargetPreset,
};
use packplan_error::{SynthesisError, SynthesisResult};
use packplan_fs::{FileSystem, OsFileSystem};
use packplan_utils::path_ext::PathExt;

use crate::stages::{
  assemble::assemble_pages,
  emit::{asset_rules, emit_plan},
  resolve::{copy_patterns::resolve_copy_patterns, entries::resolve_entries},
  validate::validate_options,
};
use crate::utils::normalize_options::normalize_options;

/// Synthesizes one immutable `BuildPlan` per invocation. Validation and
/// default resolution happen at construction; `synthesize` runs the resolver
/// stages over the normalized options and composes the plan. Fail-fast: any
/// violated contract aborts before the plan emitter runs.
#[derive(Debug)]
pub struct Synthesizer<F: FileSystem = OsFileSystem> {
  fs: F,
  options: NormalizedBuildOptions,
}

impl Synthesizer<OsFileSystem> {
  pub fn new(target: TargetPreset, options: BuildOptions) -> SynthesisResult<Self> {
    Self::with_fs(target, options, OsFileSystem)
  }

  /// Validates a raw options document (the original camelCase names) into
  /// typed options first, then constructs as `new` does.
  pub fn from_json(target: TargetPreset, raw: &serde_json::Value) -> SynthesisResult<Self> {
    let options = validate_options(raw)?;
    Self::new(target, options)
  }
}

impl<F: FileSystem> Synthesizer<F> {
  pub fn with_fs(target: TargetPreset, options: BuildOptions, fs: F) -> SynthesisResult<Self> {
    let options = normalize_options(target, options)?;
    Ok(Self { fs, options })
  }

  pub fn options(&self) -> &NormalizedBuildOptions {
    &self.options
  }

  pub fn synthesize(&self) -> SynthesisResult<BuildPlan> {
    let entries = resolve_entries(&self.options);
    let copy_mappings = resolve_copy_patterns(&self.options, &self.fs)?;
    let pages = assemble_pages(&self.options, &entries)?;
    Ok(emit_plan(&self.options, entries, pages, copy_mappings))
  }

  /// Probes the file's size on disk and classifies it against the configured
  /// embed and copy rules. Relative paths resolve against the root folder.
  pub fn classify_asset(&self, path: &Path) -> SynthesisResult<AssetDisposition> {
    let path = path.absolutize_with(&self.options.root_folder);
    let size = self
      .fs
      .file_size(&path)
      .map_err(|err| SynthesisError::io(path.expect_to_slash(), err))?;
    Ok(asset_rules(&self.options).classify(&path, size))
  }
}
