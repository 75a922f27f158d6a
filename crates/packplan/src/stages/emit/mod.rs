//! Plan composition. Production enables minification and subresource
//! integrity (web only); `skip_postprocess` strips the post-processing
//! surface (pages, integrity) and leaves the raw chunk outputs.

use packplan_common::{
  AssetRules, BuildPlan, BundleEntry, CopyMapping, IntegrityPolicy, NormalizedBuildOptions,
  OutputSettings, PagePlan,
};
use packplan_utils::integrity::IntegrityAlgorithm;

pub(crate) fn asset_rules(options: &NormalizedBuildOptions) -> AssetRules {
  AssetRules {
    embed_limit: options.embed_limit,
    embed_extensions: options.embed_extensions.clone(),
    copy_extensions: options.copy_extensions.clone(),
    assets_relative_path: options.assets_relative_path.clone(),
  }
}

pub fn emit_plan(
  options: &NormalizedBuildOptions,
  entries: Vec<BundleEntry>,
  pages: Vec<PagePlan>,
  copy_mappings: Vec<CopyMapping>,
) -> BuildPlan {
  let minify = options.is_production();
  let postprocess = options.target.emits_html() && !options.skip_postprocess;
  let integrity = (postprocess && options.is_production())
    .then(|| IntegrityPolicy::new(IntegrityAlgorithm::Sha384));
  let pages = if options.skip_postprocess { Vec::new() } else { pages };

  BuildPlan {
    target: options.target,
    mode: options.mode,
    entries,
    pages,
    copy_mappings,
    assets: asset_rules(options),
    output: OutputSettings {
      path: options.output_folder.clone(),
      public_path: options.public_path.clone(),
      js_filename: options.js_filename.clone(),
      js_chunk_filename: options.js_chunk_filename.clone(),
      css_filename: options.css_filename.clone(),
      css_chunk_filename: options.css_chunk_filename.clone(),
      assets_relative_path: options.assets_relative_path.clone(),
    },
    minify,
    sourcemaps: options.sourcemaps,
    css_modules: options.css_modules,
    skip_postprocess: options.skip_postprocess,
    integrity,
  }
}

#[cfg(test)]
mod tests {
  use indexmap::IndexMap;
  use packplan_common::{BuildOptions, Mode, TargetPreset};

  use super::*;
  use crate::stages::assemble::assemble_pages;
  use crate::stages::resolve::entries::resolve_entries;
  use crate::utils::normalize_options::normalize_options;

  fn plan_for(target: TargetPreset, raw: BuildOptions) -> BuildPlan {
    let mut raw = raw;
    if raw.entry.is_none() {
      let mut entry = IndexMap::new();
      entry.insert("myapp".to_string(), "./src/myapp.ts".to_string());
      raw.entry = Some(entry);
    }
    if raw.root_folder.is_none() {
      raw.root_folder = Some("/project".into());
    }
    let options = normalize_options(target, raw).unwrap();
    let entries = resolve_entries(&options);
    let pages = assemble_pages(&options, &entries).unwrap();
    emit_plan(&options, entries, pages, Vec::new())
  }

  #[test]
  fn production_web_plans_require_minify_and_integrity() {
    let plan =
      plan_for(TargetPreset::Web, BuildOptions { mode: Some(Mode::Production), ..BuildOptions::default() });
    assert!(plan.minify);
    let integrity = plan.integrity.expect("production web plan carries integrity");
    assert_eq!(integrity.algorithm, IntegrityAlgorithm::Sha384);
    assert_eq!(integrity.cross_origin, "anonymous");
  }

  #[test]
  fn development_plans_carry_neither_minify_nor_integrity() {
    let plan = plan_for(TargetPreset::Web, BuildOptions::default());
    assert!(!plan.minify);
    assert!(plan.integrity.is_none());
  }

  #[test]
  fn sourcemaps_default_on_and_can_be_disabled() {
    let plan = plan_for(TargetPreset::Web, BuildOptions::default());
    assert!(plan.sourcemaps);

    let plan = plan_for(
      TargetPreset::Web,
      BuildOptions { sourcemaps: Some(false), ..BuildOptions::default() },
    );
    assert!(!plan.sourcemaps);
  }

  #[test]
  fn skip_postprocess_drops_pages_and_integrity() {
    let plan = plan_for(
      TargetPreset::Web,
      BuildOptions {
        mode: Some(Mode::Production),
        skip_postprocess: Some(true),
        ..BuildOptions::default()
      },
    );
    assert!(plan.pages.is_empty());
    assert!(plan.integrity.is_none());
    assert!(plan.minify);
  }

  #[test]
  fn node_plans_never_carry_integrity() {
    let plan = plan_for(
      TargetPreset::Node,
      BuildOptions { mode: Some(Mode::Production), ..BuildOptions::default() },
    );
    assert!(plan.integrity.is_none());
    assert!(plan.pages.is_empty());
  }

  #[test]
  fn css_modules_flag_carries_through() {
    let plan = plan_for(
      TargetPreset::Web,
      BuildOptions { css_modules: Some(true), ..BuildOptions::default() },
    );
    assert!(plan.css_modules);
  }
}
