//! Entry & polyfill resolution. Every declared bundle becomes a
//! `BundleEntry` whose module list is the matching polyfill pool in
//! declaration order followed by the entry source. Order is runtime
//! initialization order and must be reproducible across builds.

use std::path::Path;

use arcstr::ArcStr;

use packplan_common::{BundleEntry, EntryPool, ModuleRef, NormalizedBuildOptions};

/// Worker bundles are recognized by their source naming convention: a file
/// stem ending in `.webworker` (e.g. `./src/sync.webworker.ts`).
fn is_webworker_source(source: &str) -> bool {
  Path::new(source)
    .file_stem()
    .and_then(|stem| stem.to_str())
    .is_some_and(|stem| stem.ends_with(".webworker"))
}

pub fn resolve_entries(options: &NormalizedBuildOptions) -> Vec<BundleEntry> {
  options
    .entry
    .iter()
    .map(|(name, source)| {
      let pool = if is_webworker_source(source) { EntryPool::Worker } else { EntryPool::Main };
      let polyfills = match pool {
        EntryPool::Main => &options.polyfills,
        EntryPool::Worker => &options.webworker_polyfills,
      };
      let mut modules = Vec::with_capacity(polyfills.len() + 1);
      for polyfill in polyfills {
        modules.push(ModuleRef::resolve(polyfill, &options.root_folder));
      }
      modules.push(ModuleRef::resolve(source, &options.root_folder));
      BundleEntry { name: ArcStr::from(name.as_str()), pool, modules }
    })
    .collect()
}
