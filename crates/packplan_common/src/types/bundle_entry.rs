use arcstr::ArcStr;
use serde::Serialize;

use crate::ModuleRef;

/// Pool an entry draws its polyfills from. The two pools are fully disjoint:
/// a worker entry never inherits main-thread polyfills and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryPool {
  Main,
  Worker,
}

/// A resolved bundle: polyfills in declaration order, then the entry source.
/// Module order is load order and must be reproducible across builds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BundleEntry {
  pub name: ArcStr,
  pub pool: EntryPool,
  pub modules: Vec<ModuleRef>,
}

impl BundleEntry {
  pub fn is_worker(&self) -> bool {
    matches!(self.pool, EntryPool::Worker)
  }
}
