use std::path::PathBuf;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MappingKind {
  /// Copy a single file to the destination path.
  File,
  /// Recreate an empty directory in the output tree.
  Dir,
}

/// One resolved copy instruction: absolute source, slash-separated
/// destination relative to the output folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyMapping {
  pub source: PathBuf,
  pub dest: String,
  pub kind: MappingKind,
}

impl CopyMapping {
  pub fn file(source: impl Into<PathBuf>, dest: impl Into<String>) -> Self {
    Self { source: source.into(), dest: dest.into(), kind: MappingKind::File }
  }

  pub fn dir(source: impl Into<PathBuf>, dest: impl Into<String>) -> Self {
    Self { source: source.into(), dest: dest.into(), kind: MappingKind::Dir }
  }
}
