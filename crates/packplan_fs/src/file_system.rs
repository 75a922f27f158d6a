use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FileKind {
  File,
  Dir,
}

/// Read-only filesystem access used during synthesis: existence and kind
/// checks for copy sources, size probes for embed decisions and recursive
/// walks for wildcard expansion. Walks must return paths in a stable order
/// so that repeated syntheses of the same option set produce identical plans.
pub trait FileSystem {
  fn kind(&self, path: &Path) -> Option<FileKind>;

  fn file_size(&self, path: &Path) -> io::Result<u64>;

  /// Every file and directory below `dir` (excluding `dir` itself),
  /// depth-first, sorted by file name at each level.
  fn walk(&self, dir: &Path) -> io::Result<Vec<(PathBuf, FileKind)>>;
}
