use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::file_system::{FileKind, FileSystem};

#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
  fn kind(&self, path: &Path) -> Option<FileKind> {
    let meta = std::fs::metadata(path).ok()?;
    if meta.is_dir() {
      Some(FileKind::Dir)
    } else {
      Some(FileKind::File)
    }
  }

  fn file_size(&self, path: &Path) -> io::Result<u64> {
    Ok(std::fs::metadata(path)?.len())
  }

  fn walk(&self, dir: &Path) -> io::Result<Vec<(PathBuf, FileKind)>> {
    let mut entries = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).sort_by_file_name() {
      let entry = entry
        .map_err(|err| err.into_io_error().unwrap_or_else(|| io::Error::other("walk failed")))?;
      let kind = if entry.file_type().is_dir() { FileKind::Dir } else { FileKind::File };
      entries.push((entry.into_path(), kind));
    }
    Ok(entries)
  }
}
