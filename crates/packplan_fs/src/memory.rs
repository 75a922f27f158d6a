use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::file_system::{FileKind, FileSystem};

/// In-memory filesystem for tests. Paths are stored as given; directories
/// are implied by the files below them and can also be registered explicitly
/// (to model empty directories).
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
  files: BTreeMap<PathBuf, u64>,
  dirs: Vec<PathBuf>,
}

impl MemoryFileSystem {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn add_file(mut self, path: impl Into<PathBuf>, size: u64) -> Self {
    self.files.insert(path.into(), size);
    self
  }

  pub fn add_dir(mut self, path: impl Into<PathBuf>) -> Self {
    self.dirs.push(path.into());
    self
  }

  fn implied_dir(&self, path: &Path) -> bool {
    self.dirs.iter().any(|dir| dir == path || dir.starts_with(path))
      || self.files.keys().any(|file| file.starts_with(path) && file != path)
  }
}

impl FileSystem for MemoryFileSystem {
  fn kind(&self, path: &Path) -> Option<FileKind> {
    if self.files.contains_key(path) {
      Some(FileKind::File)
    } else if self.implied_dir(path) {
      Some(FileKind::Dir)
    } else {
      None
    }
  }

  fn file_size(&self, path: &Path) -> io::Result<u64> {
    self
      .files
      .get(path)
      .copied()
      .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, path.display().to_string()))
  }

  fn walk(&self, dir: &Path) -> io::Result<Vec<(PathBuf, FileKind)>> {
    let mut entries = Vec::new();
    for path in &self.dirs {
      if path.starts_with(dir) && path != dir {
        entries.push((path.clone(), FileKind::Dir));
      }
    }
    for (path, _) in &self.files {
      if path.starts_with(dir) && path != dir {
        for ancestor in path.ancestors().skip(1) {
          if ancestor == dir || !ancestor.starts_with(dir) {
            break;
          }
          let implied = (ancestor.to_path_buf(), FileKind::Dir);
          if !entries.contains(&implied) {
            entries.push(implied);
          }
        }
        entries.push((path.clone(), FileKind::File));
      }
    }
    entries.sort();
    entries.dedup();
    Ok(entries)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn files_imply_parent_dirs() {
    let fs = MemoryFileSystem::new().add_file("/root/sub/a.txt", 3);
    assert_eq!(fs.kind(Path::new("/root/sub")), Some(FileKind::Dir));
    assert_eq!(fs.kind(Path::new("/root/sub/a.txt")), Some(FileKind::File));
    assert_eq!(fs.kind(Path::new("/root/missing")), None);
  }

  #[test]
  fn walk_is_sorted_and_recursive() {
    let fs = MemoryFileSystem::new()
      .add_file("/root/b.txt", 1)
      .add_file("/root/sub/a.txt", 1)
      .add_dir("/root/empty");
    let walked = fs.walk(Path::new("/root")).unwrap();
    let paths: Vec<_> = walked.iter().map(|(p, _)| p.to_str().unwrap()).collect();
    assert_eq!(paths, ["/root/b.txt", "/root/empty", "/root/sub", "/root/sub/a.txt"]);
  }
}
