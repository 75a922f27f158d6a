//! Copy pattern expansion. Literal sources must exist; directories expand
//! to per-file mappings preserving their internal layout; wildcards match
//! against root-relative slash paths and strip the pattern context before
//! appending beneath `to`. Colliding destinations: last write wins.

use std::path::Path;

use indexmap::IndexMap;
use sugar_path::SugarPath;

use packplan_common::{CopyMapping, CopyPattern, NormalizedBuildOptions, ToType};
use packplan_error::{SynthesisError, SynthesisResult};
use packplan_fs::{FileKind, FileSystem};
use packplan_utils::path_ext::PathExt;

pub fn resolve_copy_patterns<F: FileSystem>(
  options: &NormalizedBuildOptions,
  fs: &F,
) -> SynthesisResult<Vec<CopyMapping>> {
  let mut mappings: IndexMap<String, CopyMapping> = IndexMap::new();
  for pattern in &options.copy_patterns {
    if pattern.has_wildcard() {
      expand_wildcard(pattern, &options.root_folder, fs, &mut mappings)?;
    } else {
      expand_literal(pattern, &options.root_folder, fs, &mut mappings)?;
    }
  }
  Ok(mappings.into_values().collect())
}

fn expand_literal<F: FileSystem>(
  pattern: &CopyPattern,
  root: &Path,
  fs: &F,
  mappings: &mut IndexMap<String, CopyMapping>,
) -> SynthesisResult<()> {
  let source = Path::new(&pattern.from).absolutize_with(root);
  match fs.kind(&source) {
    None => Err(SynthesisError::MissingCopySource { from: pattern.from.clone() }),
    Some(FileKind::Dir) => {
      let dest_root = pattern.to.trim_end_matches('/');
      for (path, kind) in walk(fs, &source)? {
        let rel = path.strip_prefix(&source).expect("walk stays below source").expect_to_slash();
        let dest = join_dest(dest_root, &rel);
        match kind {
          FileKind::File => {
            mappings.insert(dest.clone(), CopyMapping::file(path, dest));
          }
          // Preserve empty directories so the output tree mirrors the source.
          FileKind::Dir => {
            if walk(fs, &path)?.is_empty() {
              mappings.insert(dest.clone(), CopyMapping::dir(path, dest));
            }
          }
        }
      }
      Ok(())
    }
    Some(FileKind::File) => {
      let dir_semantics = pattern.to_type == Some(ToType::Dir) || pattern.to.ends_with('/');
      let base_name = source.file_name().and_then(|n| n.to_str()).unwrap_or_default().to_string();
      let dest = if dir_semantics || pattern.to.is_empty() {
        join_dest(pattern.to.trim_end_matches('/'), &base_name)
      } else {
        pattern.to.clone()
      };
      mappings.insert(dest.clone(), CopyMapping::file(source, dest));
      Ok(())
    }
  }
}

fn expand_wildcard<F: FileSystem>(
  pattern: &CopyPattern,
  root: &Path,
  fs: &F,
  mappings: &mut IndexMap<String, CopyMapping>,
) -> SynthesisResult<()> {
  let context = match &pattern.context {
    Some(context) => context.trim_matches('/').to_string(),
    None => fixed_prefix(&pattern.from),
  };
  let dest_root = pattern.to.trim_end_matches('/');
  for (path, kind) in walk(fs, root)? {
    if kind != FileKind::File {
      continue;
    }
    let rel = path.strip_prefix(root).expect("walk stays below root").expect_to_slash();
    if !fast_glob::glob_match(&pattern.from, &rel) {
      continue;
    }
    let remainder = if context.is_empty() {
      rel.as_str()
    } else {
      rel.strip_prefix(&format!("{context}/")).unwrap_or(rel.as_str())
    };
    let dest = join_dest(dest_root, remainder);
    mappings.insert(dest.clone(), CopyMapping::file(path, dest));
  }
  Ok(())
}

/// Fixed (non-wildcard) prefix of a glob, the default context: everything
/// before the first path component containing a wildcard character.
fn fixed_prefix(from: &str) -> String {
  let mut parts = Vec::new();
  for component in from.split('/') {
    if component.contains(['*', '?', '[']) {
      break;
    }
    parts.push(component);
  }
  parts.join("/")
}

fn join_dest(root: &str, rel: &str) -> String {
  if root.is_empty() {
    rel.to_string()
  } else {
    format!("{root}/{rel}")
  }
}

fn walk<F: FileSystem>(fs: &F, dir: &Path) -> SynthesisResult<Vec<(std::path::PathBuf, FileKind)>> {
  fs.walk(dir).map_err(|err| SynthesisError::io(dir.expect_to_slash(), err))
}

#[cfg(test)]
mod tests {
  use indexmap::IndexMap as Entries;
  use packplan_common::{BuildOptions, TargetPreset};
  use packplan_fs::MemoryFileSystem;

  use super::*;
  use crate::utils::normalize_options::normalize_options;

  fn options_with(patterns: Vec<CopyPattern>) -> NormalizedBuildOptions {
    let mut entry = Entries::new();
    entry.insert("myapp".to_string(), "./src/myapp.ts".to_string());
    let raw = BuildOptions {
      root_folder: Some("/project".into()),
      entry: Some(entry),
      copy_patterns: Some(patterns),
      ..BuildOptions::default()
    };
    normalize_options(TargetPreset::Web, raw).unwrap()
  }

  fn dests(mappings: &[CopyMapping]) -> Vec<&str> {
    mappings.iter().map(|m| m.dest.as_str()).collect()
  }

  #[test]
  fn directory_sources_expand_to_per_file_mappings() {
    let fs = MemoryFileSystem::new()
      .add_file("/project/dir/f1", 1)
      .add_file("/project/dir/f2", 1)
      .add_file("/project/src/myapp.ts", 1);
    let options = options_with(vec![CopyPattern::new("dir", "out")]);
    let mappings = resolve_copy_patterns(&options, &fs).unwrap();
    assert_eq!(dests(&mappings), ["out/f1", "out/f2"]);
  }

  #[test]
  fn directory_expansion_preserves_nested_layout() {
    let fs = MemoryFileSystem::new()
      .add_file("/project/dir/a.txt", 1)
      .add_file("/project/dir/sub/b.txt", 1);
    let options = options_with(vec![CopyPattern::new("dir", "out/")]);
    let mappings = resolve_copy_patterns(&options, &fs).unwrap();
    assert_eq!(dests(&mappings), ["out/a.txt", "out/sub/b.txt"]);
  }

  #[test]
  fn single_file_with_dir_semantics_keeps_its_base_name() {
    let fs = MemoryFileSystem::new().add_file("/project/data/file9", 1);

    let options = options_with(vec![CopyPattern::new("data/file9", "out/")]);
    let mappings = resolve_copy_patterns(&options, &fs).unwrap();
    assert_eq!(dests(&mappings), ["out/file9"]);

    let options = options_with(vec![CopyPattern {
      to_type: Some(ToType::Dir),
      ..CopyPattern::new("data/file9", "out")
    }]);
    let mappings = resolve_copy_patterns(&options, &fs).unwrap();
    assert_eq!(dests(&mappings), ["out/file9"]);
  }

  #[test]
  fn single_file_without_dir_semantics_is_renamed() {
    let fs = MemoryFileSystem::new().add_file("/project/data/file9", 1);
    let options = options_with(vec![CopyPattern::new("data/file9", "renamed.dat")]);
    let mappings = resolve_copy_patterns(&options, &fs).unwrap();
    assert_eq!(dests(&mappings), ["renamed.dat"]);
  }

  #[test]
  fn missing_literal_source_is_an_error() {
    let fs = MemoryFileSystem::new();
    let options = options_with(vec![CopyPattern::new("nope", "out")]);
    let err = resolve_copy_patterns(&options, &fs).unwrap_err();
    assert!(matches!(err, SynthesisError::MissingCopySource { ref from } if from == "nope"));
  }

  #[test]
  fn wildcard_with_explicit_context_strips_it() {
    let fs = MemoryFileSystem::new().add_file("/project/dir/sub/nested/x.txt", 1);
    let options = options_with(vec![CopyPattern {
      context: Some("dir/sub".to_string()),
      ..CopyPattern::new("**/*.txt", "out")
    }]);
    let mappings = resolve_copy_patterns(&options, &fs).unwrap();
    assert_eq!(dests(&mappings), ["out/nested/x.txt"]);
  }

  #[test]
  fn wildcard_defaults_to_its_fixed_prefix_as_context() {
    let fs = MemoryFileSystem::new()
      .add_file("/project/dir/sub/hello/a.example", 1)
      .add_file("/project/dir/sub/b.example", 1);
    let options = options_with(vec![CopyPattern::new("dir/sub/**/*.example", "out")]);
    let mappings = resolve_copy_patterns(&options, &fs).unwrap();
    assert_eq!(dests(&mappings), ["out/b.example", "out/hello/a.example"]);
  }

  #[test]
  fn zero_match_wildcard_yields_zero_mappings() {
    let fs = MemoryFileSystem::new().add_file("/project/readme.md", 1);
    let options = options_with(vec![CopyPattern::new("**/*.txt", "out")]);
    let mappings = resolve_copy_patterns(&options, &fs).unwrap();
    assert!(mappings.is_empty());
  }

  #[test]
  fn colliding_destinations_are_last_write_wins() {
    let fs = MemoryFileSystem::new()
      .add_file("/project/first/logo.png", 1)
      .add_file("/project/second/logo.png", 1);
    let options = options_with(vec![
      CopyPattern::new("first/logo.png", "logo.png"),
      CopyPattern::new("second/logo.png", "logo.png"),
    ]);
    let mappings = resolve_copy_patterns(&options, &fs).unwrap();
    assert_eq!(mappings.len(), 1);
    assert_eq!(mappings[0].source, std::path::PathBuf::from("/project/second/logo.png"));
  }

  #[test]
  fn empty_directories_are_preserved() {
    let fs = MemoryFileSystem::new().add_dir("/project/dir/empty").add_file("/project/dir/f", 1);
    let options = options_with(vec![CopyPattern::new("dir", "out")]);
    let mappings = resolve_copy_patterns(&options, &fs).unwrap();
    assert!(mappings
      .iter()
      .any(|m| m.dest == "out/empty" && m.kind == packplan_common::MappingKind::Dir));
  }

  #[test]
  fn pattern_order_is_preserved() {
    let fs = MemoryFileSystem::new()
      .add_file("/project/b/file", 1)
      .add_file("/project/a/file", 1);
    let options = options_with(vec![
      CopyPattern::new("b", "out-b"),
      CopyPattern::new("a", "out-a"),
    ]);
    let mappings = resolve_copy_patterns(&options, &fs).unwrap();
    assert_eq!(dests(&mappings), ["out-b/file", "out-a/file"]);
  }
}
