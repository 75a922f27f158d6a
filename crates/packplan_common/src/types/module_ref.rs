use std::fmt::Display;
use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};
use sugar_path::SugarPath;

/// A resolved bundle input. References starting with `./`, `../` or `/`
/// become absolute file paths against the build root (any source-file kind,
/// including typed sources); everything else is an installed-package name
/// left to the bundler's own module resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleRef {
  Package(String),
  File(PathBuf),
}

impl ModuleRef {
  pub fn resolve(reference: &str, root: &Path) -> Self {
    if reference.starts_with("./") || reference.starts_with("../") || reference.starts_with('/') {
      Self::File(Path::new(reference).absolutize_with(root))
    } else {
      Self::Package(reference.to_string())
    }
  }
}

impl Display for ModuleRef {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Package(name) => write!(f, "{name}"),
      Self::File(path) => write!(f, "{}", path.display()),
    }
  }
}

impl Serialize for ModuleRef {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&self.to_string())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn relative_references_become_absolute_files() {
    let root = Path::new("/project");
    assert_eq!(
      ModuleRef::resolve("./src/app.ts", root),
      ModuleRef::File(PathBuf::from("/project/src/app.ts"))
    );
    assert_eq!(
      ModuleRef::resolve("../shared/reset.css", root),
      ModuleRef::File(PathBuf::from("/shared/reset.css"))
    );
  }

  #[test]
  fn bare_names_stay_packages() {
    let root = Path::new("/project");
    assert_eq!(
      ModuleRef::resolve("module-window-polyfill", root),
      ModuleRef::Package("module-window-polyfill".to_string())
    );
  }
}
