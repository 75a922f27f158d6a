use std::path::Path;

use sugar_path::SugarPath;

pub trait PathExt {
  fn expect_to_str(&self) -> &str;

  fn expect_to_slash(&self) -> String;

  /// Lowercased extension without the leading dot, if any.
  fn extension_lowercase(&self) -> Option<String>;
}

impl PathExt for Path {
  fn expect_to_str(&self) -> &str {
    self.to_str().unwrap_or_else(|| {
      panic!("Failed to convert {:?} to valid utf8 str", self.display());
    })
  }

  fn expect_to_slash(&self) -> String {
    self
      .to_slash()
      .unwrap_or_else(|| panic!("Failed to convert {:?} to slash str", self.display()))
      .into_owned()
  }

  fn extension_lowercase(&self) -> Option<String> {
    self.extension().and_then(|ext| ext.to_str()).map(str::to_ascii_lowercase)
  }
}

#[test]
fn test_extension_lowercase() {
  assert_eq!(Path::new("img/photo.JPG").extension_lowercase().as_deref(), Some("jpg"));
  assert_eq!(Path::new("img/photo.png").extension_lowercase().as_deref(), Some("png"));
  assert_eq!(Path::new("Makefile").extension_lowercase(), None);
}
