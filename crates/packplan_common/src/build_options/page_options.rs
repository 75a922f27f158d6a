#[derive(Debug, Clone)]
pub struct PageOptions {
  /// Output filename of the generated HTML document.
  pub filename: String,
  /// Chunk names the document references, in tag emission order.
  pub chunks: Vec<String>,
}

impl PageOptions {
  pub fn new(filename: impl Into<String>, chunks: Vec<String>) -> Self {
    Self { filename: filename.into(), chunks }
  }
}
