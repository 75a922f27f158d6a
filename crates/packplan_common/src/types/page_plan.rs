use arcstr::ArcStr;
use serde::Serialize;

/// One HTML document to generate: its output filename and the chunk names it
/// references. Chunk order is script/link tag emission order, which decides
/// execution order in the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagePlan {
  pub filename: String,
  pub chunks: Vec<ArcStr>,
}
