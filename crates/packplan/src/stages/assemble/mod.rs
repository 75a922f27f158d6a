//! Page/chunk assembly. Explicit pages are checked against the resolved
//! bundle names; absent `pages` on the web target synthesizes one implicit
//! page per main-thread bundle. The node target emits no HTML at all.

use arcstr::ArcStr;
use rustc_hash::FxHashSet;

use packplan_common::{BundleEntry, NormalizedBuildOptions, PagePlan};
use packplan_error::{SynthesisError, SynthesisResult};
use packplan_utils::sanitize_file_name::sanitize_file_name;

pub fn assemble_pages(
  options: &NormalizedBuildOptions,
  entries: &[BundleEntry],
) -> SynthesisResult<Vec<PagePlan>> {
  if !options.target.emits_html() {
    return Ok(Vec::new());
  }

  let names: FxHashSet<&str> = entries.iter().map(|entry| entry.name.as_str()).collect();

  if let Some(pages) = &options.pages {
    let mut plans = Vec::with_capacity(pages.len());
    for page in pages {
      for chunk in &page.chunks {
        if !names.contains(chunk.as_str()) {
          return Err(SynthesisError::UnknownChunkReference {
            page: page.filename.clone(),
            chunk: chunk.clone(),
          });
        }
      }
      plans.push(PagePlan {
        filename: page.filename.clone(),
        chunks: page.chunks.iter().map(|chunk| ArcStr::from(chunk.as_str())).collect(),
      });
    }
    return Ok(plans);
  }

  // One implicit document per main-thread bundle; worker bundles are loaded
  // by code, never by a page of their own.
  let main_entries: Vec<&BundleEntry> = entries.iter().filter(|e| !e.is_worker()).collect();
  let plans = main_entries
    .iter()
    .map(|entry| {
      let filename = if main_entries.len() == 1 {
        "index.html".to_string()
      } else {
        format!("{}.html", sanitize_file_name(&entry.name))
      };
      PagePlan { filename, chunks: vec![entry.name.clone()] }
    })
    .collect();
  Ok(plans)
}
