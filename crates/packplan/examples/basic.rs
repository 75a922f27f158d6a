use indexmap::IndexMap;

use packplan::{BuildOptions, Synthesizer, TargetPreset};

fn main() {
  let mut entry = IndexMap::new();
  entry.insert("myapp".to_string(), "./src/myapp.ts".to_string());

  let synthesizer = Synthesizer::new(
    TargetPreset::Web,
    BuildOptions {
      root_folder: Some(std::env::current_dir().expect("cwd")),
      entry: Some(entry),
      polyfills: Some(vec!["core-js/stable".to_string()]),
      ..Default::default()
    },
  )
  .expect("valid options");

  let plan = synthesizer.synthesize().expect("synthesis");
  for entry in &plan.entries {
    eprintln!("{}: {} module(s)", entry.name, entry.modules.len());
  }
  for page in &plan.pages {
    eprintln!("page {} -> {:?}", page.filename, page.chunks);
  }
}
