use packplan_common::{BuildOptions, Mode, NormalizedBuildOptions, TargetPreset};
use packplan_error::{SynthesisError, SynthesisResult};

const DEFAULT_EMBED_LIMIT: u64 = 5000;
const DEFAULT_EMBED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "svg"];
const DEFAULT_COPY_EXTENSIONS: &[&str] =
  &["woff", "woff2", "ttf", "eot", "ico", "webp", "mp3", "mp4", "webm"];

/// Applies documented defaults, checks required options and rejects options
/// the target preset does not support. Error messages use the documented
/// camelCase option names.
pub fn normalize_options(
  target: TargetPreset,
  raw_options: BuildOptions,
) -> SynthesisResult<NormalizedBuildOptions> {
  let root_folder = raw_options
    .root_folder
    .ok_or_else(|| SynthesisError::invalid_value("rootFolder", "option is required"))?;
  if !root_folder.is_absolute() {
    return Err(SynthesisError::invalid_value("rootFolder", "expected an absolute path"));
  }

  let entry = raw_options
    .entry
    .ok_or_else(|| SynthesisError::invalid_value("entry", "option is required"))?;
  if entry.is_empty() {
    return Err(SynthesisError::invalid_value("entry", "at least one entry is required"));
  }

  if !target.emits_html() {
    for (name, present) in [
      ("pages", raw_options.pages.is_some()),
      ("cssModules", raw_options.css_modules.is_some()),
      ("webworkerPolyfills", raw_options.webworker_polyfills.is_some()),
    ] {
      if present {
        return Err(SynthesisError::invalid_value(
          name,
          format!("not supported by the {target} target preset"),
        ));
      }
    }
  }

  let embed_extensions = validate_extensions(
    "embedExtensions",
    raw_options
      .embed_extensions
      .unwrap_or_else(|| DEFAULT_EMBED_EXTENSIONS.iter().map(ToString::to_string).collect()),
  )?;
  let copy_extensions = validate_extensions(
    "copyExtensions",
    raw_options
      .copy_extensions
      .unwrap_or_else(|| DEFAULT_COPY_EXTENSIONS.iter().map(ToString::to_string).collect()),
  )?;

  let mode = raw_options.mode.unwrap_or(Mode::Development);
  let output_folder = raw_options.output_folder.unwrap_or_else(|| root_folder.join("dist"));

  let js_filename = raw_options.js_filename.unwrap_or_else(|| match mode {
    Mode::Development => "[name].js".to_string(),
    Mode::Production => "[hash].[name].js".to_string(),
  });
  let js_chunk_filename = raw_options.js_chunk_filename.unwrap_or_else(|| match mode {
    Mode::Development => "chunk.[id].js".to_string(),
    Mode::Production => "[hash].chunk.[id].js".to_string(),
  });
  let css_filename = match mode {
    Mode::Development => "[name].css".to_string(),
    Mode::Production => "[hash].[name].css".to_string(),
  };
  let css_chunk_filename = match mode {
    Mode::Development => "chunk.[id].css".to_string(),
    Mode::Production => "[hash].chunk.[id].css".to_string(),
  };

  Ok(NormalizedBuildOptions {
    target,
    mode,
    root_folder,
    output_folder,
    entry,
    pages: raw_options.pages,
    polyfills: raw_options.polyfills.unwrap_or_default(),
    webworker_polyfills: raw_options.webworker_polyfills.unwrap_or_default(),
    embed_limit: raw_options.embed_limit.unwrap_or(DEFAULT_EMBED_LIMIT),
    embed_extensions,
    copy_extensions,
    assets_relative_path: raw_options
      .assets_relative_path
      .unwrap_or_else(|| "assets/".to_string()),
    copy_patterns: raw_options.copy_patterns.unwrap_or_default(),
    css_modules: raw_options.css_modules.unwrap_or(false),
    sourcemaps: raw_options.sourcemaps.unwrap_or(true),
    skip_postprocess: raw_options.skip_postprocess.unwrap_or(false),
    public_path: raw_options.public_path.unwrap_or_else(|| "/".to_string()),
    js_filename,
    js_chunk_filename,
    css_filename,
    css_chunk_filename,
  })
}

fn validate_extensions(option: &str, extensions: Vec<String>) -> SynthesisResult<Vec<String>> {
  for (index, ext) in extensions.iter().enumerate() {
    if ext.is_empty() {
      return Err(SynthesisError::invalid_value(
        format!("{option}[{index}]"),
        "extension must not be empty",
      ));
    }
    if ext.starts_with('.') {
      return Err(SynthesisError::invalid_value(
        format!("{option}[{index}]"),
        "extension must not start with a dot",
      ));
    }
    if ext.chars().any(|c| c.is_ascii_uppercase()) {
      return Err(SynthesisError::invalid_value(
        format!("{option}[{index}]"),
        "extension must be lowercase",
      ));
    }
  }
  Ok(extensions)
}

#[cfg(test)]
mod tests {
  use indexmap::IndexMap;

  use super::*;

  fn base_options() -> BuildOptions {
    let mut entry = IndexMap::new();
    entry.insert("dummy".to_string(), "./src/dummy.ts".to_string());
    BuildOptions {
      root_folder: Some("/project".into()),
      entry: Some(entry),
      ..BuildOptions::default()
    }
  }

  #[test]
  fn defaults_are_applied() {
    let options = normalize_options(TargetPreset::Web, base_options()).unwrap();
    assert_eq!(options.mode, Mode::Development);
    assert_eq!(options.output_folder, std::path::PathBuf::from("/project/dist"));
    assert_eq!(options.embed_limit, 5000);
    assert_eq!(options.public_path, "/");
    assert_eq!(options.js_filename, "[name].js");
    assert_eq!(options.js_chunk_filename, "chunk.[id].js");
    assert!(options.sourcemaps);
    assert!(!options.css_modules);
  }

  #[test]
  fn production_defaults_carry_a_hash_placeholder() {
    let options = BuildOptions { mode: Some(Mode::Production), ..base_options() };
    let options = normalize_options(TargetPreset::Web, options).unwrap();
    assert_eq!(options.js_filename, "[hash].[name].js");
    assert_eq!(options.js_chunk_filename, "[hash].chunk.[id].js");
    assert_eq!(options.css_filename, "[hash].[name].css");
  }

  #[test]
  fn custom_chunk_filename_is_taken_verbatim() {
    let options = BuildOptions {
      mode: Some(Mode::Production),
      js_chunk_filename: Some("subfolder/custom.chunk.[id].js".to_string()),
      ..base_options()
    };
    let options = normalize_options(TargetPreset::Web, options).unwrap();
    assert_eq!(options.js_chunk_filename, "subfolder/custom.chunk.[id].js");
  }

  #[test]
  fn node_target_rejects_web_only_options() {
    let options = BuildOptions { css_modules: Some(true), ..base_options() };
    let err = normalize_options(TargetPreset::Node, options).unwrap_err();
    assert!(
      matches!(err, SynthesisError::InvalidOptionValue { ref option, .. } if option == "cssModules")
    );

    let options = BuildOptions { webworker_polyfills: Some(vec![]), ..base_options() };
    let err = normalize_options(TargetPreset::Node, options).unwrap_err();
    assert!(
      matches!(err, SynthesisError::InvalidOptionValue { ref option, .. } if option == "webworkerPolyfills")
    );
  }

  #[test]
  fn extension_lists_are_validated() {
    let options =
      BuildOptions { embed_extensions: Some(vec!["png".into(), ".jpg".into()]), ..base_options() };
    let err = normalize_options(TargetPreset::Web, options).unwrap_err();
    assert!(
      matches!(err, SynthesisError::InvalidOptionValue { ref option, .. } if option == "embedExtensions[1]")
    );

    let options = BuildOptions { copy_extensions: Some(vec!["GIF".into()]), ..base_options() };
    let err = normalize_options(TargetPreset::Web, options).unwrap_err();
    assert!(
      matches!(err, SynthesisError::InvalidOptionValue { ref option, .. } if option == "copyExtensions[0]")
    );
  }

  #[test]
  fn relative_root_folder_is_rejected() {
    let options = BuildOptions { root_folder: Some("project".into()), ..base_options() };
    let err = normalize_options(TargetPreset::Web, options).unwrap_err();
    assert!(
      matches!(err, SynthesisError::InvalidOptionValue { ref option, .. } if option == "rootFolder")
    );
  }
}
