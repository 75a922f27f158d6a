//! JSON-boundary option validation. Each documented option is checked
//! against its declared type/shape; the first violation aborts with an
//! error naming the offending option (nested paths like
//! `copyPatterns[2].from`). Nothing here touches the filesystem.

use indexmap::IndexMap;
use serde_json::Value;

use packplan_common::{BuildOptions, CopyPattern, Mode, PageOptions, ToType};
use packplan_error::{SynthesisError, SynthesisResult};

const KNOWN_OPTIONS: &[&str] = &[
  "mode",
  "rootFolder",
  "outputFolder",
  "entry",
  "pages",
  "polyfills",
  "webworkerPolyfills",
  "embedLimit",
  "embedExtensions",
  "copyExtensions",
  "assetsRelativePath",
  "copyPatterns",
  "cssModules",
  "sourcemaps",
  "skipPostprocess",
  "publicPath",
  "jsFilename",
  "jsChunkFilename",
];

pub fn validate_options(raw: &Value) -> SynthesisResult<BuildOptions> {
  let Value::Object(map) = raw else {
    return Err(SynthesisError::invalid_type("options", "object", json_type_name(raw)));
  };

  for key in map.keys() {
    if !KNOWN_OPTIONS.contains(&key.as_str()) {
      return Err(SynthesisError::invalid_value(key.clone(), "unknown option"));
    }
  }

  let mut options = BuildOptions::default();
  if let Some(value) = map.get("mode") {
    options.mode = Some(expect_mode(value)?);
  }
  if let Some(value) = map.get("rootFolder") {
    options.root_folder = Some(expect_string("rootFolder", value)?.into());
  }
  if let Some(value) = map.get("outputFolder") {
    options.output_folder = Some(expect_string("outputFolder", value)?.into());
  }
  if let Some(value) = map.get("entry") {
    options.entry = Some(expect_entry(value)?);
  }
  if let Some(value) = map.get("pages") {
    options.pages = Some(expect_pages(value)?);
  }
  if let Some(value) = map.get("polyfills") {
    options.polyfills = Some(expect_string_list("polyfills", value)?);
  }
  if let Some(value) = map.get("webworkerPolyfills") {
    options.webworker_polyfills = Some(expect_string_list("webworkerPolyfills", value)?);
  }
  if let Some(value) = map.get("embedLimit") {
    options.embed_limit = Some(expect_non_negative_integer("embedLimit", value)?);
  }
  if let Some(value) = map.get("embedExtensions") {
    options.embed_extensions = Some(expect_string_list("embedExtensions", value)?);
  }
  if let Some(value) = map.get("copyExtensions") {
    options.copy_extensions = Some(expect_string_list("copyExtensions", value)?);
  }
  if let Some(value) = map.get("assetsRelativePath") {
    options.assets_relative_path = Some(expect_string("assetsRelativePath", value)?);
  }
  if let Some(value) = map.get("copyPatterns") {
    options.copy_patterns = Some(expect_copy_patterns(value)?);
  }
  if let Some(value) = map.get("cssModules") {
    options.css_modules = Some(expect_bool("cssModules", value)?);
  }
  if let Some(value) = map.get("sourcemaps") {
    options.sourcemaps = Some(expect_bool("sourcemaps", value)?);
  }
  if let Some(value) = map.get("skipPostprocess") {
    options.skip_postprocess = Some(expect_bool("skipPostprocess", value)?);
  }
  if let Some(value) = map.get("publicPath") {
    options.public_path = Some(expect_string("publicPath", value)?);
  }
  if let Some(value) = map.get("jsFilename") {
    options.js_filename = Some(expect_string("jsFilename", value)?);
  }
  if let Some(value) = map.get("jsChunkFilename") {
    options.js_chunk_filename = Some(expect_string("jsChunkFilename", value)?);
  }
  Ok(options)
}

fn json_type_name(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "boolean",
    Value::Number(_) => "number",
    Value::String(_) => "string",
    Value::Array(_) => "array",
    Value::Object(_) => "object",
  }
}

fn expect_string(option: &str, value: &Value) -> SynthesisResult<String> {
  match value {
    Value::String(s) => Ok(s.clone()),
    _ => Err(SynthesisError::invalid_type(option, "string", json_type_name(value))),
  }
}

fn expect_bool(option: &str, value: &Value) -> SynthesisResult<bool> {
  match value {
    Value::Bool(b) => Ok(*b),
    _ => Err(SynthesisError::invalid_type(option, "boolean", json_type_name(value))),
  }
}

fn expect_non_negative_integer(option: &str, value: &Value) -> SynthesisResult<u64> {
  match value {
    Value::Number(number) => number
      .as_u64()
      .ok_or_else(|| SynthesisError::invalid_value(option, "expected a non-negative integer")),
    _ => Err(SynthesisError::invalid_type(option, "number", json_type_name(value))),
  }
}

fn expect_mode(value: &Value) -> SynthesisResult<Mode> {
  let raw = expect_string("mode", value)?;
  raw.parse().map_err(|_| {
    SynthesisError::invalid_value("mode", "expected \"development\" or \"production\"")
  })
}

fn expect_string_list(option: &str, value: &Value) -> SynthesisResult<Vec<String>> {
  let Value::Array(items) = value else {
    return Err(SynthesisError::invalid_type(option, "array", json_type_name(value)));
  };
  let mut list = Vec::with_capacity(items.len());
  for (index, item) in items.iter().enumerate() {
    list.push(expect_string(&format!("{option}[{index}]"), item)?);
  }
  Ok(list)
}

fn expect_entry(value: &Value) -> SynthesisResult<IndexMap<String, String>> {
  let Value::Object(map) = value else {
    return Err(SynthesisError::invalid_type("entry", "object", json_type_name(value)));
  };
  let mut entry = IndexMap::with_capacity(map.len());
  for (name, source) in map {
    entry.insert(name.clone(), expect_string(&format!("entry.{name}"), source)?);
  }
  Ok(entry)
}

fn expect_pages(value: &Value) -> SynthesisResult<Vec<PageOptions>> {
  let Value::Array(items) = value else {
    return Err(SynthesisError::invalid_type("pages", "array", json_type_name(value)));
  };
  let mut pages = Vec::with_capacity(items.len());
  for (index, item) in items.iter().enumerate() {
    let option = format!("pages[{index}]");
    let Value::Object(map) = item else {
      return Err(SynthesisError::invalid_type(&option, "object", json_type_name(item)));
    };
    for key in map.keys() {
      if key != "filename" && key != "chunks" {
        return Err(SynthesisError::invalid_value(format!("{option}.{key}"), "unknown field"));
      }
    }
    let filename = map
      .get("filename")
      .ok_or_else(|| SynthesisError::invalid_value(option.clone(), "missing required field `filename`"))
      .and_then(|v| expect_string(&format!("{option}.filename"), v))?;
    let chunks = map
      .get("chunks")
      .ok_or_else(|| SynthesisError::invalid_value(option.clone(), "missing required field `chunks`"))
      .and_then(|v| expect_string_list(&format!("{option}.chunks"), v))?;
    pages.push(PageOptions::new(filename, chunks));
  }
  Ok(pages)
}

fn expect_copy_patterns(value: &Value) -> SynthesisResult<Vec<CopyPattern>> {
  let Value::Array(items) = value else {
    return Err(SynthesisError::invalid_type("copyPatterns", "array", json_type_name(value)));
  };
  let mut patterns = Vec::with_capacity(items.len());
  for (index, item) in items.iter().enumerate() {
    let option = format!("copyPatterns[{index}]");
    let Value::Object(map) = item else {
      return Err(SynthesisError::invalid_type(&option, "object", json_type_name(item)));
    };
    for key in map.keys() {
      if !matches!(key.as_str(), "from" | "to" | "toType" | "context") {
        return Err(SynthesisError::invalid_value(format!("{option}.{key}"), "unknown field"));
      }
    }
    let from = map
      .get("from")
      .ok_or_else(|| SynthesisError::invalid_value(option.clone(), "missing required field `from`"))
      .and_then(|v| expect_string(&format!("{option}.from"), v))?;
    let to = map
      .get("to")
      .ok_or_else(|| SynthesisError::invalid_value(option.clone(), "missing required field `to`"))
      .and_then(|v| expect_string(&format!("{option}.to"), v))?;
    let to_type = match map.get("toType") {
      None => None,
      Some(v) => {
        let raw = expect_string(&format!("{option}.toType"), v)?;
        Some(raw.parse::<ToType>().map_err(|_| {
          SynthesisError::invalid_value(
            format!("{option}.toType"),
            "expected \"file\" or \"dir\"",
          )
        })?)
      }
    };
    let context = match map.get("context") {
      None => None,
      Some(v) => Some(expect_string(&format!("{option}.context"), v)?),
    };
    patterns.push(CopyPattern { from, to, to_type, context });
  }
  Ok(patterns)
}
