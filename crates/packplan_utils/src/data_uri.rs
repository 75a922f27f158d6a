//! Data-URI encoding for assets classified as `Embed`.

use base64_simd::STANDARD;

/// Mime types for the static-asset extensions an embed rule can cover.
/// Unknown extensions fall back to `application/octet-stream`.
static MIME_BY_EXTENSION: phf::Map<&'static str, &'static str> = phf::phf_map! {
  "jpg" => "image/jpeg",
  "jpeg" => "image/jpeg",
  "png" => "image/png",
  "gif" => "image/gif",
  "svg" => "image/svg+xml",
  "webp" => "image/webp",
  "ico" => "image/x-icon",
  "woff" => "font/woff",
  "woff2" => "font/woff2",
  "ttf" => "font/ttf",
  "eot" => "application/vnd.ms-fontobject",
  "mp3" => "audio/mpeg",
  "mp4" => "video/mp4",
  "webm" => "video/webm",
};

pub fn mime_for_extension(ext: &str) -> &'static str {
  MIME_BY_EXTENSION.get(ext).copied().unwrap_or("application/octet-stream")
}

pub fn data_uri(ext: &str, content: &[u8]) -> String {
  format!("data:{};base64,{}", mime_for_extension(ext), STANDARD.encode_to_string(content))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn known_and_unknown_extensions() {
    assert_eq!(mime_for_extension("jpg"), "image/jpeg");
    assert_eq!(mime_for_extension("xyz"), "application/octet-stream");
  }

  #[test]
  fn encodes_base64_payload() {
    assert_eq!(data_uri("png", b"abc"), "data:image/png;base64,YWJj");
  }
}
