//! Subresource-integrity digests for emitted `<script>` and `<link>` tags.

use base64_simd::STANDARD;
use sha2::{Digest, Sha256, Sha384};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrityAlgorithm {
  Sha256,
  Sha384,
}

impl IntegrityAlgorithm {
  pub fn prefix(self) -> &'static str {
    match self {
      Self::Sha256 => "sha256",
      Self::Sha384 => "sha384",
    }
  }
}

/// `integrity` attribute value for an emitted asset, e.g. `sha384-<base64>`.
pub fn integrity_attribute(algorithm: IntegrityAlgorithm, content: &[u8]) -> String {
  let digest = match algorithm {
    IntegrityAlgorithm::Sha256 => Sha256::digest(content).to_vec(),
    IntegrityAlgorithm::Sha384 => Sha384::digest(content).to_vec(),
  };
  format!("{}-{}", algorithm.prefix(), STANDARD.encode_to_string(&digest))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn sha256_of_empty_input() {
    assert_eq!(
      integrity_attribute(IntegrityAlgorithm::Sha256, b""),
      "sha256-47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU="
    );
  }

  #[test]
  fn digests_are_prefixed_with_the_algorithm() {
    assert!(integrity_attribute(IntegrityAlgorithm::Sha384, b"hello").starts_with("sha384-"));
  }
}
