use packplan_utils::integrity::IntegrityAlgorithm;
use serde::{Serialize, Serializer};

/// Subresource-integrity requirements for emitted `<script>`/`<link>` tags.
/// Present on production web plans only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntegrityPolicy {
  #[serde(serialize_with = "serialize_algorithm")]
  pub algorithm: IntegrityAlgorithm,
  pub cross_origin: &'static str,
}

impl IntegrityPolicy {
  pub fn new(algorithm: IntegrityAlgorithm) -> Self {
    Self { algorithm, cross_origin: "anonymous" }
  }
}

fn serialize_algorithm<S: Serializer>(
  algorithm: &IntegrityAlgorithm,
  serializer: S,
) -> Result<S::Ok, S::Error> {
  serializer.serialize_str(algorithm.prefix())
}
