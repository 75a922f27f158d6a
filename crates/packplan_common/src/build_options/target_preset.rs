use std::fmt::Display;
use std::str::FromStr;

use serde::Serialize;

/// Deployment environment the synthesized plan targets. The two presets
/// accept overlapping but not identical option subsets: `pages`,
/// `css_modules` and `webworker_polyfills` only apply to the web preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetPreset {
  #[default]
  Web,
  Node,
}

impl TargetPreset {
  #[inline]
  pub fn emits_html(self) -> bool {
    matches!(self, Self::Web)
  }
}

impl FromStr for TargetPreset {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "web" => Ok(Self::Web),
      "node" => Ok(Self::Node),
      _ => Err(format!("Invalid target \"{s}\".")),
    }
  }
}

impl Display for TargetPreset {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Web => write!(f, "web"),
      Self::Node => write!(f, "node"),
    }
  }
}
