use std::path::PathBuf;

use clap::Args;

use crate::types::target_preset::TargetPreset;

#[derive(Args)]
pub struct InputArgs {
  /// Options document (JSON, the documented camelCase option names).
  #[clap(long, short = 'c')]
  pub config: PathBuf,

  #[clap(long, short = 't', default_value = "web")]
  pub target: TargetPreset,
}

#[derive(Args)]
pub struct OutputArgs {
  /// Write the synthesized plan to this file as JSON.
  #[clap(long, short = 'o')]
  pub out: Option<PathBuf>,

  #[clap(long)]
  pub pretty: bool,

  #[clap(long)]
  pub silent: bool,
}
