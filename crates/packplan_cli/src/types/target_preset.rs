use clap::ValueEnum;

#[derive(PartialEq, Eq, Clone, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum TargetPreset {
  Web,
  Node,
}

impl From<TargetPreset> for packplan::TargetPreset {
  fn from(value: TargetPreset) -> Self {
    match value {
      TargetPreset::Web => packplan::TargetPreset::Web,
      TargetPreset::Node => packplan::TargetPreset::Node,
    }
  }
}
