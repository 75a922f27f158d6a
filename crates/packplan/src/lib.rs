mod stages;
mod synthesizer;
mod utils;

pub use crate::synthesizer::Synthesizer;
pub use packplan_common::*;
pub use packplan_error::{SynthesisError, SynthesisResult};
