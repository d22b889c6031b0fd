//! # NaviCue Enhance
//!
//! Turns raw content batches into fully tagged NaviCues the orchestrator can
//! gate, then checks and summarizes the result.
//!
//! - [`Enhancer`]: fills schema, KBE target, heat, pillar and tags
//! - [`validate_batch`]: required-field and vocabulary checks
//! - [`batch_statistics`]: per-axis distribution of a batch

mod cue;
mod enhance;
pub mod infer;
pub mod io;
mod stats;
mod validate;

pub use cue::{CueStatus, EnhancedNaviCue, RawNaviCue};
pub use enhance::{batch_name, Enhancer};
pub use io::CueFileError;
pub use stats::{batch_statistics, BatchStatistics};
pub use validate::{validate_batch, validate_enhanced, BatchValidation, CueErrors, ValidationReport};
