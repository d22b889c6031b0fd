//! # NaviCue Gate
//!
//! Decides whether a piece of therapeutic content is safe to present to a user
//! in a given arousal state.
//!
//! ## Pipeline
//!
//! 1. **Heat**: family baseline (high / medium / low) plus a schema modifier
//!    (-1 / 0 / +1), clamped to the three-level range
//! 2. **Safety**: content is safe iff `heat >= arousal` on the shared 0-2 scale
//! 3. **Gating**: the arousal state selects a nested set of allowed families
//!    (red ⊆ amber ⊆ green); [`StateGate`] applies both rules to candidates
//!
//! Everything here is pure and synchronous over compile-time tables, so any
//! number of threads may call in concurrently.

mod arousal;
mod gate;
pub mod heat;
mod safety;

pub use arousal::ArousalThresholds;
pub use gate::{GateCandidate, GateDecision, StateGate};
pub use heat::{compute_heat_level, resolve_heat_level, HeatResolution};
pub use safety::{allowed_families_for_arousal, is_family_allowed, is_heat_level_safe};
