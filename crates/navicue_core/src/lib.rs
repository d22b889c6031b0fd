//! # NaviCue Core
//!
//! Typed vocabulary and static rule tables for gating therapeutic
//! micro-interactions ("NaviCues") against a user's arousal state.
//!
//! - [`taxonomy`]: closed enums for families, schemas, heat levels,
//!   arousal states, pillars and KBE layers
//! - [`tables`]: compile-time lookup tables (baseline heat, schema
//!   modifiers, gating, pillars, family defaults)
//! - [`config`]: TOML configuration for the runtime switches around them

pub mod config;
mod error;
pub mod tables;
pub mod taxonomy;

pub use config::NavicueConfig;
pub use error::TaxonomyError;
pub use taxonomy::{ArousalState, Family, HeatLevel, KbeLayer, Pillar, Schema};
