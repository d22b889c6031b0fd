use crate::taxonomy::{Pillar, Schema};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

// ============================================================================
// Top-level config
// ============================================================================

/// Runtime switches around the static tables. The tables themselves are
/// compiled in and cannot be overridden here.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavicueConfig {
    pub gating: GatingConfig,
    pub thresholds: ThresholdsConfig,
    pub enhance: EnhanceConfig,
}

impl NavicueConfig {
    /// Read `[gating]`, `[thresholds]` and `[enhance]` from a TOML file.
    /// Absent sections and keys keep their defaults; `NAVICUE_*` env vars win
    /// over the file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read NaviCue config at {}", path.display()))?;
        let mut config: NavicueConfig = toml::from_str(&raw)
            .with_context(|| format!("Malformed NaviCue config at {}", path.display()))?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Like [`load`](Self::load), but a missing or malformed file yields the
    /// built-in gating defaults (env vars still apply).
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            tracing::info!("{:#}; using built-in gating defaults", e);
            let mut config = Self::default();
            config.apply_env_overrides();
            config
        })
    }

    /// Apply environment variable overrides on top of file-based config.
    fn apply_env_overrides(&mut self) {
        if let Some(v) = env_bool("NAVICUE_STATE_GATING") {
            self.gating.state_gating_enabled = v;
        }
        if let Some(v) = env_bool("NAVICUE_ENFORCE_HEAT_SAFETY") {
            self.gating.enforce_heat_safety = v;
        }
        if let Ok(v) = std::env::var("NAVICUE_AROUSAL_AMBER_THRESHOLD") {
            if let Ok(n) = v.parse() {
                self.thresholds.arousal_amber_threshold = n;
            }
        }
        if let Ok(v) = std::env::var("NAVICUE_AROUSAL_RED_THRESHOLD") {
            if let Ok(n) = v.parse() {
                self.thresholds.arousal_red_threshold = n;
            }
        }
        if let Ok(v) = std::env::var("NAVICUE_FALLBACK_PILLAR") {
            match v.parse() {
                Ok(pillar) => self.enhance.fallback_pillar = pillar,
                Err(e) => tracing::warn!("Ignoring NAVICUE_FALLBACK_PILLAR: {}", e),
            }
        }
    }
}

fn env_bool(name: &str) -> Option<bool> {
    let v = std::env::var(name).ok()?;
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => {
            tracing::warn!("Ignoring {}: '{}' is not a boolean", name, v);
            None
        }
    }
}

// ============================================================================
// Sub-configs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GatingConfig {
    /// Master switch for the state-gating filter. Off means every candidate passes.
    pub state_gating_enabled: bool,
    /// Also require `heat >= arousal` for candidates that carry a heat level.
    pub enforce_heat_safety: bool,
}

impl Default for GatingConfig {
    fn default() -> Self {
        Self {
            state_gating_enabled: true,
            enforce_heat_safety: true,
        }
    }
}

/// Resistance score cut-offs for deriving an arousal state.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThresholdsConfig {
    pub arousal_amber_threshold: f32,
    pub arousal_red_threshold: f32,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            arousal_amber_threshold: 6.0,
            arousal_red_threshold: 8.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EnhanceConfig {
    /// Schema used when neither keywords nor the family default apply.
    pub fallback_schema: Schema,
    /// Pillar used when the schema has no pillar mapping.
    pub fallback_pillar: Pillar,
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            fallback_schema: Schema::Fusion,
            fallback_pillar: Pillar::P01,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
