//! State gating filter over candidate NaviCues.
//!
//! A candidate passes when:
//! 1. its family is in the allowed set for the user's arousal state, and
//! 2. (if `enforce_heat_safety`) any heat level it carries is safe for that state.
//!
//! Unknown families and unparseable heat levels are rejected: this is the
//! safety filter, so anything it cannot classify stays out.

use crate::safety::{is_family_allowed, is_heat_level_safe};
use navicue_core::config::GatingConfig;
use navicue_core::{ArousalState, Family, HeatLevel};
use serde::Serialize;

/// Anything that can be put through the gate.
pub trait GateCandidate {
    /// Raw family key, e.g. `"grip_scan"`.
    fn family_key(&self) -> &str;

    /// Raw heat level key, if the content is tagged with one.
    fn heat_level_key(&self) -> Option<&str>;
}

/// Why a candidate was let through or held back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum GateDecision {
    Allowed,
    /// Gating switched off in config; everything passes.
    GatingDisabled,
    UnknownFamily { family: String },
    FamilyNotAllowed { family: Family },
    HeatTooLow { heat: HeatLevel },
    InvalidHeat { heat: String },
}

impl GateDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GateDecision::Allowed | GateDecision::GatingDisabled)
    }
}

#[derive(Debug, Clone, Default)]
pub struct StateGate {
    config: GatingConfig,
}

impl StateGate {
    pub fn new(config: GatingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GatingConfig {
        &self.config
    }

    /// Decide a single candidate.
    pub fn decide<T: GateCandidate + ?Sized>(&self, candidate: &T, state: ArousalState) -> GateDecision {
        if !self.config.state_gating_enabled {
            return GateDecision::GatingDisabled;
        }

        let family_key = candidate.family_key();
        let family = match family_key.parse::<Family>() {
            Ok(family) => family,
            Err(_) => {
                return GateDecision::UnknownFamily {
                    family: family_key.to_string(),
                }
            }
        };
        if !is_family_allowed(family, state) {
            return GateDecision::FamilyNotAllowed { family };
        }

        if self.config.enforce_heat_safety {
            let heat_key = candidate.heat_level_key().map(str::trim).filter(|k| !k.is_empty());
            if let Some(heat_key) = heat_key {
                match heat_key.parse::<HeatLevel>() {
                    Ok(heat) if !is_heat_level_safe(heat, state) => {
                        return GateDecision::HeatTooLow { heat };
                    }
                    Ok(_) => {}
                    Err(_) => {
                        return GateDecision::InvalidHeat {
                            heat: heat_key.to_string(),
                        }
                    }
                }
            }
        }

        GateDecision::Allowed
    }

    /// Keep the candidates that pass at `state`, preserving order.
    pub fn filter<'a, T: GateCandidate>(&self, candidates: &'a [T], state: ArousalState) -> Vec<&'a T> {
        let passed: Vec<&T> = candidates
            .iter()
            .filter(|c| {
                let decision = self.decide(*c, state);
                if !decision.is_allowed() {
                    tracing::debug!(
                        target: "navicue::gate",
                        family = c.family_key(),
                        state = %state,
                        ?decision,
                        "candidate gated out"
                    );
                }
                decision.is_allowed()
            })
            .collect();

        tracing::info!(
            target: "navicue::gate",
            state = %state,
            total = candidates.len(),
            passed = passed.len(),
            "state gating applied"
        );
        passed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Cue {
        family: &'static str,
        heat: Option<&'static str>,
    }

    impl GateCandidate for Cue {
        fn family_key(&self) -> &str {
            self.family
        }
        fn heat_level_key(&self) -> Option<&str> {
            self.heat
        }
    }

    fn cue(family: &'static str, heat: Option<&'static str>) -> Cue {
        Cue { family, heat }
    }

    #[test]
    fn test_red_admits_only_high_heat_families() {
        let gate = StateGate::default();
        let cues = [
            cue("grip_scan", None),
            cue("paradox_key", None),
            cue("release_prompt", None),
            cue("proof_stamp", Some("high")),
        ];
        let passed = gate.filter(&cues, ArousalState::Red);
        let families: Vec<&str> = passed.iter().map(|c| c.family).collect();
        assert_eq!(families, vec!["grip_scan", "proof_stamp"]);
    }

    #[test]
    fn test_green_admits_everything_known() {
        let gate = StateGate::default();
        let cues: Vec<Cue> = Family::ALL.iter().map(|f| cue(f.as_str(), Some("low"))).collect();
        assert_eq!(gate.filter(&cues, ArousalState::Green).len(), Family::ALL.len());
    }

    #[test]
    fn test_heat_tag_is_enforced() {
        let gate = StateGate::default();
        // Family allowed at amber, but the item is tagged low heat.
        let decision = gate.decide(&cue("story_drop", Some("low")), ArousalState::Amber);
        assert_eq!(decision, GateDecision::HeatTooLow { heat: HeatLevel::Low });
    }

    #[test]
    fn test_heat_tag_ignored_when_not_enforced() {
        let gate = StateGate::new(GatingConfig {
            state_gating_enabled: true,
            enforce_heat_safety: false,
        });
        let decision = gate.decide(&cue("story_drop", Some("low")), ArousalState::Amber);
        assert_eq!(decision, GateDecision::Allowed);
    }

    #[test]
    fn test_unknown_family_rejected() {
        let gate = StateGate::default();
        let decision = gate.decide(&cue("curveball", None), ArousalState::Green);
        assert_eq!(
            decision,
            GateDecision::UnknownFamily {
                family: "curveball".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_heat_rejected() {
        let gate = StateGate::default();
        let decision = gate.decide(&cue("grip_scan", Some("scorching")), ArousalState::Green);
        assert!(matches!(decision, GateDecision::InvalidHeat { .. }));
        assert!(!decision.is_allowed());
    }

    #[test]
    fn test_blank_heat_counts_as_absent() {
        let gate = StateGate::default();
        assert!(gate.decide(&cue("grip_scan", Some("")), ArousalState::Red).is_allowed());
    }

    #[test]
    fn test_disabled_gating_passes_all() {
        let gate = StateGate::new(GatingConfig {
            state_gating_enabled: false,
            enforce_heat_safety: true,
        });
        let cues = [cue("paradox_key", Some("low")), cue("curveball", None)];
        assert_eq!(gate.filter(&cues, ArousalState::Red).len(), 2);
    }

    #[test]
    fn test_decision_serializes_with_tag() {
        let json = serde_json::to_value(GateDecision::FamilyNotAllowed {
            family: Family::ParadoxKey,
        })
        .unwrap();
        assert_eq!(json["decision"], "family_not_allowed");
        assert_eq!(json["family"], "paradox_key");
    }
}
