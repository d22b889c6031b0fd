//! Property-based tests for navicue_gate heat computation and state gating.
//!
//! Verifies that computed heat never leaves the three-level range, that schema
//! modifiers act monotonically, and that the gate never admits a family the
//! arousal state forbids, regardless of input.

use navicue_core::config::GatingConfig;
use navicue_core::tables::{allowed_families, baseline_heat};
use navicue_core::{ArousalState, Family, HeatLevel, Schema};
use navicue_gate::{
    allowed_families_for_arousal, compute_heat_level, is_heat_level_safe, resolve_heat_level,
    GateCandidate, StateGate,
};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_family() -> impl Strategy<Value = Family> {
    prop::sample::select(Family::ALL.to_vec())
}

fn arb_schema() -> impl Strategy<Value = Schema> {
    prop::sample::select(Schema::ALL.to_vec())
}

fn arb_heat() -> impl Strategy<Value = HeatLevel> {
    prop::sample::select(HeatLevel::ALL.to_vec())
}

fn arb_state() -> impl Strategy<Value = ArousalState> {
    prop::sample::select(ArousalState::ALL.to_vec())
}

/// Mix of known family keys and arbitrary junk.
fn arb_family_key() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_family().prop_map(|f| f.as_str().to_string()),
        "[a-z_]{0,16}",
    ]
}

/// Mix of valid heat tags, junk, and absent.
fn arb_heat_key() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        arb_heat().prop_map(|h| Some(h.as_str().to_string())),
        "[a-z]{0,8}".prop_map(Some),
    ]
}

#[derive(Debug, Clone)]
struct Candidate {
    family: String,
    heat: Option<String>,
}

impl GateCandidate for Candidate {
    fn family_key(&self) -> &str {
        &self.family
    }
    fn heat_level_key(&self) -> Option<&str> {
        self.heat.as_deref()
    }
}

fn arb_candidate() -> impl Strategy<Value = Candidate> {
    (arb_family_key(), arb_heat_key()).prop_map(|(family, heat)| Candidate { family, heat })
}

// ============================================================================
// Heat computation
// ============================================================================

proptest! {
    #[test]
    fn no_schema_yields_baseline(family in arb_family()) {
        prop_assert_eq!(compute_heat_level(family, None), baseline_heat(family));
    }

    #[test]
    fn computed_heat_stays_in_range(family in arb_family(), schema in proptest::option::of(arb_schema())) {
        let heat = compute_heat_level(family, schema);
        prop_assert!(HeatLevel::ALL.contains(&heat));
        prop_assert!(heat.ordinal() <= 2);
    }

    /// +1 schemas never lower heat relative to baseline; -1 schemas never raise it.
    #[test]
    fn schema_modifiers_are_monotone(family in arb_family(), schema in arb_schema()) {
        let base = compute_heat_level(family, None);
        let with = compute_heat_level(family, Some(schema));
        match schema.heat_modifier() {
            1 => prop_assert!(with >= base),
            -1 => prop_assert!(with <= base),
            _ => prop_assert_eq!(with, base),
        }
    }

    #[test]
    fn heat_computation_is_idempotent(family in arb_family(), schema in proptest::option::of(arb_schema())) {
        prop_assert_eq!(compute_heat_level(family, schema), compute_heat_level(family, schema));
    }

    /// String-keyed resolution agrees with the typed path for valid keys.
    #[test]
    fn resolve_matches_typed_path(family in arb_family(), schema in proptest::option::of(arb_schema())) {
        let resolved = resolve_heat_level(family.as_str(), schema.map(|s| s.as_str()));
        prop_assert_eq!(resolved.level, compute_heat_level(family, schema));
        prop_assert!(!resolved.is_defaulted());
    }

    #[test]
    fn resolve_never_panics_on_junk(family in "\\PC{0,20}", schema in proptest::option::of("\\PC{0,20}")) {
        let resolved = resolve_heat_level(&family, schema.as_deref());
        prop_assert!(HeatLevel::ALL.contains(&resolved.level));
    }
}

// ============================================================================
// Safety & gating
// ============================================================================

proptest! {
    #[test]
    fn safety_is_ordinal_comparison(heat in arb_heat(), state in arb_state()) {
        prop_assert_eq!(is_heat_level_safe(heat, state), heat.ordinal() >= state.ordinal());
    }

    /// Raising heat or lowering arousal never turns a safe pair unsafe.
    #[test]
    fn safety_is_monotone(heat in arb_heat(), state in arb_state()) {
        if is_heat_level_safe(heat, state) {
            for hotter in HeatLevel::ALL.into_iter().filter(|h| *h >= heat) {
                for calmer in ArousalState::ALL.into_iter().filter(|s| *s <= state) {
                    prop_assert!(is_heat_level_safe(hotter, calmer));
                }
            }
        }
    }

    #[test]
    fn gate_never_admits_forbidden_family(
        candidates in prop::collection::vec(arb_candidate(), 0..32),
        state in arb_state(),
    ) {
        let gate = StateGate::default();
        for passed in gate.filter(&candidates, state) {
            let family: Family = passed.family.parse().unwrap();
            prop_assert!(allowed_families(state).contains(&family));
            if let Some(heat) = passed.heat.as_deref().filter(|h| !h.trim().is_empty()) {
                let heat: HeatLevel = heat.parse().unwrap();
                prop_assert!(is_heat_level_safe(heat, state));
            }
        }
    }

    /// Gating is at least as permissive at a calmer state.
    #[test]
    fn gate_is_nested_across_states(candidates in prop::collection::vec(arb_candidate(), 0..32)) {
        let gate = StateGate::default();
        let red = gate.filter(&candidates, ArousalState::Red).len();
        let amber = gate.filter(&candidates, ArousalState::Amber).len();
        let green = gate.filter(&candidates, ArousalState::Green).len();
        prop_assert!(red <= amber);
        prop_assert!(amber <= green);
    }

    #[test]
    fn disabled_gate_keeps_everything(candidates in prop::collection::vec(arb_candidate(), 0..16), state in arb_state()) {
        let gate = StateGate::new(GatingConfig { state_gating_enabled: false, enforce_heat_safety: true });
        prop_assert_eq!(gate.filter(&candidates, state).len(), candidates.len());
    }
}

// ============================================================================
// Concrete scenarios
// ============================================================================

#[test]
fn allowed_family_sets_are_nested() {
    let red = allowed_families_for_arousal(ArousalState::Red);
    let amber = allowed_families_for_arousal(ArousalState::Amber);
    let green = allowed_families_for_arousal(ArousalState::Green);
    assert!(red.is_subset(&amber));
    assert!(amber.is_subset(&green));
}

#[test]
fn literal_safety_scenarios() {
    assert!(is_heat_level_safe(HeatLevel::High, ArousalState::Red));
    assert!(!is_heat_level_safe(HeatLevel::Low, ArousalState::Red));
    assert!(is_heat_level_safe(HeatLevel::Low, ArousalState::Green));

    assert_eq!(compute_heat_level(Family::GripScan, None), HeatLevel::High);
    assert_eq!(compute_heat_level(Family::ParadoxKey, None), HeatLevel::Low);
    assert_eq!(Schema::Shame.heat_modifier(), 1);
}

#[test]
fn release_prompt_with_shame_is_safe_at_red() {
    let heat = resolve_heat_level("release_prompt", Some("shame")).level;
    assert_eq!(heat, HeatLevel::High);
    assert!(is_heat_level_safe(heat, "red".parse().unwrap()));
}
