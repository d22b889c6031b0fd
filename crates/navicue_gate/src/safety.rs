use navicue_core::tables::allowed_families;
use navicue_core::{ArousalState, Family, HeatLevel};
use std::collections::BTreeSet;

/// Is content of this heat safe to show a user in this state?
///
/// High heat is safe at every state; low heat only at green.
pub const fn is_heat_level_safe(item_heat: HeatLevel, user_state: ArousalState) -> bool {
    item_heat.ordinal() >= user_state.ordinal()
}

/// Families that may be served at `state`, as an ordered set.
pub fn allowed_families_for_arousal(state: ArousalState) -> BTreeSet<Family> {
    allowed_families(state).iter().copied().collect()
}

pub fn is_family_allowed(family: Family, state: ArousalState) -> bool {
    allowed_families(state).contains(&family)
}
