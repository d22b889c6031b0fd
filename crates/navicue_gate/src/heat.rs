//! Heat computation: family baseline adjusted by a schema modifier.
//!
//! Two entry points:
//! - [`compute_heat_level`]: typed, total, exhaustive.
//! - [`resolve_heat_level`]: string keys straight from content data. Unknown
//!   keys fall back to a medium baseline / zero modifier instead of failing,
//!   and every fallback is reported in the returned [`HeatResolution`] and
//!   logged on target `navicue::heat`.

use navicue_core::tables::{baseline_heat, schema_heat_modifier, UNMAPPED_FAMILY_HEAT, UNMAPPED_SCHEMA_MODIFIER};
use navicue_core::{Family, HeatLevel, Schema};
use serde::Serialize;

/// Heat level of a (family, schema) pair: `clamp(baseline + modifier, low, high)`.
pub fn compute_heat_level(family: Family, schema: Option<Schema>) -> HeatLevel {
    let base = baseline_heat(family);
    match schema {
        None => base,
        Some(schema) => apply_modifier(base, schema_heat_modifier(schema)),
    }
}

fn apply_modifier(base: HeatLevel, modifier: i8) -> HeatLevel {
    HeatLevel::from_clamped_ordinal(i32::from(base.ordinal()) + i32::from(modifier))
}

/// Outcome of a string-keyed heat lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeatResolution {
    pub level: HeatLevel,
    /// Parsed family, `None` if the key was unmapped.
    pub family: Option<Family>,
    /// Parsed schema, `None` if absent or unmapped.
    pub schema: Option<Schema>,
    pub family_defaulted: bool,
    pub schema_defaulted: bool,
}

impl HeatResolution {
    /// True if any table lookup fell back to its default.
    pub fn is_defaulted(&self) -> bool {
        self.family_defaulted || self.schema_defaulted
    }
}

/// String-keyed heat computation. Never fails.
///
/// An empty or whitespace-only schema key counts as "no schema".
pub fn resolve_heat_level(family_key: &str, schema_key: Option<&str>) -> HeatResolution {
    let family = match family_key.parse::<Family>() {
        Ok(family) => Some(family),
        Err(e) => {
            tracing::warn!(
                target: "navicue::heat",
                family = family_key,
                "{}; assuming {} baseline",
                e,
                UNMAPPED_FAMILY_HEAT
            );
            None
        }
    };
    let base = family.map_or(UNMAPPED_FAMILY_HEAT, baseline_heat);

    let schema_key = schema_key.map(str::trim).filter(|k| !k.is_empty());
    let Some(schema_key) = schema_key else {
        return HeatResolution {
            level: base,
            family,
            schema: None,
            family_defaulted: family.is_none(),
            schema_defaulted: false,
        };
    };

    let schema = match schema_key.parse::<Schema>() {
        Ok(schema) => Some(schema),
        Err(e) => {
            tracing::warn!(
                target: "navicue::heat",
                schema = schema_key,
                "{}; assuming modifier {}",
                e,
                UNMAPPED_SCHEMA_MODIFIER
            );
            None
        }
    };
    let modifier = schema.map_or(UNMAPPED_SCHEMA_MODIFIER, schema_heat_modifier);

    HeatResolution {
        level: apply_modifier(base, modifier),
        family,
        schema,
        family_defaulted: family.is_none(),
        schema_defaulted: schema.is_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_schema_returns_baseline() {
        for family in Family::ALL {
            assert_eq!(compute_heat_level(family, None), baseline_heat(family));
        }
    }

    #[test]
    fn test_release_prompt_with_shame_is_high() {
        assert_eq!(
            compute_heat_level(Family::ReleasePrompt, Some(Schema::Shame)),
            HeatLevel::High
        );
    }

    #[test]
    fn test_clamps_at_both_ends() {
        // high + 1 stays high
        assert_eq!(compute_heat_level(Family::GripScan, Some(Schema::Shame)), HeatLevel::High);
        // low - 1 stays low
        assert_eq!(
            compute_heat_level(Family::ParadoxKey, Some(Schema::BinaryThinking)),
            HeatLevel::Low
        );
    }

    #[test]
    fn test_negative_modifier_lowers() {
        assert_eq!(
            compute_heat_level(Family::StoryDrop, Some(Schema::Fusion)),
            HeatLevel::Low
        );
    }

    #[test]
    fn test_resolve_known_keys() {
        let r = resolve_heat_level("release_prompt", Some("shame"));
        assert_eq!(r.level, HeatLevel::High);
        assert_eq!(r.family, Some(Family::ReleasePrompt));
        assert_eq!(r.schema, Some(Schema::Shame));
        assert!(!r.is_defaulted());
    }

    #[test]
    fn test_resolve_unknown_family_defaults_medium() {
        let r = resolve_heat_level("statement_mirror", None);
        assert_eq!(r.level, HeatLevel::Medium);
        assert!(r.family_defaulted);
        assert!(!r.schema_defaulted);
    }

    #[test]
    fn test_resolve_unknown_family_still_applies_schema() {
        let r = resolve_heat_level("curveball", Some("shame"));
        assert_eq!(r.level, HeatLevel::High);
        assert!(r.family_defaulted);
        assert!(!r.schema_defaulted);
    }

    #[test]
    fn test_resolve_unknown_schema_defaults_zero() {
        let r = resolve_heat_level("paradox_key", Some("loneliness"));
        assert_eq!(r.level, HeatLevel::Low);
        assert!(r.schema_defaulted);
        assert_eq!(r.schema, None);
    }

    #[test]
    fn test_resolve_blank_schema_is_no_schema() {
        let r = resolve_heat_level("story_drop", Some("  "));
        assert_eq!(r.level, HeatLevel::Medium);
        assert!(!r.is_defaulted());
    }

    #[test]
    fn test_resolve_accepts_snake_case_schema() {
        let r = resolve_heat_level("release_prompt", Some("binary_thinking"));
        assert_eq!(r.schema, Some(Schema::BinaryThinking));
        assert_eq!(r.level, HeatLevel::Low);
    }
}
