use crate::cue::EnhancedNaviCue;
use navicue_core::{HeatLevel, KbeLayer};
use serde::Serialize;

/// Outcome of checking one enhanced cue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Check that every field the orchestrator relies on is populated.
///
/// Heat and KBE must additionally be in their closed vocabularies; family,
/// schema and pillar are only required to be non-blank since content may
/// extend those sets.
pub fn validate_enhanced(cue: &EnhancedNaviCue) -> ValidationReport {
    let mut errors = Vec::new();

    let required = [
        ("id", cue.id.as_str()),
        ("text_line", cue.text_line.as_str()),
        ("response_type", cue.response_type.as_str()),
        ("family", cue.family.as_str()),
        ("schema", cue.schema.as_str()),
        ("kbe_target", cue.kbe_target.as_str()),
        ("heat_level", cue.heat_level.as_str()),
        ("pillar_id", cue.pillar_id.as_str()),
        ("batch_name", cue.batch_name.as_str()),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            errors.push(format!("Missing {field}"));
        }
    }

    // Canonical keys only; "HIGH" would be counted apart from "high" in stats.
    if !cue.heat_level.trim().is_empty() && !HeatLevel::ALL.iter().any(|h| h.as_str() == cue.heat_level) {
        errors.push(format!("Invalid heat_level: {}", cue.heat_level));
    }
    if !cue.kbe_target.trim().is_empty() && !KbeLayer::ALL.iter().any(|k| k.as_str() == cue.kbe_target) {
        errors.push(format!("Invalid kbe_target: {}", cue.kbe_target));
    }
    if cue.tags.is_empty() {
        errors.push("Missing tags".to_string());
    }
    if cue.batch_number == 0 {
        errors.push("Missing batch_number".to_string());
    }

    ValidationReport {
        valid: errors.is_empty(),
        errors,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CueErrors {
    pub id: String,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchValidation {
    pub total_count: usize,
    pub valid_count: usize,
    pub invalid_count: usize,
    pub errors: Vec<CueErrors>,
}

impl BatchValidation {
    pub fn is_valid(&self) -> bool {
        self.invalid_count == 0
    }
}

pub fn validate_batch(cues: &[EnhancedNaviCue]) -> BatchValidation {
    let mut result = BatchValidation {
        total_count: cues.len(),
        ..Default::default()
    };

    for cue in cues {
        let report = validate_enhanced(cue);
        if report.valid {
            result.valid_count += 1;
        } else {
            result.invalid_count += 1;
            result.errors.push(CueErrors {
                id: cue.id.clone(),
                errors: report.errors,
            });
        }
    }

    if result.invalid_count > 0 {
        tracing::warn!(
            target: "navicue::enhance",
            total = result.total_count,
            invalid = result.invalid_count,
            "Batch failed validation"
        );
    }
    result
}
