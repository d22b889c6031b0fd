//! Schema inference for content that arrives without a schema tag.
//!
//! Priority:
//! 1. explicit keyword match in the text line (ordered, first match wins)
//! 2. the family's default schema
//! 3. the configured fallback

use navicue_core::tables::default_schema_for_family;
use navicue_core::{Family, Schema};
use serde::Serialize;

/// Keyword patterns per schema. Order matters: earlier rows win.
const SCHEMA_PATTERNS: &[(Schema, &[&str])] = &[
    (
        Schema::Shame,
        &[
            "shame", "unworthy", "not good enough", "defective", "flawed", "worthless", "inadequate",
            "broken", "damaged",
        ],
    ),
    (
        Schema::Abandonment,
        &["abandon", "alone", "left", "rejected", "isolated", "nobody cares", "left behind", "forgotten"],
    ),
    (
        Schema::Control,
        &["control", "helpless", "powerless", "out of control", "can't handle", "overwhelmed", "can't manage"],
    ),
    (
        Schema::Perfectionism,
        &["perfect", "mistake", "fail", "not enough", "should", "have to", "must", "always", "never good enough"],
    ),
    (
        Schema::Vulnerability,
        &["vulnerable", "hurt", "exposed", "unsafe", "danger", "protect", "guard", "threat"],
    ),
    (
        Schema::ApprovalSeeking,
        &["approval", "please", "validate", "accept me", "what will they think", "need them to"],
    ),
    (
        Schema::Failure,
        &["failure", "failing", "loser", "didn't make it", "not successful", "gave up"],
    ),
    (Schema::Trust, &["trust", "safe", "reliable", "depend", "count on"]),
    (
        Schema::EmotionalDeprivation,
        &["empty", "hollow", "nothing", "numb", "void", "no one understands", "not seen"],
    ),
    (
        Schema::Defectiveness,
        &["something wrong with me", "defective", "fundamentally broken", "can't be fixed", "damaged goods"],
    ),
    (
        Schema::Subjugation,
        &["give in", "sacrifice", "put others first", "can't say no", "lose myself", "disappear"],
    ),
    (
        Schema::BinaryThinking,
        &["always", "never", "all or nothing", "black and white", "either", "must be", "can't be both"],
    ),
    (
        Schema::Fusion,
        &["i am", "this is me", "defines me", "who i am", "my identity", "this thought", "this story"],
    ),
];

/// How the inferred schema was arrived at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InferenceSource {
    Keyword,
    FamilyDefault,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SchemaInference {
    pub schema: Schema,
    pub source: InferenceSource,
}

/// First schema whose keyword list hits the (case-folded) text.
pub fn match_keywords(text_line: &str) -> Option<Schema> {
    let lower = text_line.to_lowercase();
    SCHEMA_PATTERNS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(schema, _)| *schema)
}

pub fn infer_schema(text_line: &str, family: Option<Family>, fallback: Schema) -> SchemaInference {
    if let Some(schema) = match_keywords(text_line) {
        return SchemaInference {
            schema,
            source: InferenceSource::Keyword,
        };
    }
    match family {
        Some(family) => SchemaInference {
            schema: default_schema_for_family(family),
            source: InferenceSource::FamilyDefault,
        },
        None => SchemaInference {
            schema: fallback,
            source: InferenceSource::Fallback,
        },
    }
}
