//! Closed taxonomies for NaviCue content and user state.
//!
//! Content data arrives with open string keys (`"grip_scan"`, `"shame"`,
//! `"P-02"`). These enums are the typed view of those keys: parsing is strict
//! and returns a [`TaxonomyError`], while the lenient, defaulting lookups live
//! in `navicue_gate`.
//!
//! Ordinal scales:
//! - `HeatLevel`:    low = 0, medium = 1, high = 2
//! - `ArousalState`: green = 0, amber = 1, red = 2
//!
//! The two scales are deliberately aligned so that the safety predicate is a
//! single ordinal comparison.

use crate::error::TaxonomyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowercase, trim, and unify separators so `"Binary_Thinking"` and
/// `"binary-thinking"` resolve to the same key.
fn normalize_key(raw: &str, separator: char) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            '-' | '_' | ' ' => separator,
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

// ============================================================================
// HeatLevel
// ============================================================================

/// How activating or demanding a piece of content is.
///
/// High-heat content is engineered to be tolerable at high arousal (grounding,
/// interoception); low-heat content needs a calm, reflective user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatLevel {
    Low,
    Medium,
    High,
}

impl HeatLevel {
    pub const ALL: [HeatLevel; 3] = [HeatLevel::Low, HeatLevel::Medium, HeatLevel::High];

    pub const fn ordinal(self) -> u8 {
        match self {
            HeatLevel::Low => 0,
            HeatLevel::Medium => 1,
            HeatLevel::High => 2,
        }
    }

    /// Convert a (possibly out-of-range) ordinal back into a level,
    /// clamping into `[low, high]`.
    pub const fn from_clamped_ordinal(ordinal: i32) -> Self {
        if ordinal <= 0 {
            HeatLevel::Low
        } else if ordinal == 1 {
            HeatLevel::Medium
        } else {
            HeatLevel::High
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            HeatLevel::Low => "low",
            HeatLevel::Medium => "medium",
            HeatLevel::High => "high",
        }
    }
}

impl fmt::Display for HeatLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeatLevel {
    type Err = TaxonomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(HeatLevel::Low),
            "medium" => Ok(HeatLevel::Medium),
            "high" => Ok(HeatLevel::High),
            _ => Err(TaxonomyError::UnknownHeatLevel(s.to_string())),
        }
    }
}

// ============================================================================
// ArousalState
// ============================================================================

/// Coarse traffic-light label for a user's current activation.
///
/// Produced upstream (self-report, resistance scores); this crate only
/// consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArousalState {
    Green,
    Amber,
    Red,
}

impl ArousalState {
    pub const ALL: [ArousalState; 3] = [ArousalState::Green, ArousalState::Amber, ArousalState::Red];

    pub const fn ordinal(self) -> u8 {
        match self {
            ArousalState::Green => 0,
            ArousalState::Amber => 1,
            ArousalState::Red => 2,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ArousalState::Green => "green",
            ArousalState::Amber => "amber",
            ArousalState::Red => "red",
        }
    }
}

impl fmt::Display for ArousalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArousalState {
    type Err = TaxonomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "green" => Ok(ArousalState::Green),
            "amber" => Ok(ArousalState::Amber),
            "red" => Ok(ArousalState::Red),
            _ => Err(TaxonomyError::UnknownArousalState(s.to_string())),
        }
    }
}

// ============================================================================
// Family
// ============================================================================

/// Process-aligned NaviCue mechanism families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Family {
    /// Interoception + threat detection
    GripScan,
    /// Willingness / acceptance
    AllowingGate,
    /// Surrender the demand
    ReleasePrompt,
    /// Decentering / defusion
    StoryDrop,
    /// Cognitive flexibility (calm only)
    ParadoxKey,
    /// Truth + ownership + recommitment
    InventorySpark,
    /// Co-regulation + belonging
    SanghaPing,
    /// Reinforcement evidence
    ProofStamp,
}

impl Family {
    pub const ALL: [Family; 8] = [
        Family::GripScan,
        Family::AllowingGate,
        Family::ReleasePrompt,
        Family::StoryDrop,
        Family::ParadoxKey,
        Family::InventorySpark,
        Family::SanghaPing,
        Family::ProofStamp,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Family::GripScan => "grip_scan",
            Family::AllowingGate => "allowing_gate",
            Family::ReleasePrompt => "release_prompt",
            Family::StoryDrop => "story_drop",
            Family::ParadoxKey => "paradox_key",
            Family::InventorySpark => "inventory_spark",
            Family::SanghaPing => "sangha_ping",
            Family::ProofStamp => "proof_stamp",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Family {
    type Err = TaxonomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s, '_');
        Family::ALL
            .into_iter()
            .find(|family| family.as_str() == key)
            .ok_or_else(|| TaxonomyError::UnknownFamily(s.to_string()))
    }
}

impl From<Family> for &'static str {
    fn from(family: Family) -> Self {
        family.as_str()
    }
}

impl TryFrom<String> for Family {
    type Error = TaxonomyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ============================================================================
// Schema
// ============================================================================

/// Clinical schema constructs a NaviCue may target.
///
/// Three vocabularies coexist in content data: the 18-schema Schema Therapy
/// taxonomy, the 12 arsenal schemas, and the short inference keys produced by
/// keyword tagging. All of them are first-class here. Canonical keys are
/// kebab-case; snake_case is accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Schema {
    // Disconnection & rejection
    DefectivenessShame,
    AbandonmentInstability,
    MistrustAbuse,
    EmotionalDeprivation,
    SocialIsolation,
    // Impaired autonomy & performance
    DependenceIncompetence,
    VulnerabilityHarm,
    EnmeshmentUndevelopedSelf,
    Failure,
    // Impaired limits
    EntitlementGrandiosity,
    InsufficientSelfControl,
    // Other-directedness
    Subjugation,
    SelfSacrifice,
    ApprovalSeeking,
    // Overvigilance & inhibition
    NegativityPessimism,
    EmotionalInhibition,
    UnrelentingStandards,
    Punitiveness,

    // Arsenal
    Shame,
    Control,
    Abandonment,
    Perfectionism,
    Victimhood,
    EmotionalSuppression,
    PeoplePleasing,
    Scarcity,
    Comparison,
    Catastrophizing,
    IdentityFusion,
    SafetySeeking,

    // Inference
    Vulnerability,
    Trust,
    Defectiveness,
    BinaryThinking,
    Fusion,
}

impl Schema {
    pub const ALL: [Schema; 35] = [
        Schema::DefectivenessShame,
        Schema::AbandonmentInstability,
        Schema::MistrustAbuse,
        Schema::EmotionalDeprivation,
        Schema::SocialIsolation,
        Schema::DependenceIncompetence,
        Schema::VulnerabilityHarm,
        Schema::EnmeshmentUndevelopedSelf,
        Schema::Failure,
        Schema::EntitlementGrandiosity,
        Schema::InsufficientSelfControl,
        Schema::Subjugation,
        Schema::SelfSacrifice,
        Schema::ApprovalSeeking,
        Schema::NegativityPessimism,
        Schema::EmotionalInhibition,
        Schema::UnrelentingStandards,
        Schema::Punitiveness,
        Schema::Shame,
        Schema::Control,
        Schema::Abandonment,
        Schema::Perfectionism,
        Schema::Victimhood,
        Schema::EmotionalSuppression,
        Schema::PeoplePleasing,
        Schema::Scarcity,
        Schema::Comparison,
        Schema::Catastrophizing,
        Schema::IdentityFusion,
        Schema::SafetySeeking,
        Schema::Vulnerability,
        Schema::Trust,
        Schema::Defectiveness,
        Schema::BinaryThinking,
        Schema::Fusion,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Schema::DefectivenessShame => "defectiveness-shame",
            Schema::AbandonmentInstability => "abandonment-instability",
            Schema::MistrustAbuse => "mistrust-abuse",
            Schema::EmotionalDeprivation => "emotional-deprivation",
            Schema::SocialIsolation => "social-isolation",
            Schema::DependenceIncompetence => "dependence-incompetence",
            Schema::VulnerabilityHarm => "vulnerability-harm",
            Schema::EnmeshmentUndevelopedSelf => "enmeshment-undeveloped-self",
            Schema::Failure => "failure",
            Schema::EntitlementGrandiosity => "entitlement-grandiosity",
            Schema::InsufficientSelfControl => "insufficient-self-control",
            Schema::Subjugation => "subjugation",
            Schema::SelfSacrifice => "self-sacrifice",
            Schema::ApprovalSeeking => "approval-seeking",
            Schema::NegativityPessimism => "negativity-pessimism",
            Schema::EmotionalInhibition => "emotional-inhibition",
            Schema::UnrelentingStandards => "unrelenting-standards",
            Schema::Punitiveness => "punitiveness",
            Schema::Shame => "shame",
            Schema::Control => "control",
            Schema::Abandonment => "abandonment",
            Schema::Perfectionism => "perfectionism",
            Schema::Victimhood => "victimhood",
            Schema::EmotionalSuppression => "emotional-suppression",
            Schema::PeoplePleasing => "people-pleasing",
            Schema::Scarcity => "scarcity",
            Schema::Comparison => "comparison",
            Schema::Catastrophizing => "catastrophizing",
            Schema::IdentityFusion => "identity-fusion",
            Schema::SafetySeeking => "safety-seeking",
            Schema::Vulnerability => "vulnerability",
            Schema::Trust => "trust",
            Schema::Defectiveness => "defectiveness",
            Schema::BinaryThinking => "binary-thinking",
            Schema::Fusion => "fusion",
        }
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Schema {
    type Err = TaxonomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s, '-');
        Schema::ALL
            .into_iter()
            .find(|schema| schema.as_str() == key)
            .ok_or_else(|| TaxonomyError::UnknownSchema(s.to_string()))
    }
}

impl From<Schema> for &'static str {
    fn from(schema: Schema) -> Self {
        schema.as_str()
    }
}

impl TryFrom<String> for Schema {
    type Error = TaxonomyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ============================================================================
// Pillar
// ============================================================================

/// The six recovery pillars. Reporting taxonomy only; never used for gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Pillar {
    P01,
    P02,
    P03,
    P04,
    P05,
    P06,
}

impl Pillar {
    pub const ALL: [Pillar; 6] = [
        Pillar::P01,
        Pillar::P02,
        Pillar::P03,
        Pillar::P04,
        Pillar::P05,
        Pillar::P06,
    ];

    /// Wire id, e.g. `"P-01"`.
    pub const fn id(self) -> &'static str {
        match self {
            Pillar::P01 => "P-01",
            Pillar::P02 => "P-02",
            Pillar::P03 => "P-03",
            Pillar::P04 => "P-04",
            Pillar::P05 => "P-05",
            Pillar::P06 => "P-06",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Pillar::P01 => "PAUSE + GROUND",
            Pillar::P02 => "MEET YOUR NEEDS",
            Pillar::P03 => "MOVE YOUR BODY",
            Pillar::P04 => "CONNECT",
            Pillar::P05 => "SHOW YOURSELF",
            Pillar::P06 => "FIND YOUR PURPOSE",
        }
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Pillar {
    type Err = TaxonomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_uppercase();
        Pillar::ALL
            .into_iter()
            .find(|pillar| pillar.id() == key)
            .ok_or_else(|| TaxonomyError::UnknownPillar(s.to_string()))
    }
}

impl From<Pillar> for &'static str {
    fn from(pillar: Pillar) -> Self {
        pillar.id()
    }
}

impl TryFrom<String> for Pillar {
    type Error = TaxonomyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ============================================================================
// KbeLayer
// ============================================================================

/// Know → Believe → Embody progression layer a NaviCue targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KbeLayer {
    Knowing,
    Believing,
    Embodying,
}

impl KbeLayer {
    pub const ALL: [KbeLayer; 3] = [KbeLayer::Knowing, KbeLayer::Believing, KbeLayer::Embodying];

    pub const fn as_str(self) -> &'static str {
        match self {
            KbeLayer::Knowing => "knowing",
            KbeLayer::Believing => "believing",
            KbeLayer::Embodying => "embodying",
        }
    }
}

impl fmt::Display for KbeLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KbeLayer {
    type Err = TaxonomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "knowing" => Ok(KbeLayer::Knowing),
            "believing" => Ok(KbeLayer::Believing),
            "embodying" => Ok(KbeLayer::Embodying),
            _ => Err(TaxonomyError::UnknownKbe(s.to_string())),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
