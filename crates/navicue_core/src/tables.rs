//! Static rule tables.
//!
//! Every table is an exhaustive `match` over a closed enum, so adding a new
//! `Family`, `Schema` or `ArousalState` without a table entry fails to
//! compile. Nothing here is mutable or loaded at runtime.

use crate::taxonomy::{ArousalState, Family, HeatLevel, KbeLayer, Pillar, Schema};

/// Baseline heat assumed for a family key outside the [`Family`] set.
pub const UNMAPPED_FAMILY_HEAT: HeatLevel = HeatLevel::Medium;

/// Modifier assumed for a schema key outside the [`Schema`] set.
pub const UNMAPPED_SCHEMA_MODIFIER: i8 = 0;

/// KBE target assumed for a family key outside the [`Family`] set.
pub const UNMAPPED_FAMILY_KBE: KbeLayer = KbeLayer::Knowing;

// ============================================================================
// Heat
// ============================================================================

/// Baseline heat level of a family.
pub const fn baseline_heat(family: Family) -> HeatLevel {
    match family {
        // Body-first, tolerable under activation
        Family::GripScan => HeatLevel::High,
        Family::AllowingGate => HeatLevel::High,
        Family::ProofStamp => HeatLevel::High,
        // Needs some settling
        Family::ReleasePrompt => HeatLevel::Medium,
        Family::StoryDrop => HeatLevel::Medium,
        // Calm only
        Family::ParadoxKey => HeatLevel::Low,
        Family::InventorySpark => HeatLevel::Low,
        Family::SanghaPing => HeatLevel::Low,
    }
}

/// Heat adjustment contributed by a schema, always in `{-1, 0, +1}`.
pub const fn schema_heat_modifier(schema: Schema) -> i8 {
    match schema {
        Schema::Shame
        | Schema::Defectiveness
        | Schema::DefectivenessShame
        | Schema::Abandonment
        | Schema::AbandonmentInstability
        | Schema::Vulnerability
        | Schema::VulnerabilityHarm
        | Schema::MistrustAbuse
        | Schema::Catastrophizing
        | Schema::SafetySeeking => 1,

        Schema::BinaryThinking
        | Schema::Fusion
        | Schema::IdentityFusion
        | Schema::EnmeshmentUndevelopedSelf
        | Schema::EntitlementGrandiosity
        | Schema::Comparison
        | Schema::Perfectionism
        | Schema::UnrelentingStandards => -1,

        Schema::EmotionalDeprivation
        | Schema::SocialIsolation
        | Schema::DependenceIncompetence
        | Schema::Failure
        | Schema::InsufficientSelfControl
        | Schema::Subjugation
        | Schema::SelfSacrifice
        | Schema::ApprovalSeeking
        | Schema::NegativityPessimism
        | Schema::EmotionalInhibition
        | Schema::Punitiveness
        | Schema::Control
        | Schema::Victimhood
        | Schema::EmotionalSuppression
        | Schema::PeoplePleasing
        | Schema::Scarcity
        | Schema::Trust => 0,
    }
}

// ============================================================================
// State gating
// ============================================================================

const RED_FAMILIES: &[Family] = &[Family::GripScan, Family::AllowingGate, Family::ProofStamp];

const AMBER_FAMILIES: &[Family] = &[
    Family::GripScan,
    Family::AllowingGate,
    Family::ReleasePrompt,
    Family::StoryDrop,
    Family::ProofStamp,
];

const GREEN_FAMILIES: &[Family] = &[
    Family::GripScan,
    Family::AllowingGate,
    Family::ReleasePrompt,
    Family::StoryDrop,
    Family::ParadoxKey,
    Family::InventorySpark,
    Family::SanghaPing,
    Family::ProofStamp,
];

/// Families that may be served at a given arousal state.
///
/// Nested: red ⊆ amber ⊆ green. Never paradox or inventory work when activated.
pub const fn allowed_families(state: ArousalState) -> &'static [Family] {
    match state {
        ArousalState::Red => RED_FAMILIES,
        ArousalState::Amber => AMBER_FAMILIES,
        ArousalState::Green => GREEN_FAMILIES,
    }
}

// ============================================================================
// Pillars
// ============================================================================

/// Reporting pillar for a schema. Many-to-one and total over [`Schema`].
pub const fn pillar_for_schema(schema: Schema) -> Pillar {
    match schema {
        // PAUSE + GROUND
        Schema::Control
        | Schema::Catastrophizing
        | Schema::Vulnerability
        | Schema::VulnerabilityHarm
        | Schema::InsufficientSelfControl
        | Schema::SafetySeeking
        | Schema::NegativityPessimism => Pillar::P01,

        // MEET YOUR NEEDS
        Schema::Shame
        | Schema::Defectiveness
        | Schema::DefectivenessShame
        | Schema::EmotionalDeprivation
        | Schema::SelfSacrifice
        | Schema::PeoplePleasing
        | Schema::Scarcity => Pillar::P02,

        // MOVE YOUR BODY
        Schema::EmotionalSuppression
        | Schema::EmotionalInhibition
        | Schema::DependenceIncompetence => Pillar::P03,

        // CONNECT
        Schema::Abandonment
        | Schema::AbandonmentInstability
        | Schema::MistrustAbuse
        | Schema::Trust
        | Schema::SocialIsolation
        | Schema::ApprovalSeeking => Pillar::P04,

        // SHOW YOURSELF
        Schema::Perfectionism
        | Schema::UnrelentingStandards
        | Schema::Subjugation
        | Schema::Failure
        | Schema::Comparison
        | Schema::Punitiveness => Pillar::P05,

        // FIND YOUR PURPOSE
        Schema::IdentityFusion
        | Schema::Fusion
        | Schema::EnmeshmentUndevelopedSelf
        | Schema::Victimhood
        | Schema::EntitlementGrandiosity
        | Schema::BinaryThinking => Pillar::P06,
    }
}

// ============================================================================
// Family defaults (metadata enhancement)
// ============================================================================

/// Schema a family most often works on, used when content carries no schema
/// and keyword inference finds nothing.
pub const fn default_schema_for_family(family: Family) -> Schema {
    match family {
        Family::GripScan => Schema::Fusion,
        Family::AllowingGate => Schema::Control,
        Family::ReleasePrompt => Schema::Control,
        Family::StoryDrop => Schema::Fusion,
        Family::ParadoxKey => Schema::BinaryThinking,
        Family::ProofStamp => Schema::Defectiveness,
        Family::InventorySpark => Schema::Shame,
        Family::SanghaPing => Schema::Abandonment,
    }
}

/// KBE layer a family targets by default.
pub const fn default_kbe_for_family(family: Family) -> KbeLayer {
    match family {
        Family::GripScan => KbeLayer::Embodying,
        Family::AllowingGate => KbeLayer::Embodying,
        Family::ReleasePrompt => KbeLayer::Believing,
        Family::StoryDrop => KbeLayer::Believing,
        Family::ParadoxKey => KbeLayer::Believing,
        Family::InventorySpark => KbeLayer::Knowing,
        Family::SanghaPing => KbeLayer::Embodying,
        Family::ProofStamp => KbeLayer::Embodying,
    }
}

impl Family {
    pub const fn baseline_heat(self) -> HeatLevel {
        baseline_heat(self)
    }
}

impl Schema {
    pub const fn heat_modifier(self) -> i8 {
        schema_heat_modifier(self)
    }

    pub const fn pillar(self) -> Pillar {
        pillar_for_schema(self)
    }
}

// ============================================================================
// Tests
// ============================================================================
