use thiserror::Error;

/// A string key that does not name any value of a closed taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxonomyError {
    #[error("unknown family key: '{0}'")]
    UnknownFamily(String),

    #[error("unknown schema key: '{0}'")]
    UnknownSchema(String),

    #[error("unknown heat level: '{0}' (expected high, medium or low)")]
    UnknownHeatLevel(String),

    #[error("unknown arousal state: '{0}' (expected red, amber or green)")]
    UnknownArousalState(String),

    #[error("unknown pillar id: '{0}' (expected P-01 .. P-06)")]
    UnknownPillar(String),

    #[error("unknown KBE layer: '{0}' (expected knowing, believing or embodying)")]
    UnknownKbe(String),
}
