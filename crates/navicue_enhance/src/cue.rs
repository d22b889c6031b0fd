use navicue_gate::GateCandidate;
use serde::{Deserialize, Serialize};

/// A NaviCue as it comes out of a content batch. Only the first four fields
/// are guaranteed; which of the rest are present depends on the batch.
///
/// Keys stay as strings: content data uses families and schemas outside the
/// typed taxonomy, and they must survive enhancement untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawNaviCue {
    pub id: String,
    pub text_line: String,
    pub response_type: String,
    pub family: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kbe_target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub council_lens: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub way_process: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heat_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pillar_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CueStatus {
    #[default]
    Active,
    Draft,
    Archived,
}

/// A fully tagged NaviCue, ready for orchestration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancedNaviCue {
    pub id: String,
    pub text_line: String,
    pub response_type: String,
    pub family: String,

    pub schema: String,
    pub kbe_target: String,
    pub heat_level: String,
    pub pillar_id: String,
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub council_lens: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub way_process: Option<String>,

    pub batch_number: u32,
    pub batch_name: String,
    #[serde(default)]
    pub status: CueStatus,
}

impl GateCandidate for EnhancedNaviCue {
    fn family_key(&self) -> &str {
        &self.family
    }

    fn heat_level_key(&self) -> Option<&str> {
        Some(&self.heat_level)
    }
}

impl GateCandidate for RawNaviCue {
    fn family_key(&self) -> &str {
        &self.family
    }

    fn heat_level_key(&self) -> Option<&str> {
        self.heat_level.as_deref()
    }
}

/// `Some(trimmed)` if the field is present and non-blank.
pub(crate) fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
