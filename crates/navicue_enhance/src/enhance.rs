//! Raw → enhanced NaviCue transformation.
//!
//! Fills in whatever a batch left out, in order: schema, KBE target, heat
//! level, pillar, tags, batch metadata. Fields already present are kept
//! verbatim, even when they fall outside the typed taxonomy.

use crate::cue::{present, CueStatus, EnhancedNaviCue, RawNaviCue};
use crate::infer::{infer_schema, InferenceSource};
use navicue_core::config::EnhanceConfig;
use navicue_core::tables::{default_kbe_for_family, UNMAPPED_FAMILY_KBE};
use navicue_core::{Family, Schema};
use navicue_gate::resolve_heat_level;

/// Name of a content batch.
pub fn batch_name(batch_number: u32) -> &'static str {
    match batch_number {
        1 => "neuroscience_spirit_poetry",
        2 => "algorithmic_arsenal",
        3 => "council_of_six",
        _ => "unknown",
    }
}

#[derive(Debug, Clone, Default)]
pub struct Enhancer {
    config: EnhanceConfig,
}

impl Enhancer {
    pub fn new(config: EnhanceConfig) -> Self {
        Self { config }
    }

    pub fn enhance(&self, raw: RawNaviCue, batch_number: u32) -> EnhancedNaviCue {
        let family = raw.family.parse::<Family>().ok();

        let schema = match present(&raw.schema) {
            Some(schema) => schema.to_string(),
            None => {
                let inference = infer_schema(&raw.text_line, family, self.config.fallback_schema);
                if inference.source == InferenceSource::Fallback {
                    tracing::warn!(
                        target: "navicue::enhance",
                        id = %raw.id,
                        family = %raw.family,
                        "No keyword or family default; using fallback schema {}",
                        inference.schema
                    );
                } else {
                    tracing::debug!(
                        target: "navicue::enhance",
                        id = %raw.id,
                        source = ?inference.source,
                        "Inferred schema {}",
                        inference.schema
                    );
                }
                inference.schema.as_str().to_string()
            }
        };

        let kbe_target = match present(&raw.kbe_target) {
            Some(kbe) => kbe.to_string(),
            None => family
                .map_or(UNMAPPED_FAMILY_KBE, default_kbe_for_family)
                .as_str()
                .to_string(),
        };

        let heat_level = match present(&raw.heat_level) {
            Some(heat) => heat.to_string(),
            None => resolve_heat_level(&raw.family, Some(schema.as_str())).level.as_str().to_string(),
        };

        let pillar_id = match present(&raw.pillar_id) {
            Some(pillar) => pillar.to_string(),
            None => schema
                .parse::<Schema>()
                .map(Schema::pillar)
                .unwrap_or(self.config.fallback_pillar)
                .id()
                .to_string(),
        };

        let tags = generate_tags(&TagSource {
            family: &raw.family,
            schema: &schema,
            pillar_id: &pillar_id,
            kbe_target: &kbe_target,
            heat_level: &heat_level,
            council_lens: present(&raw.council_lens),
            way_process: present(&raw.way_process),
            existing: raw.tags.as_deref().unwrap_or_default(),
        });

        EnhancedNaviCue {
            id: raw.id,
            text_line: raw.text_line,
            response_type: raw.response_type,
            family: raw.family,
            schema,
            kbe_target,
            heat_level,
            pillar_id,
            tags,
            council_lens: raw.council_lens,
            way_process: raw.way_process,
            batch_number,
            batch_name: batch_name(batch_number).to_string(),
            status: CueStatus::Active,
        }
    }

    pub fn enhance_batch(&self, raws: Vec<RawNaviCue>, batch_number: u32) -> Vec<EnhancedNaviCue> {
        let count = raws.len();
        let enhanced: Vec<EnhancedNaviCue> = raws
            .into_iter()
            .map(|raw| self.enhance(raw, batch_number))
            .collect();
        tracing::info!(
            target: "navicue::enhance",
            batch = batch_number,
            name = batch_name(batch_number),
            count,
            "Batch enhanced"
        );
        enhanced
    }
}

struct TagSource<'a> {
    family: &'a str,
    schema: &'a str,
    pillar_id: &'a str,
    kbe_target: &'a str,
    heat_level: &'a str,
    council_lens: Option<&'a str>,
    way_process: Option<&'a str>,
    existing: &'a [String],
}

/// Metadata tags first, then any tags the batch already had. Blank tags are
/// dropped and duplicates keep their first position.
fn generate_tags(src: &TagSource<'_>) -> Vec<String> {
    let metadata = [
        Some(src.family),
        Some(src.schema),
        Some(src.pillar_id),
        Some(src.kbe_target),
        Some(src.heat_level),
        src.council_lens,
        src.way_process,
    ];

    let mut tags: Vec<String> = Vec::new();
    let candidates = metadata
        .into_iter()
        .flatten()
        .chain(src.existing.iter().map(String::as_str));
    for tag in candidates {
        let tag = tag.trim();
        if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}
