use crate::cue::{present, EnhancedNaviCue};
use serde::Serialize;
use std::collections::BTreeMap;

/// Distribution of an enhanced batch across each taxonomy axis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchStatistics {
    pub total: usize,
    pub by_family: BTreeMap<String, usize>,
    pub by_schema: BTreeMap<String, usize>,
    pub by_kbe: BTreeMap<String, usize>,
    pub by_heat: BTreeMap<String, usize>,
    pub by_pillar: BTreeMap<String, usize>,
    pub by_council: BTreeMap<String, usize>,
    pub by_way: BTreeMap<String, usize>,
}

fn bump(map: &mut BTreeMap<String, usize>, key: &str) {
    *map.entry(key.to_string()).or_default() += 1;
}

pub fn batch_statistics(cues: &[EnhancedNaviCue]) -> BatchStatistics {
    let mut stats = BatchStatistics {
        total: cues.len(),
        ..Default::default()
    };

    for cue in cues {
        bump(&mut stats.by_family, &cue.family);
        bump(&mut stats.by_schema, &cue.schema);
        bump(&mut stats.by_kbe, &cue.kbe_target);
        bump(&mut stats.by_heat, &cue.heat_level);
        bump(&mut stats.by_pillar, &cue.pillar_id);
        if let Some(lens) = present(&cue.council_lens) {
            bump(&mut stats.by_council, lens);
        }
        if let Some(way) = present(&cue.way_process) {
            bump(&mut stats.by_way, way);
        }
    }

    stats
}
