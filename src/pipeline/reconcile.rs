// src/pipeline/reconcile.rs
use std::collections::HashMap;

use tracing::debug;

use crate::config::ExtractConfig;
use crate::extractors::Candidate;

/// One reconciled skill: a unique normalized name and its highest observed
/// endorsement count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillRecord {
    pub name: String,
    pub count: u32,
}

/// Deduplicates candidates by normalized name, keeping the maximum count
/// per name. Counts only grow over successive observations of the same
/// skill, so under conflict the higher reading wins. Records come out in
/// first-observation order; placeholder and empty names are dropped.
pub fn reconcile(candidates: &[Candidate], config: &ExtractConfig) -> Vec<SkillRecord> {
    let mut records: Vec<SkillRecord> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for candidate in candidates {
        match positions.get(&candidate.name) {
            Some(&pos) => {
                if candidate.count > records[pos].count {
                    debug!(
                        "Raising count for '{}': {} -> {}",
                        candidate.name, records[pos].count, candidate.count
                    );
                    records[pos].count = candidate.count;
                }
            }
            None => {
                positions.insert(candidate.name.clone(), records.len());
                records.push(SkillRecord {
                    name: candidate.name.clone(),
                    count: candidate.count,
                });
            }
        }
    }

    records.retain(|record| !record.name.is_empty() && !config.is_placeholder(&record.name));
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reconcile_default(candidates: &[Candidate]) -> Vec<SkillRecord> {
        reconcile(candidates, &ExtractConfig::default())
    }

    #[test]
    fn test_keeps_the_maximum_count_per_name() {
        let candidates = vec![
            Candidate::new("Go", 3),
            Candidate::new("Go", 7),
            Candidate::new("Go", 2),
        ];
        let records = reconcile_default(&candidates);
        assert_eq!(records, vec![SkillRecord { name: "Go".to_string(), count: 7 }]);
    }

    #[test]
    fn test_drops_placeholder_and_empty_names() {
        let candidates = vec![
            Candidate::new("undefined", 5),
            Candidate::new("null", 2),
            Candidate::new("", 9),
            Candidate::new("Rust", 1),
        ];
        let records = reconcile_default(&candidates);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Rust");
    }

    #[test]
    fn test_preserves_first_observation_order() {
        let candidates = vec![
            Candidate::new("Zig", 1),
            Candidate::new("Ada", 4),
            Candidate::new("Zig", 9),
            Candidate::new("Nim", 2),
        ];
        let names: Vec<_> = reconcile_default(&candidates)
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["Zig", "Ada", "Nim"]);
    }

    #[test]
    fn test_doubled_raw_names_collapse_to_one_record() {
        let candidates = vec![Candidate::new("RustRust", 3), Candidate::new("Rust", 5)];
        let records = reconcile_default(&candidates);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Rust");
        assert_eq!(records[0].count, 5);
    }
}
