// src/pipeline/rank.rs
use crate::pipeline::reconcile::SkillRecord;

/// Returns the records sorted by count descending, breaking ties by name
/// ascending. The input order is left untouched so positional overrides
/// keep meaning after a ranking has been produced.
pub fn rank(records: &[SkillRecord]) -> Vec<SkillRecord> {
    let mut ranked = records.to_vec();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, count: u32) -> SkillRecord {
        SkillRecord {
            name: name.to_string(),
            count,
        }
    }

    #[test]
    fn test_sorts_by_count_descending_then_name_ascending() {
        let records = vec![record("Ada", 5), record("Zig", 5), record("Nim", 9)];
        let ranked = rank(&records);
        let names: Vec<_> = ranked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Nim", "Ada", "Zig"]);
    }

    #[test]
    fn test_tie_break_is_case_sensitive() {
        // Uppercase sorts before lowercase in byte order.
        let records = vec![record("ada", 5), record("Zig", 5)];
        let ranked = rank(&records);
        let names: Vec<_> = ranked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Zig", "ada"]);
    }

    #[test]
    fn test_leaves_the_input_untouched() {
        let records = vec![record("Ada", 1), record("Zig", 9)];
        let _ = rank(&records);
        assert_eq!(records[0].name, "Ada");
    }
}
