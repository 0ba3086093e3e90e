// src/pipeline/session.rs
use tracing::info;

use crate::pipeline::rank::rank;
use crate::pipeline::reconcile::SkillRecord;
use crate::utils::error::OverrideError;

/// Handle over one extraction's reconciled records. Holds them in
/// first-observation order so positional overrides stay stable, and hands
/// out fresh rankings on demand.
#[derive(Debug)]
pub struct SkillSession {
    records: Vec<SkillRecord>,
}

impl SkillSession {
    pub fn new(records: Vec<SkillRecord>) -> Self {
        Self { records }
    }

    /// The reconciled records, in first-observation order.
    pub fn records(&self) -> &[SkillRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Manually corrects the count of the record at `index` (zero-based,
    /// pre-sort position). Out-of-range indices leave the session untouched.
    pub fn set_count(&mut self, index: usize, count: u32) -> Result<(), OverrideError> {
        let len = self.records.len();
        let record = self
            .records
            .get_mut(index)
            .ok_or(OverrideError::IndexOutOfRange { index, len })?;

        record.count = count;
        info!("Updated '{}' to {} endorsements", record.name, count);
        Ok(())
    }

    /// Computes the current ranking without disturbing record order.
    pub fn ranking(&self) -> Vec<SkillRecord> {
        rank(&self.records)
    }
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

    fn session() -> SkillSession {
        SkillSession::new(vec![
            record("Rust", 3),
            record("Go", 7),
            record("Python", 5),
            record("SQL", 2),
            record("Docker", 4),
        ])
    }

    #[test]
    fn test_set_count_updates_only_the_target_record() {
        let mut session = session();
        session.set_count(2, 10).unwrap();

        let counts: Vec<u32> = session.records().iter().map(|r| r.count).collect();
        assert_eq!(counts, vec![3, 7, 10, 2, 4]);
    }

    #[test]
    fn test_ranking_reflects_overrides() {
        let mut session = session();
        session.set_count(2, 10).unwrap();

        let ranked = session.ranking();
        assert_eq!(ranked[0].name, "Python");
        assert_eq!(ranked[0].count, 10);
        // The pre-sort order is still intact.
        assert_eq!(session.records()[2].name, "Python");
    }

    #[test]
    fn test_out_of_range_index_is_rejected_without_changes() {
        let mut session = session();
        let err = session.set_count(10, 1).unwrap_err();
        assert_eq!(err, OverrideError::IndexOutOfRange { index: 10, len: 5 });

        let counts: Vec<u32> = session.records().iter().map(|r| r.count).collect();
        assert_eq!(counts, vec![3, 7, 5, 2, 4]);
    }
}
