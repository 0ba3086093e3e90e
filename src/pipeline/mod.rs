// src/pipeline/mod.rs
pub mod rank;
pub mod reconcile;
pub mod select;
pub mod session;

pub use rank::rank;
pub use reconcile::{reconcile, SkillRecord};
pub use select::{merge_all, select_best, SelectionMode, Strategy, StrategyRun};
pub use session::SkillSession;

use tracing::info;

use crate::config::ExtractConfig;
use crate::document::DocumentSnapshot;
use crate::extractors::{extract_from_text, extract_structured, extract_tabular};

/// Runs every extraction strategy over the snapshot, combines their
/// candidates according to `mode`, and reconciles the result into a
/// session ready for overrides and ranking.
pub fn run(
    snapshot: &DocumentSnapshot,
    config: &ExtractConfig,
    mode: SelectionMode,
) -> SkillSession {
    let items = snapshot.skill_items();
    let tables = snapshot.tables();
    let text = snapshot.visible_text();

    let runs = vec![
        StrategyRun::new(Strategy::Structured, extract_structured(&items)),
        StrategyRun::new(Strategy::Text, extract_from_text(text, config)),
        StrategyRun::new(Strategy::Tabular, extract_tabular(text, &tables, config)),
    ];

    for run in &runs {
        info!(
            "{} strategy produced {} candidates",
            run.strategy,
            run.candidates.len()
        );
    }

    let candidates = match mode {
        SelectionMode::Best => select_best(runs)
            .map(|run| run.candidates)
            .unwrap_or_default(),
        SelectionMode::Merge => merge_all(runs),
    };

    let records = reconcile(&candidates, config);
    info!("Reconciled {} unique skills", records.len());

    SkillSession::new(records)
}
