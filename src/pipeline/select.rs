// src/pipeline/select.rs
use std::fmt;

use tracing::info;

use crate::extractors::Candidate;

/// How the pipeline combines the per-strategy candidate sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Keep only the most productive strategy's candidates.
    Best,
    /// Pool candidates from every strategy before reconciliation.
    Merge,
}

/// The extraction strategies, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Structured,
    Text,
    Tabular,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Structured => "structured",
            Strategy::Text => "text",
            Strategy::Tabular => "tabular",
        };
        write!(f, "{}", name)
    }
}

/// One extractor's output, tagged with the strategy that produced it.
#[derive(Debug, Clone)]
pub struct StrategyRun {
    pub strategy: Strategy,
    pub candidates: Vec<Candidate>,
}

impl StrategyRun {
    pub fn new(strategy: Strategy, candidates: Vec<Candidate>) -> Self {
        Self {
            strategy,
            candidates,
        }
    }
}

/// Picks the run with the most candidates. Candidate count is the only
/// signal compared; a run full of zero-count candidates still wins on
/// length. Ties keep the earlier run, so the caller's ordering doubles as
/// the priority order.
pub fn select_best(runs: Vec<StrategyRun>) -> Option<StrategyRun> {
    let mut best: Option<StrategyRun> = None;

    for run in runs {
        let better = match &best {
            Some(current) => run.candidates.len() > current.candidates.len(),
            None => true,
        };
        if better {
            best = Some(run);
        }
    }

    if let Some(run) = &best {
        info!(
            "Selected {} strategy with {} candidates",
            run.strategy,
            run.candidates.len()
        );
    }
    best
}

/// Pools every run's candidates, preserving run order.
pub fn merge_all(runs: Vec<StrategyRun>) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    for run in runs {
        candidates.extend(run.candidates);
    }
    candidates
}
