// src/config.rs
use crate::utils::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Marker word identifying a count-bearing snippet ("3 endorsements").
pub const COUNT_MARKER: &str = "endorsement";

// Defaults for the structural assumptions below. They live here rather than
// inline in the extractors so a differently rendered source only needs a
// config change, not an extraction-logic change.
const TEXT_DENYLIST: &[&str] = &["index", "rank", "skill", "endorsement"];
const TABULAR_DENYLIST: &[&str] = &["index", "rank", "name"];
const TABULAR_EXACT_DENYLIST: &[&str] = &["skill"];
const PLACEHOLDER_NAMES: &[&str] = &["undefined", "null"];
const MIN_TAB_FIELDS: usize = 4;
const MIN_TABLE_CELLS: usize = 3;
const NAME_COLUMN: usize = 2;
const COUNT_COLUMN: usize = 3;

/// Tunable extraction knobs. Every field has a default; a JSON config file
/// only needs to name the fields it wants to change.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Words marking a text-matched name as a header/metadata line rather
    /// than a real skill (substring match, case-insensitive).
    pub text_denylist: Vec<String>,

    /// Same idea for tabular rows (substring match, case-insensitive).
    pub tabular_denylist: Vec<String>,

    /// Tabular names rejected only on exact match (case-insensitive).
    pub tabular_exact_denylist: Vec<String>,

    /// Literal "no value" strings a broken render can leak into page text.
    /// Records with these names are dropped during reconciliation.
    pub placeholder_names: Vec<String>,

    /// Minimum number of tab-split fields for a line to qualify.
    pub min_tab_fields: usize,

    /// Minimum number of cells for a table row to qualify.
    pub min_table_cells: usize,

    /// Zero-based column holding the skill name in tabular sources.
    pub name_column: usize,

    /// Zero-based column holding the endorsement count in tabular sources.
    pub count_column: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        let owned = |words: &[&str]| words.iter().map(|w| w.to_string()).collect();
        Self {
            text_denylist: owned(TEXT_DENYLIST),
            tabular_denylist: owned(TABULAR_DENYLIST),
            tabular_exact_denylist: owned(TABULAR_EXACT_DENYLIST),
            placeholder_names: owned(PLACEHOLDER_NAMES),
            min_tab_fields: MIN_TAB_FIELDS,
            min_table_cells: MIN_TABLE_CELLS,
            name_column: NAME_COLUMN,
            count_column: COUNT_COLUMN,
        }
    }
}

impl ExtractConfig {
    /// Loads overrides from a JSON file on top of the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        tracing::debug!("Loaded extraction config from {}", path.display());
        Ok(config)
    }

    /// True when a text-extracted name looks like document structure
    /// (header or metadata) instead of a real skill.
    pub fn is_noise_text_name(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        self.text_denylist
            .iter()
            .any(|word| lower.contains(&word.to_lowercase()))
    }

    /// True when a tabular name looks like a header row.
    pub fn is_noise_tabular_name(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        self.tabular_denylist
            .iter()
            .any(|word| lower.contains(&word.to_lowercase()))
            || self
                .tabular_exact_denylist
                .iter()
                .any(|word| lower == word.to_lowercase())
    }

    /// True when a reconciled name is a host-environment placeholder.
    pub fn is_placeholder(&self, name: &str) -> bool {
        self.placeholder_names.iter().any(|p| p == name)
    }
}
