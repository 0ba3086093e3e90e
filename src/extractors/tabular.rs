// src/extractors/tabular.rs
use tracing::debug;

use crate::config::ExtractConfig;
use crate::document::TableGrid;
use crate::extractors::Candidate;

/// Extracts candidates from tab-delimited text lines and from the first
/// literal table in the document. Both sources contribute, in that order.
///
/// A tab line qualifies when it has enough fields and its count field is a
/// clean integer. A table row only needs enough cells; a missing or
/// unparseable count cell falls back to 0.
pub fn extract_tabular(
    text: &str,
    tables: &[TableGrid],
    config: &ExtractConfig,
) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    from_tab_lines(text, config, &mut candidates);
    if let Some(table) = tables.first() {
        from_table_rows(table, config, &mut candidates);
    }

    candidates
}

fn from_tab_lines(text: &str, config: &ExtractConfig, out: &mut Vec<Candidate>) {
    for line in text.lines() {
        if !line.contains('\t') {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < config.min_tab_fields {
            continue;
        }

        let count = match fields.get(config.count_column).map(|f| f.trim().parse::<u32>()) {
            Some(Ok(count)) => count,
            _ => continue,
        };
        if let Some(name) = fields.get(config.name_column) {
            push_candidate(name, count, config, out);
        }
    }
}

fn from_table_rows(table: &TableGrid, config: &ExtractConfig, out: &mut Vec<Candidate>) {
    for row in &table.rows {
        if row.len() < config.min_table_cells {
            continue;
        }

        let name = match row.get(config.name_column) {
            Some(name) => name,
            None => continue,
        };
        let count = row
            .get(config.count_column)
            .and_then(|cell| cell.trim().parse::<u32>().ok())
            .unwrap_or(0);
        push_candidate(name, count, config, out);
    }
}

fn push_candidate(raw_name: &str, count: u32, config: &ExtractConfig, out: &mut Vec<Candidate>) {
    let candidate = Candidate::new(raw_name, count);
    if candidate.name.is_empty() {
        return;
    }
    if config.is_noise_tabular_name(&candidate.name) {
        debug!("Rejecting tabular header row: {}", candidate.raw_name);
        return;
    }
    out.push(candidate);
}
