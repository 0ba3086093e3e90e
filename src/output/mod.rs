// src/output/mod.rs
use clap::ValueEnum;
use colored::Colorize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

use crate::pipeline::SkillRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Plain,
    Json,
}

/// Renders the numbered plain-text ranking.
pub fn ranking_text(records: &[SkillRecord]) -> String {
    let mut output = String::from("Skills sorted by endorsement count:\n");
    output.push_str("-----------------------------------\n");

    for (position, record) in records.iter().enumerate() {
        output.push_str(&format!(
            "{}. {}: {} {}\n",
            position + 1,
            record.name,
            record.count,
            endorsement_label(record.count)
        ));
    }

    output
}

/// Pre-ranking view with zero-based indices, the ones override specs use.
pub fn index_table(records: &[SkillRecord]) -> String {
    skills_table(records, "index", 0)
}

/// Final ranking view with one-based ranks.
pub fn rank_table(records: &[SkillRecord]) -> String {
    skills_table(records, "rank", 1)
}

/// Renders the ranking as a pretty-printed JSON array.
pub fn ranking_json(records: &[SkillRecord]) -> Result<String, serde_json::Error> {
    let rows: Vec<serde_json::Value> = records
        .iter()
        .enumerate()
        .map(|(position, record)| {
            serde_json::json!({
                "rank": position + 1,
                "skill": record.name,
                "endorsements": record.count,
            })
        })
        .collect();

    serde_json::to_string_pretty(&rows)
}

pub fn banner() -> String {
    format!(
        "{}\n{}",
        "Skill Sorter".bold().blue(),
        "Corrections: re-run with --set INDEX=COUNT before ranking".italic()
    )
}

pub fn error_line(message: &str) -> String {
    format!("✗ {}", message).red().to_string()
}

fn skills_table(records: &[SkillRecord], ordinal_header: &str, base: usize) -> String {
    let mut builder = Builder::default();
    builder.push_record([ordinal_header, "skill", "endorsements"]);

    for (position, record) in records.iter().enumerate() {
        builder.push_record([
            &(position + base).to_string(),
            &record.name,
            &record.count.to_string(),
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

fn endorsement_label(count: u32) -> &'static str {
    if count == 1 {
        "endorsement"
    } else {
        "endorsements"
    }
}
