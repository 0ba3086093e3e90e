// src/main.rs
mod config;
mod document;
mod extractors;
mod output;
mod pipeline;
mod utils;

use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use config::ExtractConfig;
use document::DocumentSnapshot;
use output::OutputFormat;
use pipeline::{SelectionMode, SkillSession};
use utils::error::OverrideError;
use utils::AppError;

/// Extract and rank skill endorsements from a saved profile snapshot
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Snapshot file to read, or '-' for stdin
    input: String,

    /// Treat the input as already-flattened text instead of HTML
    #[arg(long)]
    text: bool,

    /// Pool candidates from every strategy instead of picking the best one
    #[arg(long)]
    merge: bool,

    /// Override a count before ranking, as INDEX=COUNT (repeatable)
    #[arg(long, value_name = "INDEX=COUNT")]
    set: Vec<String>,

    /// Output format for the ranking
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Extraction tuning file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), AppError> {
    // 1. Parse CLI arguments
    let args = Args::parse();

    // 2. Setup logging (reads RUST_LOG env var)
    utils::logging::setup_logging(args.verbose);
    tracing::info!("Starting with args: {:?}", args);

    // 3. Load extraction tuning
    let config = match &args.config {
        Some(path) => ExtractConfig::load(path)?,
        None => ExtractConfig::default(),
    };

    // 4. Read the snapshot
    let raw = read_input(&args.input)?;
    tracing::info!("Read {} bytes of input", raw.len());

    let snapshot = if args.text {
        DocumentSnapshot::from_text(&raw)
    } else {
        DocumentSnapshot::from_html(&raw)
    };

    // 5. Extract, select, reconcile
    let mode = if args.merge {
        SelectionMode::Merge
    } else {
        SelectionMode::Best
    };
    let mut session = pipeline::run(&snapshot, &config, mode);

    if session.is_empty() {
        if args.format == OutputFormat::Json {
            println!("[]");
        } else {
            println!(
                "{}",
                "No skills found. Make sure the snapshot shows the profile's skills section."
                    .yellow()
            );
        }
        return Ok(());
    }

    // 6. Show the pre-ranking view so override indices are visible
    if args.format == OutputFormat::Table {
        println!("{}", output::banner());
        println!("{}", output::index_table(session.records()));
    }

    // 7. Apply manual corrections
    apply_overrides(&mut session, &args.set);

    // 8. Rank and print
    let ranking = session.ranking();
    match args.format {
        OutputFormat::Json => println!("{}", output::ranking_json(&ranking)?),
        OutputFormat::Plain => print!("{}", output::ranking_text(&ranking)),
        OutputFormat::Table => {
            print!("{}", output::ranking_text(&ranking));
            println!("{}", output::rank_table(&ranking));
        }
    }

    Ok(())
}

fn read_input(input: &str) -> Result<String, std::io::Error> {
    if input == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(input)
    }
}

/// Applies each INDEX=COUNT override, reporting failures without aborting.
fn apply_overrides(session: &mut SkillSession, specs: &[String]) {
    for spec in specs {
        let applied =
            parse_override(spec).and_then(|(index, count)| session.set_count(index, count));
        if let Err(e) = applied {
            eprintln!("{}", output::error_line(&e.to_string()));
            tracing::warn!("Ignoring override '{}': {}", spec, e);
        }
    }
}

fn parse_override(spec: &str) -> Result<(usize, u32), OverrideError> {
    let (index, count) = spec
        .split_once('=')
        .ok_or_else(|| OverrideError::MalformedSpec(spec.to_string()))?;

    let index = index
        .trim()
        .parse::<usize>()
        .map_err(|_| OverrideError::MalformedSpec(spec.to_string()))?;
    let count = count
        .trim()
        .parse::<u32>()
        .map_err(|_| OverrideError::MalformedSpec(spec.to_string()))?;

    Ok((index, count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_well_formed_overrides() {
        assert_eq!(parse_override("2=15").unwrap(), (2, 15));
        assert_eq!(parse_override(" 0 = 3 ").unwrap(), (0, 3));
    }

    #[test]
    fn test_rejects_malformed_overrides() {
        for spec in ["", "2", "=5", "2=", "two=5", "2=ten", "2=-1"] {
            assert!(parse_override(spec).is_err(), "accepted {spec:?}");
        }
    }
}
