// src/extractors/mod.rs
pub mod normalize;
pub mod structured;
pub mod tabular;
pub mod text;

// Re-export the extraction entry points for convenience
pub use structured::extract_structured;
pub use tabular::extract_tabular;
pub use text::extract_from_text;

/// One unreconciled (name, count) observation from a single extraction
/// strategy. `name` is the normalized form used for reconciliation;
/// `raw_name` keeps the label as it appeared in the source for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub raw_name: String,
    pub name: String,
    pub count: u32,
}

impl Candidate {
    /// Builds a candidate, running the raw label through name normalization.
    pub fn new(raw_name: &str, count: u32) -> Self {
        let raw_name = raw_name.trim().to_string();
        let name = normalize::clean_name(&raw_name);
        Self {
            raw_name,
            name,
            count,
        }
    }
}
