// src/extractors/structured.rs
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Selector};
use tracing::debug;

use crate::config::COUNT_MARKER;
use crate::extractors::Candidate;

// Label shapes in priority order: the accessibility link text, then the
// aria-hidden display span. The first shape present in the item wins.
static LABEL_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    [".hoverable-link-text", r#"span[aria-hidden="true"]"#]
        .iter()
        .map(|css| Selector::parse(css).expect("Failed to compile label selector"))
        .collect()
});

static HIDDEN_SPAN_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".visually-hidden").expect("Failed to compile hidden span selector"));

static ANY_SPAN_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span").expect("Failed to compile span selector"));

static FIRST_INT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)").expect("Failed to compile integer regex"));

/// Extracts (name, count) candidates from the structured skill items.
///
/// Items missing a label are skipped without aborting the pass. A count is
/// looked up in the item's screen-reader-only spans first; only when no
/// count is found there does the search widen to every span in the item.
/// Items with no count at all are kept with a count of 0.
pub fn extract_structured(items: &[ElementRef<'_>]) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for item in items {
        let label = match find_label(item) {
            Some(label) => label,
            None => {
                debug!("Skipping skill item without a recognizable label");
                continue;
            }
        };

        let count = find_count(item).unwrap_or(0);
        candidates.push(Candidate::new(&label, count));
    }

    candidates
}

fn find_label(item: &ElementRef<'_>) -> Option<String> {
    LABEL_SELECTORS.iter().find_map(|selector| {
        item.select(selector)
            .next()
            .map(|element| element.text().collect::<String>().trim().to_string())
    })
}

fn find_count(item: &ElementRef<'_>) -> Option<u32> {
    scan_spans(item, &HIDDEN_SPAN_SELECTOR).or_else(|| scan_spans(item, &ANY_SPAN_SELECTOR))
}

/// Returns the first integer found in a span whose text mentions the count
/// marker. A parsed 0 is a real observation, not a miss.
fn scan_spans(item: &ElementRef<'_>, selector: &Selector) -> Option<u32> {
    for span in item.select(selector) {
        let text = span.text().collect::<String>();
        let text = text.trim();
        if !text.contains(COUNT_MARKER) {
            continue;
        }
        if let Some(caps) = FIRST_INT_RE.captures(text) {
            if let Ok(count) = caps[1].parse::<u32>() {
                return Some(count);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentSnapshot;

    fn candidates_from(html: &str) -> Vec<Candidate> {
        let snapshot = DocumentSnapshot::from_html(html);
        extract_structured(&snapshot.skill_items())
    }

    #[test]
    fn test_reads_label_and_hidden_count() {
        let html = r#"
            <ul>
              <li id="profilePagedListComponent-1">
                <span class="hoverable-link-text">RustRust</span>
                <span class="visually-hidden">3 endorsements</span>
              </li>
            </ul>
        "#;
        let candidates = candidates_from(html);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].name, "Rust");
        assert_eq!(candidates[0].count, 3);
    }

    #[test]
    fn test_falls_back_to_aria_hidden_label() {
        let html = r#"
            <li id="profilePagedListComponent-2">
              <span aria-hidden="true">Go</span>
              <span class="visually-hidden">7 endorsements</span>
            </li>
        "#;
        let candidates = candidates_from(html);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].name, "Go");
        assert_eq!(candidates[0].count, 7);
    }

    #[test]
    fn test_skips_items_without_a_label() {
        let html = r#"
            <ul>
              <li id="profilePagedListComponent-1">
                <span class="visually-hidden">3 endorsements</span>
              </li>
              <li id="profilePagedListComponent-2">
                <span class="hoverable-link-text">Python</span>
                <span class="visually-hidden">5 endorsements</span>
              </li>
            </ul>
        "#;
        let candidates = candidates_from(html);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].name, "Python");
    }

    #[test]
    fn test_widens_count_search_when_hidden_spans_have_none() {
        let html = r#"
            <li id="profilePagedListComponent-3">
              <span class="hoverable-link-text">SQL</span>
              <span class="visually-hidden">passed assessment</span>
              <span>12 endorsements</span>
            </li>
        "#;
        let candidates = candidates_from(html);
        assert_eq!(candidates[0].count, 12);
    }

    #[test]
    fn test_missing_count_defaults_to_zero() {
        let html = r#"
            <li id="profilePagedListComponent-4">
              <span class="hoverable-link-text">Kubernetes</span>
            </li>
        "#;
        let candidates = candidates_from(html);
        assert_eq!(candidates[0].count, 0);
    }

    #[test]
    fn test_a_parsed_zero_is_trusted_over_wider_spans() {
        let html = r#"
            <li id="profilePagedListComponent-5">
              <span class="hoverable-link-text">Docker</span>
              <span class="visually-hidden">0 endorsements</span>
              <span>9 endorsements</span>
            </li>
        "#;
        let candidates = candidates_from(html);
        assert_eq!(candidates[0].count, 0);
    }

    #[test]
    fn test_prefers_link_text_label_over_aria_hidden() {
        let html = r#"
            <li id="profilePagedListComponent-6">
              <span aria-hidden="true">Wrong</span>
              <span class="hoverable-link-text">Right</span>
              <span class="visually-hidden">2 endorsements</span>
            </li>
        "#;
        let candidates = candidates_from(html);
        assert_eq!(candidates[0].name, "Right");
    }

    #[test]
    fn test_preserves_document_order() {
        let html = r#"
            <ul>
              <li id="profilePagedListComponent-a">
                <span class="hoverable-link-text">Zig</span>
                <span class="visually-hidden">1 endorsement</span>
              </li>
              <li id="profilePagedListComponent-b">
                <span class="hoverable-link-text">Ada</span>
                <span class="visually-hidden">4 endorsements</span>
              </li>
            </ul>
        "#;
        let names: Vec<_> = candidates_from(html).into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Zig", "Ada"]);
    }
}
