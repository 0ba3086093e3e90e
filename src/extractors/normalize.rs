// src/extractors/normalize.rs
use once_cell::sync::Lazy;
use regex::Regex;

static INDEX_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+[.:\s]*").expect("Failed to compile index prefix regex"));

/// Normalizes a raw skill label scraped from a rendered profile.
///
/// Rendered snapshots tend to mangle labels in three ways, each undone by
/// one pass here:
/// 1. The visible text and its screen-reader twin get concatenated, so the
///    whole label appears doubled ("RustRust"). If the string is an exact
///    self-concatenation, keep the first half.
/// 2. The same duplication with a colon in between ("Rust: Rust: 5"). If the
///    first two colon segments match after trimming, keep the first.
/// 3. A leading list index bleeds into the label ("12. Python"). Strip it.
///
/// Each repair runs at most once; a label that is legitimately numeric
/// falls back to the trimmed input rather than vanishing.
pub fn clean_name(raw: &str) -> String {
    let mut name = raw.trim().to_string();

    // Exact doubled string, e.g. "RustRust" -> "Rust". Byte halving is only
    // valid when the midpoint lands on a char boundary.
    let half = name.len() / 2;
    if half > 0 && name.len() % 2 == 0 && name.is_char_boundary(half) && name[..half] == name[half..]
    {
        name.truncate(half);
    }

    // Colon-separated duplicate, e.g. "Rust: Rust: 5" -> "Rust".
    let mut segments = name.split(':');
    if let (Some(first), Some(second)) = (segments.next(), segments.next()) {
        if first.trim() == second.trim() {
            name = first.trim().to_string();
        }
    }

    // Leading list index, e.g. "12. Python" -> "Python".
    let name = INDEX_PREFIX_RE.replace(&name, "");
    let name = name.trim();

    if name.is_empty() {
        // Stripping ate the whole label (purely numeric names do this).
        raw.trim().to_string()
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_doubled_names() {
        assert_eq!(clean_name("RustRust"), "Rust");
        assert_eq!(clean_name("REST APIsREST APIs"), "REST APIs");
    }

    #[test]
    fn test_halving_respects_char_boundaries() {
        assert_eq!(clean_name("日本語日本語"), "日本語");
    }

    #[test]
    fn test_leaves_non_doubled_names_alone() {
        assert_eq!(clean_name("Rust"), "Rust");
        // Odd length can never be a doubled string.
        assert_eq!(clean_name("Java Java"), "Java Java");
    }

    #[test]
    fn test_collapses_colon_duplicates() {
        assert_eq!(clean_name("Go:Go"), "Go");
        assert_eq!(clean_name("Go : Go"), "Go");
        assert_eq!(clean_name("Rust: Rust: 5"), "Rust");
    }

    #[test]
    fn test_keeps_genuine_colon_phrases() {
        assert_eq!(clean_name("Skill: other"), "Skill: other");
    }

    #[test]
    fn test_strips_leading_index() {
        assert_eq!(clean_name("12. Python"), "Python");
        assert_eq!(clean_name("3:Name"), "Name");
        assert_eq!(clean_name("7   Name"), "Name");
    }

    #[test]
    fn test_numeric_names_survive() {
        // "1212" halves to "12", which the index strip would erase entirely,
        // so the trimmed original wins.
        assert_eq!(clean_name("1212"), "1212");
        assert_eq!(clean_name("5"), "5");
    }

    #[test]
    fn test_is_idempotent_on_realistic_labels() {
        for raw in [
            "RustRust",
            "REST APIsREST APIs",
            "Go : Go",
            "12. Python",
            "Machine Learning",
            "C (programming language)",
        ] {
            let once = clean_name(raw);
            assert_eq!(clean_name(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn test_handles_empty_and_whitespace() {
        assert_eq!(clean_name(""), "");
        assert_eq!(clean_name("   "), "");
    }
}
