// src/document/mod.rs

// --- Imports ---
use once_cell::sync::Lazy;
use scraper::{node::Node, ElementRef, Html, Selector};

// --- CSS Selectors (Lazy Static) ---
// Skill entries in the profile's paged list. The id prefix is the list-item
// identification convention the rendered page uses.
static SKILL_ITEM_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"li[id^="profilePagedListComponent-"]"#)
        .expect("Failed to compile SKILL_ITEM_SELECTOR")
});

static TABLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table").expect("Failed to compile TABLE_SELECTOR"));

static ROW_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tr").expect("Failed to compile ROW_SELECTOR"));

static CELL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td, th").expect("Failed to compile CELL_SELECTOR"));

// --- Flattening conventions ---
// Elements whose text never renders.
const SKIP_TAGS: &[&str] = &["script", "style", "noscript", "template", "head"];

// Elements that end the current visual line, mirroring how a browser lays
// out `innerText`. Table cells are handled separately (tab separators).
const BLOCK_TAGS: &[&str] = &[
    "p", "div", "li", "ul", "ol", "dl", "dt", "dd", "section", "article", "header", "footer",
    "main", "nav", "aside", "blockquote", "pre", "form", "fieldset", "figure", "figcaption",
    "address", "h1", "h2", "h3", "h4", "h5", "h6", "table", "thead", "tbody", "tfoot", "hr",
];

/// Cell texts of one literal `<table>`, row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableGrid {
    pub rows: Vec<Vec<String>>,
}

/// Read-only snapshot of the source document.
///
/// Built either from a saved HTML page (full DOM available) or from
/// pre-flattened page text such as a pasted console dump (text only). The
/// extraction strategies never see the raw tree directly; they consume the
/// three views exposed here: skill item handles, flattened visible text, and
/// literal table grids.
pub struct DocumentSnapshot {
    dom: Option<Html>,
    text: String,
}

impl DocumentSnapshot {
    /// Parses a saved HTML page and flattens its visible text.
    pub fn from_html(html: &str) -> Self {
        let dom = Html::parse_document(html);
        let text = flatten_visible_text(dom.root_element());
        tracing::debug!(
            "Parsed HTML snapshot: {} bytes in, {} bytes of visible text",
            html.len(),
            text.len()
        );
        Self {
            dom: Some(dom),
            text,
        }
    }

    /// Wraps already-flattened page text. Tabs and newlines pass through
    /// untouched so tab-delimited dumps keep their field structure.
    pub fn from_text(text: &str) -> Self {
        Self {
            dom: None,
            text: text.to_string(),
        }
    }

    /// The full rendered visible text, one visual line per text line.
    pub fn visible_text(&self) -> &str {
        &self.text
    }

    /// Skill list items in document order. Empty when the snapshot has no
    /// DOM or the page uses a different list convention.
    pub fn skill_items(&self) -> Vec<ElementRef<'_>> {
        match &self.dom {
            Some(dom) => dom.select(&SKILL_ITEM_SELECTOR).collect(),
            None => Vec::new(),
        }
    }

    /// Every literal table in the document, in document order.
    pub fn tables(&self) -> Vec<TableGrid> {
        match &self.dom {
            Some(dom) => dom
                .select(&TABLE_SELECTOR)
                .map(|table| TableGrid {
                    rows: table
                        .select(&ROW_SELECTOR)
                        .map(|row| row.select(&CELL_SELECTOR).map(cell_text).collect())
                        .collect(),
                })
                .collect(),
            None => Vec::new(),
        }
    }
}

/// Flattens the DOM below `root` the way a browser would lay out visible
/// text: block elements end lines, `<br>` breaks lines, table cells become
/// tab-separated fields, and whitespace runs inside text nodes collapse to a
/// single space.
fn flatten_visible_text(root: ElementRef<'_>) -> String {
    let mut out = String::new();
    walk(root, &mut out);
    out.trim_end().to_string()
}

fn walk(element: ElementRef<'_>, out: &mut String) {
    let name = element.value().name();
    if SKIP_TAGS.contains(&name) {
        return;
    }
    if name == "br" {
        end_line(out);
        return;
    }

    let is_block = BLOCK_TAGS.contains(&name);
    if is_block {
        end_line(out);
    }

    for child in element.children() {
        if let Some(el) = ElementRef::wrap(child) {
            walk(el, out);
        } else if let Node::Text(text) = child.value() {
            push_collapsed(&text.text, out);
        }
    }

    match name {
        "td" | "th" => out.push('\t'),
        "tr" => {
            // The last cell also emitted a separator; a row never ends in one.
            if out.ends_with('\t') {
                out.pop();
            }
            end_line(out);
        }
        _ if is_block => end_line(out),
        _ => {}
    }
}

/// Terminates the current line unless it is already terminated or empty.
fn end_line(out: &mut String) {
    while out.ends_with(' ') {
        out.pop();
    }
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}

/// Appends a text node, collapsing whitespace runs (including entity-decoded
/// non-breaking spaces) into single spaces.
fn push_collapsed(text: &str, out: &mut String) {
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !out.is_empty() && !out.ends_with(|c: char| c.is_whitespace()) {
                out.push(' ');
            }
        } else {
            out.push(ch);
        }
    }
}

fn cell_text(cell: ElementRef<'_>) -> String {
    let mut out = String::new();
    for piece in cell.text() {
        push_collapsed(piece, &mut out);
    }
    out.trim().to_string()
}
