//! Article content extraction from arbitrary HTML.
//!
//! Each field is resolved independently through an ordered fallback chain,
//! first match wins:
//!
//! - **Title**: `<title>` → first `<h1>` → first `<h2>` → empty
//! - **Date**: first regex match in the raw document, patterns tried in a
//!   fixed order (ISO, US slash, abbreviated month name); no match means
//!   the run's current date
//! - **Category**: a fixed list of category/tag class selectors, else the
//!   `"General"` sentinel
//! - **Body**: common article containers in priority order, accepting the
//!   first whose visible text exceeds 100 characters, else the whole
//!   `<body>`
//!
//! The date scan deliberately covers the entire serialized document, so an
//! unrelated fragment (a copyright line, a version string) can win. That
//! false-positive risk is accepted heuristic behavior; the scan order and
//! first-match semantics must not be reordered.
//!
//! A page whose final body text is under 50 characters is not an article;
//! extraction reports it as such instead of constructing a near-empty
//! record.

use crate::models::ExtractedArticle;
use crate::utils::collapse_whitespace;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use ego_tree::NodeRef;
use scraper::{Html, Node, Selector};
use tracing::{debug, instrument};

/// Minimum body length for a page to count as an article.
pub const MIN_BODY_CHARS: usize = 50;

/// Minimum visible text length for a container to be accepted as the body.
pub const MIN_CONTAINER_CHARS: usize = 100;

/// Sentinel category when no category element is found.
pub const DEFAULT_CATEGORY: &str = "General";

/// Title fallback chain, first element found wins.
static TITLE_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    ["title", "h1", "h2"]
        .iter()
        .map(|s| Selector::parse(s).unwrap())
        .collect()
});

/// Category fallback chain.
static CATEGORY_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    [
        ".category",
        ".post-category",
        ".article-category",
        "[class*=\"category\"]",
        "[class*=\"tag\"]",
    ]
    .iter()
    .map(|s| Selector::parse(s).unwrap())
    .collect()
});

/// Body container fallback chain, most specific first.
static BODY_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    [
        "article",
        ".post-content",
        ".article-content",
        ".entry-content",
        ".content",
        "main",
        ".main-content",
    ]
    .iter()
    .map(|s| Selector::parse(s).unwrap())
    .collect()
});

static BODY_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("body").unwrap());

/// Date patterns with their chrono parse formats, tried strictly in order.
static DATE_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    vec![
        (Regex::new(r"\d{4}-\d{2}-\d{2}").unwrap(), "%Y-%m-%d"),
        (Regex::new(r"\d{2}/\d{2}/\d{4}").unwrap(), "%m/%d/%Y"),
        (
            Regex::new(r"\d{1,2}\s+(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)\s+\d{4}")
                .unwrap(),
            "%d %b %Y",
        ),
    ]
});

/// Outcome of running the extractor over one page.
///
/// The skip case carries its reason so the orchestrator can log why a page
/// was dropped without ever constructing an invalid article.
#[derive(Debug)]
pub enum Extraction {
    /// A valid article; body text passed the minimum-length gate.
    Article(ExtractedArticle),
    /// Visible body text was too short to be an article.
    TooShort {
        /// Character count of the rejected body text.
        length: usize,
    },
}

/// Extract a normalized article record from raw HTML.
///
/// `today` substitutes for the publication date when no date pattern
/// matches; passing it in keeps the extractor itself deterministic.
#[instrument(level = "debug", skip_all, fields(%url))]
pub fn extract_article(html: &str, url: &str, today: NaiveDate) -> Extraction {
    let document = Html::parse_document(html);

    let title = extract_title(&document);
    let publication_date = extract_date(html).unwrap_or(today);
    let category = extract_category(&document);
    let body_text = extract_body(&document);

    let length = body_text.chars().count();
    if length < MIN_BODY_CHARS {
        debug!(length, "Body text under validity threshold");
        return Extraction::TooShort { length };
    }

    debug!(
        title_len = title.len(),
        body_len = length,
        %publication_date,
        %category,
        "Extracted article"
    );
    Extraction::Article(ExtractedArticle {
        title,
        publication_date,
        category,
        // No tag-extraction heuristic exists; the column is carried empty.
        tags: String::new(),
        body_text,
    })
}

/// First element in the title fallback chain, or empty.
fn extract_title(document: &Html) -> String {
    for selector in TITLE_SELECTORS.iter() {
        if let Some(element) = document.select(selector).next() {
            return element.text().collect::<String>().trim().to_string();
        }
    }
    String::new()
}

/// First parseable date match in the raw document, patterns in fixed order.
///
/// A syntactic match that fails calendar parsing (e.g. `2024-13-01`) falls
/// through to the next pattern rather than aborting the scan.
fn extract_date(html: &str) -> Option<NaiveDate> {
    for (pattern, format) in DATE_PATTERNS.iter() {
        if let Some(found) = pattern.find(html) {
            match NaiveDate::parse_from_str(found.as_str(), format) {
                Ok(date) => return Some(date),
                Err(_) => continue,
            }
        }
    }
    None
}

/// First element in the category fallback chain, or the sentinel.
fn extract_category(document: &Html) -> String {
    for selector in CATEGORY_SELECTORS.iter() {
        if let Some(element) = document.select(selector).next() {
            return element.text().collect::<String>().trim().to_string();
        }
    }
    DEFAULT_CATEGORY.to_string()
}

/// Visible body text via the container fallback chain.
///
/// The first candidate container whose stripped text exceeds
/// [`MIN_CONTAINER_CHARS`] wins; otherwise the whole `<body>` (or the root,
/// for fragments without one) is used.
fn extract_body(document: &Html) -> String {
    for selector in BODY_SELECTORS.iter() {
        if let Some(element) = document.select(selector).next() {
            let text = collapse_whitespace(&visible_text(*element));
            if text.chars().count() > MIN_CONTAINER_CHARS {
                return text;
            }
        }
    }

    let fallback = document
        .select(&BODY_SELECTOR)
        .next()
        .map(|body| visible_text(*body))
        .unwrap_or_else(|| visible_text(*document.root_element()));
    collapse_whitespace(&fallback)
}

/// Collect the text beneath a node, skipping script/style/noscript subtrees.
fn visible_text(node: NodeRef<'_, Node>) -> String {
    let mut out = String::new();
    push_visible_text(node, &mut out);
    out
}

fn push_visible_text(node: NodeRef<'_, Node>, out: &mut String) {
    match node.value() {
        Node::Element(element) => {
            if matches!(element.name(), "script" | "style" | "noscript") {
                return;
            }
        }
        Node::Text(text) => {
            out.push_str(&text);
            out.push(' ');
        }
        _ => {}
    }
    for child in node.children() {
        push_visible_text(child, out);
    }
}
