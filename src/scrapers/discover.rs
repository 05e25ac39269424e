//! Candidate article link discovery on blog listing pages.
//!
//! Collects every hyperlink target on the page, resolves it against the
//! listing's base URL, and keeps the ones whose lowercase form contains a
//! blog-post indicator. The result is deduplicated in first-seen order and
//! capped, so a link-farm listing page cannot balloon a company's workload.

use itertools::Itertools;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::{debug, info, warn};
use url::Url;

/// Substrings that mark a hyperlink target as a probable article link.
///
/// Matched against the lowercase absolute URL. The path-delimited forms come
/// first; the bare words catch subdomains and query-string routing.
pub const LINK_KEYWORDS: [&str; 10] = [
    "/blog/",
    "/post/",
    "/article/",
    "/news/",
    "/insights/",
    "blog",
    "post",
    "article",
    "news",
    "insights",
];

/// Upper bound on candidate links per listing page, applied after dedup.
pub const MAX_LINKS_PER_SITE: usize = 20;

static ANCHOR_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());

/// Discover candidate article URLs on a listing page.
///
/// Every `<a href>` is resolved against `base_url` to an absolute form and
/// retained if it contains one of [`LINK_KEYWORDS`]. Duplicates are removed
/// keeping first occurrence; at most [`MAX_LINKS_PER_SITE`] URLs are
/// returned. An unparseable base URL or a page with no matches yields an
/// empty vector, not an error.
pub fn discover_article_links(html: &str, base_url: &str) -> Vec<String> {
    let base = match Url::parse(base_url) {
        Ok(url) => url,
        Err(e) => {
            warn!(%base_url, error = %e, "Unparseable base URL; no links discovered");
            return Vec::new();
        }
    };

    let document = Html::parse_document(html);
    let links: Vec<String> = document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| base.join(href).ok())
        .map(|resolved| resolved.to_string())
        .filter(|absolute| {
            let lower = absolute.to_lowercase();
            LINK_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
        })
        .unique()
        .take(MAX_LINKS_PER_SITE)
        .collect();

    info!(count = links.len(), %base_url, "Discovered candidate article links");
    debug!(urls = ?links, "Candidate links");
    links
}
