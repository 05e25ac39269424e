//! Heuristic scraping of article content from arbitrary company blogs.
//!
//! Unlike a per-source scraper, nothing here knows the structure of the pages
//! it reads. Both submodules work from ordered fallback heuristics that
//! degrade gracefully on unknown markup:
//!
//! 1. **Discovery** ([`discover`]): find candidate article links on a
//!    listing page by keyword patterns in hyperlink targets
//! 2. **Extraction** ([`article`]): pull title, date, category, and body
//!    text out of an article page via fallback chains per field
//!
//! Failures are per-page: a listing that yields no links or an article that
//! fails the validity gate is skipped, never an error.

pub mod article;
pub mod discover;
