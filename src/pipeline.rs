//! The scraping and analysis pipeline, one company at a time.
//!
//! For every company in storage: discover candidate links on its listing
//! page, then take each link through pause, fetch, extract, analyze, and
//! persist, strictly sequentially. Every per-item failure is contained at
//! its stage boundary and surfaces as an explicit [`SkipReason`] rather than an
//! error, so one malformed page can never abort processing of sibling
//! pages or companies.
//!
//! The randomized pause before each article fetch is a politeness
//! mechanism toward the scraped sites and must stay in place.

use crate::analysis;
use crate::analysis::lexical::LexicalAnalyzer;
use crate::analysis::tone::ToneClassifier;
use crate::db;
use crate::fetch;
use crate::models::Company;
use crate::scrapers::article::{self, Extraction};
use crate::scrapers::discover;
use crate::utils::truncate_for_log;
use chrono::NaiveDate;
use rand::{rng, Rng};
use rusqlite::Connection;
use std::error::Error;
use std::fmt;
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Mutable state for one pipeline run.
///
/// Holds the counters and the shared analyzer tables; passed explicitly
/// through the run instead of living in process-wide state.
pub struct RunContext {
    /// Current date, substituted for articles without a parseable date.
    pub today: NaiveDate,
    pub lexical: LexicalAnalyzer,
    pub tone: ToneClassifier,
    /// Articles persisted across all companies so far.
    pub persisted: usize,
    /// Candidate links skipped across all companies so far.
    pub skipped: usize,
}

impl RunContext {
    pub fn new(today: NaiveDate) -> Self {
        RunContext {
            today,
            lexical: LexicalAnalyzer::new(),
            tone: ToneClassifier::new(),
            persisted: 0,
            skipped: 0,
        }
    }
}

/// Why one candidate link was dropped without aborting anything else.
#[derive(Debug)]
pub enum SkipReason {
    /// The HTTP request failed, timed out, or returned a non-2xx status.
    FetchFailed(String),
    /// The page's body text was under the article validity threshold.
    InvalidArticle { body_length: usize },
    /// The storage insert for this row failed.
    PersistFailed(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::FetchFailed(e) => write!(f, "fetch failed: {e}"),
            SkipReason::InvalidArticle { body_length } => {
                write!(f, "not an article (body {body_length} chars)")
            }
            SkipReason::PersistFailed(e) => write!(f, "persist failed: {e}"),
        }
    }
}

/// Terminal state of one candidate link.
#[derive(Debug)]
pub enum ItemOutcome {
    Persisted { text_id: i64 },
    Skipped(SkipReason),
}

/// Run the full scraping pipeline over every company in storage.
///
/// Returns the number of articles persisted. An empty companies table is
/// the one fatal condition here; everything below the company level is
/// contained and logged.
#[instrument(level = "info", skip_all)]
pub async fn run(conn: &Connection, ctx: &mut RunContext) -> Result<usize, Box<dyn Error>> {
    let companies = db::fetch_companies(conn)?;
    if companies.is_empty() {
        return Err("no companies in storage; load companies before scraping".into());
    }
    info!(companies = companies.len(), "Starting scraping pipeline");

    let listing_client = fetch::build_client(fetch::LISTING_TIMEOUT)?;
    let article_client = fetch::build_client(fetch::ARTICLE_TIMEOUT)?;

    for company in &companies {
        info!(
            company_id = company.company_id,
            url = %company.company_url,
            "Processing company"
        );

        let links = match fetch::fetch_html(&listing_client, &company.company_url).await {
            Ok(html) => discover::discover_article_links(&html, &company.company_url),
            Err(e) => {
                warn!(
                    company_id = company.company_id,
                    url = %company.company_url,
                    error = %e,
                    "Listing page fetch failed; skipping company"
                );
                continue;
            }
        };

        if links.is_empty() {
            info!(
                company_id = company.company_id,
                "No article links discovered; company done with zero items"
            );
            continue;
        }

        for link in &links {
            match process_link(conn, ctx, &article_client, company, link).await {
                ItemOutcome::Persisted { text_id } => {
                    ctx.persisted += 1;
                    info!(text_id, %link, "Persisted analyzed article");
                }
                ItemOutcome::Skipped(reason) => {
                    ctx.skipped += 1;
                    warn!(%link, %reason, "Skipped article");
                }
            }
        }
    }

    info!(
        persisted = ctx.persisted,
        skipped = ctx.skipped,
        "Scraping pipeline completed"
    );
    Ok(ctx.persisted)
}

/// Take one candidate link through pause, fetch, extract, analyze, and
/// persist. Every failure mode maps to a [`SkipReason`].
async fn process_link(
    conn: &Connection,
    ctx: &RunContext,
    client: &reqwest::Client,
    company: &Company,
    url: &str,
) -> ItemOutcome {
    politeness_pause().await;

    let html = match fetch::fetch_html(client, url).await {
        Ok(html) => html,
        Err(e) => return ItemOutcome::Skipped(SkipReason::FetchFailed(e.to_string())),
    };

    let article = match article::extract_article(&html, url, ctx.today) {
        Extraction::Article(article) => article,
        Extraction::TooShort { length } => {
            return ItemOutcome::Skipped(SkipReason::InvalidArticle {
                body_length: length,
            });
        }
    };

    let report = ctx.lexical.analyze(&article.body_text);
    let tone = ctx.tone.classify(&article.body_text);
    let result = analysis::combine(report, tone);

    info!(
        title = %truncate_for_log(&article.title, 50),
        words = result.word_count,
        tone = result.tone.as_str(),
        "Analyzed article"
    );

    match db::insert_text(conn, company.company_id, &article, &result) {
        Ok(text_id) => ItemOutcome::Persisted { text_id },
        Err(e) => ItemOutcome::Skipped(SkipReason::PersistFailed(e.to_string())),
    }
}

/// Uniform 1-3 second pause before each article fetch.
async fn politeness_pause() {
    let delay_secs: f64 = rng().random_range(1.0..=3.0);
    tokio::time::sleep(Duration::from_secs_f64(delay_secs)).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_context_starts_at_zero() {
        let ctx = RunContext::new(NaiveDate::from_ymd_opt(2026, 8, 7).unwrap());
        assert_eq!(ctx.persisted, 0);
        assert_eq!(ctx.skipped, 0);
    }

    #[test]
    fn test_skip_reason_display() {
        let fetch = SkipReason::FetchFailed("timeout".to_string());
        assert_eq!(fetch.to_string(), "fetch failed: timeout");

        let invalid = SkipReason::InvalidArticle { body_length: 12 };
        assert_eq!(invalid.to_string(), "not an article (body 12 chars)");

        let persist = SkipReason::PersistFailed("disk full".to_string());
        assert_eq!(persist.to_string(), "persist failed: disk full");
    }

    #[tokio::test]
    async fn test_run_fails_with_no_companies() {
        let conn = Connection::open_in_memory().unwrap();
        crate::db::init_schema(&conn).unwrap();
        let mut ctx = RunContext::new(NaiveDate::from_ymd_opt(2026, 8, 7).unwrap());
        assert!(run(&conn, &mut ctx).await.is_err());
    }
}
