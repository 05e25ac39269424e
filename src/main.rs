//! # Blog Pulse
//!
//! A batch pipeline that scrapes blog content from company websites,
//! computes deterministic readability/tone/lexical metrics per article, and
//! persists everything in SQLite alongside externally supplied performance
//! metrics.
//!
//! ## Run order
//!
//! 1. **Setup**: open the database and create the schema if absent
//! 2. **Load companies**: upsert `companies.csv` rows
//! 3. **Scrape & analyze**: per company, discover article links, fetch each
//!    one sequentially with a politeness delay, extract and analyze it, and
//!    insert a text row
//! 4. **Load performance**: upsert `performance.csv` rows, which reference
//!    the text ids created in step 3
//!
//! ## Usage
//!
//! ```sh
//! blog_pulse -d ./data/blog_pulse.sqlite -c companies.csv -p performance.csv
//! ```
//!
//! ## Failure model
//!
//! Per-article failures (fetch errors, non-article pages, single-row insert
//! errors) are logged and skipped. Configuration failures (unreachable
//! database, unreadable CSV input) abort the run with a non-zero exit.

use chrono::Local;
use clap::Parser;
use std::error::Error;
use tracing::{debug, info};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod analysis;
mod cli;
mod db;
mod fetch;
mod inputs;
mod models;
mod pipeline;
mod scrapers;
mod utils;

use cli::Cli;
use pipeline::RunContext;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("blog_pulse starting up");

    let args = Cli::parse();
    debug!(?args.database, ?args.companies_csv, ?args.performance_csv, "Parsed CLI arguments");

    // ---- Storage setup ----
    let conn = db::connect(&args.database)?;
    db::init_schema(&conn)?;
    info!("Database schema ready");

    // ---- Load companies ----
    let companies = inputs::load_companies(&args.companies_csv)?;
    let written = db::upsert_companies(&conn, &companies)?;
    info!(count = written, "Companies loaded into storage");

    // ---- Scrape and analyze ----
    let mut ctx = RunContext::new(Local::now().date_naive());
    let persisted = pipeline::run(&conn, &mut ctx).await?;
    info!(persisted, skipped = ctx.skipped, "Scraping and analysis finished");

    // ---- Load performance (text ids now exist) ----
    let performance = inputs::load_performance(&args.performance_csv)?;
    let written = db::upsert_performance(&conn, &performance)?;
    info!(count = written, "Performance metrics loaded into storage");

    let stats = db::get_stats(&conn)?;
    let elapsed = start_time.elapsed();
    info!(
        companies = stats.companies,
        texts = stats.texts,
        performance = stats.performance,
        secs = elapsed.as_secs(),
        "Pipeline completed"
    );

    Ok(())
}
