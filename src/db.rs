//! SQLite storage for companies, analyzed texts, and performance metrics.
//!
//! Three tables with foreign-key integrity enforced:
//!
//! - `companies`: upserted by caller-assigned `company_id`
//! - `texts`: append-only; `text_id` is assigned by the database and
//!   returned to the caller on insert
//! - `performance`: upserted by caller-assigned `metrics_id`, referencing
//!   an existing text row
//!
//! The caller is responsible for ordering: companies before texts, texts
//! before performance. Each insert commits on its own, so an interrupted
//! run keeps everything persisted up to that point.

use crate::models::{AnalysisResult, Company, ExtractedArticle, PerformanceRecord};
use rusqlite::Connection;
use std::error::Error;
use std::path::Path;
use tracing::{debug, info};

/// Open (creating if needed) the database at `path` and set pragmas.
pub fn connect(path: &str) -> Result<Connection, Box<dyn Error>> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
    info!(%path, "Opened database");
    Ok(conn)
}

/// Create the three tables if they do not exist.
pub fn init_schema(conn: &Connection) -> Result<(), Box<dyn Error>> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS companies (
            company_id   INTEGER PRIMARY KEY,
            company_name TEXT NOT NULL,
            company_url  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS texts (
            text_id                   INTEGER PRIMARY KEY,
            company_id                INTEGER NOT NULL REFERENCES companies(company_id),
            title                     TEXT,
            publication_date          TEXT,
            category                  TEXT,
            tags                      TEXT,
            content_text              TEXT,
            word_count                INTEGER,
            avg_sentence_length       REAL,
            avg_reading_time          INTEGER,
            tone_label                TEXT,
            most_frequent_words       TEXT,
            readability_score         REAL,
            optimal_complexity        TEXT,
            semantic_similarity_score REAL
        );
        CREATE INDEX IF NOT EXISTS idx_texts_company ON texts(company_id);

        CREATE TABLE IF NOT EXISTS performance (
            metrics_id          INTEGER PRIMARY KEY,
            text_id             INTEGER NOT NULL REFERENCES texts(text_id),
            views               INTEGER,
            click_through_rate  REAL,
            conversion_rate     REAL,
            reshares            INTEGER
        );
        CREATE INDEX IF NOT EXISTS idx_performance_text ON performance(text_id);
        ",
    )?;
    Ok(())
}

/// Upsert company rows by primary key. Returns the number written.
pub fn upsert_companies(conn: &Connection, companies: &[Company]) -> Result<usize, Box<dyn Error>> {
    let tx = conn.unchecked_transaction()?;
    let mut count = 0;
    {
        let mut stmt = tx.prepare(
            "INSERT OR REPLACE INTO companies (company_id, company_name, company_url)
             VALUES (?1, ?2, ?3)",
        )?;
        for company in companies {
            count += stmt.execute(rusqlite::params![
                company.company_id,
                company.company_name,
                company.company_url,
            ])?;
        }
    }
    tx.commit()?;
    debug!(count, "Upserted companies");
    Ok(count)
}

/// All companies currently in storage, id order.
pub fn fetch_companies(conn: &Connection) -> Result<Vec<Company>, Box<dyn Error>> {
    let mut stmt = conn.prepare(
        "SELECT company_id, company_name, company_url FROM companies ORDER BY company_id",
    )?;
    let rows = stmt
        .query_map([], |row| {
            Ok(Company {
                company_id: row.get(0)?,
                company_name: row.get(1)?,
                company_url: row.get(2)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Insert one analyzed text for a company; returns the assigned `text_id`.
///
/// `semantic_similarity_score` is written as 0.0: the column is reserved by
/// the downstream analytics schema and nothing in this pipeline computes it.
pub fn insert_text(
    conn: &Connection,
    company_id: i64,
    article: &ExtractedArticle,
    analysis: &AnalysisResult,
) -> Result<i64, Box<dyn Error>> {
    conn.execute(
        "INSERT INTO texts (
            company_id, title, publication_date, category, tags, content_text,
            word_count, avg_sentence_length, avg_reading_time, tone_label,
            most_frequent_words, readability_score, optimal_complexity,
            semantic_similarity_score
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
        rusqlite::params![
            company_id,
            article.title,
            article.publication_date.to_string(),
            article.category,
            article.tags,
            article.body_text,
            analysis.word_count as i64,
            analysis.avg_sentence_length,
            analysis.avg_reading_time as i64,
            analysis.tone.as_str(),
            analysis.top_words_joined(),
            analysis.readability_score,
            analysis.complexity_str(),
            0.0_f64,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Upsert performance rows by primary key. Returns the number written.
///
/// Rows referencing a missing `text_id` violate the foreign key and fail
/// the whole load; performance data must be loaded after texts exist.
pub fn upsert_performance(
    conn: &Connection,
    records: &[PerformanceRecord],
) -> Result<usize, Box<dyn Error>> {
    let tx = conn.unchecked_transaction()?;
    let mut count = 0;
    {
        let mut stmt = tx.prepare(
            "INSERT OR REPLACE INTO performance
             (metrics_id, text_id, views, click_through_rate, conversion_rate, reshares)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )?;
        for record in records {
            count += stmt.execute(rusqlite::params![
                record.metrics_id,
                record.text_id,
                record.views,
                record.click_through_rate,
                record.conversion_rate,
                record.reshares,
            ])?;
        }
    }
    tx.commit()?;
    debug!(count, "Upserted performance records");
    Ok(count)
}

/// Row counts per table, for the end-of-run summary.
pub struct StorageStats {
    pub companies: usize,
    pub texts: usize,
    pub performance: usize,
}

pub fn get_stats(conn: &Connection) -> Result<StorageStats, Box<dyn Error>> {
    let companies: usize = conn.query_row("SELECT COUNT(*) FROM companies", [], |r| r.get(0))?;
    let texts: usize = conn.query_row("SELECT COUNT(*) FROM texts", [], |r| r.get(0))?;
    let performance: usize =
        conn.query_row("SELECT COUNT(*) FROM performance", [], |r| r.get(0))?;
    Ok(StorageStats {
        companies,
        texts,
        performance,
    })
}
