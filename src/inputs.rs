//! Tabular input loading for company and performance records.
//!
//! Both files are plain CSV with a header row, deserialized straight into
//! the model structs. Loading is all-or-nothing: the first malformed row
//! aborts the load with an error, there is no partial-row recovery. These
//! files are produced upstream, so a bad row means the export itself is
//! broken.

use crate::models::{Company, PerformanceRecord};
use std::error::Error;
use tracing::{info, instrument};

/// Load company rows from `companies.csv`-shaped input.
///
/// Expected headers: `company_id,company_name,company_url`.
#[instrument(level = "info", skip_all, fields(%path))]
pub fn load_companies(path: &str) -> Result<Vec<Company>, Box<dyn Error>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut companies = Vec::new();
    for record in reader.deserialize() {
        let company: Company = record?;
        companies.push(company);
    }
    info!(count = companies.len(), "Loaded company records");
    Ok(companies)
}

/// Load performance rows from `performance.csv`-shaped input.
///
/// Expected headers: `metrics_id,text_id,views,CTR,CR,reshares`.
#[instrument(level = "info", skip_all, fields(%path))]
pub fn load_performance(path: &str) -> Result<Vec<PerformanceRecord>, Box<dyn Error>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for record in reader.deserialize() {
        let performance: PerformanceRecord = record?;
        records.push(performance);
    }
    info!(count = records.len(), "Loaded performance records");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_csv(contents: &str) -> tempfile_path::TempCsv {
        tempfile_path::TempCsv::new(contents)
    }

    /// Minimal tempfile helper; files are removed on drop.
    mod tempfile_path {
        use std::io::Write;
        use std::path::PathBuf;
        use std::sync::atomic::{AtomicUsize, Ordering};

        static COUNTER: AtomicUsize = AtomicUsize::new(0);

        pub struct TempCsv {
            pub path: PathBuf,
        }

        impl TempCsv {
            pub fn new(contents: &str) -> Self {
                let mut path = std::env::temp_dir();
                let unique = format!(
                    "blog_pulse_test_{}_{}.csv",
                    std::process::id(),
                    COUNTER.fetch_add(1, Ordering::Relaxed)
                );
                path.push(unique);
                let mut file = std::fs::File::create(&path).unwrap();
                file.write_all(contents.as_bytes()).unwrap();
                TempCsv { path }
            }

            pub fn path_str(&self) -> &str {
                self.path.to_str().unwrap()
            }
        }

        impl Drop for TempCsv {
            fn drop(&mut self) {
                let _ = std::fs::remove_file(&self.path);
            }
        }
    }

    #[test]
    fn test_load_companies() {
        let file = temp_csv(
            "company_id,company_name,company_url\n\
             1,Acme,https://acme.example/blog\n\
             2,Globex,https://globex.example/news\n",
        );
        let companies = load_companies(file.path_str()).unwrap();
        assert_eq!(companies.len(), 2);
        assert_eq!(companies[1].company_name, "Globex");
    }

    #[test]
    fn test_load_companies_malformed_row_aborts() {
        let file = temp_csv(
            "company_id,company_name,company_url\n\
             1,Acme,https://acme.example/blog\n\
             not_a_number,Broken,https://broken.example\n",
        );
        assert!(load_companies(file.path_str()).is_err());
    }

    #[test]
    fn test_load_companies_missing_file() {
        assert!(load_companies("/nonexistent/companies.csv").is_err());
    }

    #[test]
    fn test_load_performance() {
        let file = temp_csv(
            "metrics_id,text_id,views,CTR,CR,reshares\n\
             1,10,500,0.05,0.01,2\n",
        );
        let records = load_performance(file.path_str()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].views, 500);
        assert!((records[0].click_through_rate - 0.05).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_performance_malformed_rate_aborts() {
        let file = temp_csv(
            "metrics_id,text_id,views,CTR,CR,reshares\n\
             1,10,500,not_a_rate,0.01,2\n",
        );
        assert!(load_performance(file.path_str()).is_err());
    }
}
