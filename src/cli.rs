//! Command-line interface definitions for Blog Pulse.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! All arguments can be provided via command-line flags or environment
//! variables.

use clap::Parser;

/// Command-line arguments for the Blog Pulse pipeline.
///
/// The job runs to completion: connect to storage, load companies, scrape
/// and analyze their blogs, then load performance metrics. There is no
/// other surface.
///
/// # Examples
///
/// ```sh
/// # Defaults: ./data/blog_pulse.sqlite, ./companies.csv, ./performance.csv
/// blog_pulse
///
/// # Explicit paths
/// blog_pulse -d ./data/run.sqlite -c ./in/companies.csv -p ./in/performance.csv
/// ```
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Path to the SQLite database file (created if absent)
    #[arg(short, long, env = "BLOG_PULSE_DB", default_value = "data/blog_pulse.sqlite")]
    pub database: String,

    /// CSV file with company records (company_id, company_name, company_url)
    #[arg(short, long, env = "BLOG_PULSE_COMPANIES", default_value = "companies.csv")]
    pub companies_csv: String,

    /// CSV file with performance metrics keyed by text_id
    #[arg(short, long, env = "BLOG_PULSE_PERFORMANCE", default_value = "performance.csv")]
    pub performance_csv: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["blog_pulse"]);
        assert_eq!(cli.database, "data/blog_pulse.sqlite");
        assert_eq!(cli.companies_csv, "companies.csv");
        assert_eq!(cli.performance_csv, "performance.csv");
    }

    #[test]
    fn test_cli_long_flags() {
        let cli = Cli::parse_from([
            "blog_pulse",
            "--database",
            "/tmp/test.sqlite",
            "--companies-csv",
            "/tmp/companies.csv",
            "--performance-csv",
            "/tmp/performance.csv",
        ]);
        assert_eq!(cli.database, "/tmp/test.sqlite");
        assert_eq!(cli.companies_csv, "/tmp/companies.csv");
        assert_eq!(cli.performance_csv, "/tmp/performance.csv");
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["blog_pulse", "-d", "run.sqlite", "-c", "a.csv", "-p", "b.csv"]);
        assert_eq!(cli.database, "run.sqlite");
        assert_eq!(cli.companies_csv, "a.csv");
        assert_eq!(cli.performance_csv, "b.csv");
    }
}
