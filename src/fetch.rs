//! HTTP fetching with a fixed browser identity and bounded timeouts.
//!
//! Every request in the pipeline goes through here. Two timeout classes
//! exist: listing pages get a shorter budget than article pages, since a
//! slow index is a worse signal than a slow post. A timeout or non-2xx
//! status surfaces as an ordinary error for the caller to treat as a
//! per-item fetch failure.

use reqwest::Client;
use std::error::Error;
use std::time::{Duration, Instant};
use tracing::{debug, instrument, warn};

/// Identity header sent with every request.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Request budget for a company's blog listing page.
pub const LISTING_TIMEOUT: Duration = Duration::from_secs(10);

/// Request budget for an individual article page.
pub const ARTICLE_TIMEOUT: Duration = Duration::from_secs(15);

/// Build a client with the fixed identity header and the given timeout.
pub fn build_client(timeout: Duration) -> Result<Client, Box<dyn Error>> {
    let client = Client::builder()
        .user_agent(BROWSER_USER_AGENT)
        .timeout(timeout)
        .build()?;
    Ok(client)
}

/// Fetch a URL and return its body as text.
///
/// Non-2xx responses and timeouts are errors; callers decide whether that
/// is fatal (it never is inside the per-article loop).
#[instrument(level = "debug", skip_all, fields(%url))]
pub async fn fetch_html(client: &Client, url: &str) -> Result<String, Box<dyn Error>> {
    let t0 = Instant::now();
    let response = client.get(url).send().await?.error_for_status()?;
    let body = response.text().await?;
    let dt = t0.elapsed();
    if dt > Duration::from_secs(5) {
        warn!(elapsed_ms = dt.as_millis() as u64, "Slow fetch");
    }
    debug!(bytes = body.len(), elapsed_ms = dt.as_millis() as u64, "Fetched page");
    Ok(body)
}
