//! Job-posting fetcher — pulls a job description from a URL via the Jina
//! reader proxy, which renders the page to readable plain text.
//!
//! Best-effort by contract: any failure returns an empty string and the
//! caller falls back to a generic job context.

use tracing::{info, warn};

const JINA_READER_PREFIX: &str = "https://r.jina.ai/";

fn reader_url(job_url: &str) -> String {
    format!("{JINA_READER_PREFIX}{job_url}")
}

/// Fetches the text of a job posting. Returns `""` on any network or HTTP
/// failure — the analyze flow treats an empty job description as "use the
/// generic context", never as an error.
pub async fn fetch_job_text(client: &reqwest::Client, job_url: &str) -> String {
    info!("fetching job description from {job_url}");

    let response = match client.get(reader_url(job_url)).send().await {
        Ok(r) => r,
        Err(e) => {
            warn!("job fetch failed for {job_url}: {e}");
            return String::new();
        }
    };

    if !response.status().is_success() {
        warn!(
            "job fetch for {job_url} returned status {}",
            response.status()
        );
        return String::new();
    }

    match response.text().await {
        Ok(text) => text.trim().to_string(),
        Err(e) => {
            warn!("job fetch body read failed for {job_url}: {e}");
            String::new()
        }
    }
}
