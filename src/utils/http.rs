//! HTTP utilities for URL import

use anyhow::Result;
use std::time::Duration;
use url::Url;

/// Fetch content from a URL
pub fn fetch_url(url_str: &str) -> Result<String> {
    let url = Url::parse(url_str)?;

    // Validate scheme
    if url.scheme() != "https" && url.scheme() != "http" {
        anyhow::bail!("Only HTTP/HTTPS URLs are supported");
    }

    let response = ureq::get(url_str).timeout(Duration::from_secs(30)).call()?;

    if response.status() < 200 || response.status() >= 300 {
        anyhow::bail!("HTTP request failed with status: {}", response.status());
    }

    let content = response.into_string()?;
    Ok(content)
}

/// Check if a string is a valid URL
pub fn is_url(s: &str) -> bool {
    if let Ok(url) = Url::parse(s) {
        url.scheme() == "http" || url.scheme() == "https"
    } else {
        false
    }
}

/// File name component of a URL path, for naming imported fragments
pub fn url_file_name(url_str: &str) -> Option<String> {
    let url = Url::parse(url_str).ok()?;
    url.path_segments()?
        .filter(|s| !s.is_empty())
        .last()
        .map(|s| s.to_string())
}
