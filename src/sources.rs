use serde::de::DeserializeOwned;
use std::path::Path;
use std::time::Duration;

#[derive(Debug)]
pub struct SourceError(pub String);

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for SourceError {}

fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Fetch a container's JSON data source once: an http(s) URL is downloaded,
/// anything else is a file path relative to `root`.
pub fn fetch_json<T: DeserializeOwned>(source: &str, root: &Path) -> Result<T, SourceError> {
    if is_remote(source) {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| SourceError(format!("HTTP client error: {}", e)))?;
        let resp = client
            .get(source)
            .send()
            .map_err(|e| SourceError(format!("Fetching {} failed: {}", source, e)))?;
        if !resp.status().is_success() {
            return Err(SourceError(format!("{} returned {}", source, resp.status())));
        }
        resp.json::<T>()
            .map_err(|e| SourceError(format!("{} is not valid JSON data: {}", source, e)))
    } else {
        let path = root.join(source.trim_start_matches('/'));
        let raw = std::fs::read_to_string(&path)
            .map_err(|e| SourceError(format!("Cannot read {}: {}", path.display(), e)))?;
        serde_json::from_str(&raw)
            .map_err(|e| SourceError(format!("{} is not valid JSON data: {}", path.display(), e)))
    }
}
