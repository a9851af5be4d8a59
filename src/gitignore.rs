//! .gitignore template source
//!
//! The template is fetched from github/gitignore by default. Config may point
//! it at a local file instead, which is also what the tests do.

use crate::error::{CreateError, Result};
use std::path::Path;
use std::time::Duration;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Anything that can produce the body of a .gitignore
pub trait TemplateFetcher {
    fn fetch(&self, source: &str) -> Result<String>;
}

/// Fetches http(s) URLs with a blocking client; other sources are read as files
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpFetcher;

impl TemplateFetcher for HttpFetcher {
    fn fetch(&self, source: &str) -> Result<String> {
        if is_remote(source) {
            fetch_url(source)
        } else {
            read_local(Path::new(source.strip_prefix("file://").unwrap_or(source)))
        }
    }
}

/// Always returns the same body. Used where the network is off limits.
#[derive(Debug, Clone)]
pub struct StaticFetcher(pub String);

impl TemplateFetcher for StaticFetcher {
    fn fetch(&self, _source: &str) -> Result<String> {
        Ok(self.0.clone())
    }
}

fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

fn fetch_url(url: &str) -> Result<String> {
    let network = |message: String| CreateError::Network {
        url: url.to_string(),
        message,
    };

    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .user_agent(concat!("seedling/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| network(e.to_string()))?;

    let response = client.get(url).send().map_err(|e| network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(network(format!("HTTP {}", response.status())));
    }

    response.text().map_err(|e| network(e.to_string()))
}

fn read_local(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| CreateError::Network {
        url: path.display().to_string(),
        message: e.to_string(),
    })
}
