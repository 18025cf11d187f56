// loader.rs
use crate::config::ListingSource;
use crate::domain::Listing;
use crate::errors::LoadError;
use reqwest::blocking::Client;
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Read the listings resource once and parse it.
pub fn load_listings(source: &ListingSource, timeout: Duration) -> Result<Vec<Listing>, LoadError> {
    log::info!("Loading listings from {source}");

    let body = match source {
        ListingSource::File(path) => read_file(path)?,
        ListingSource::Url(url) => fetch(url, timeout)?,
    };

    parse_listings(&body)
}

/// The resource must be a top-level JSON array of objects.
pub fn parse_listings(body: &str) -> Result<Vec<Listing>, LoadError> {
    let listings: Vec<Listing> = serde_json::from_str(body)?;
    Ok(listings)
}

fn read_file(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn fetch(url: &Url, timeout: Duration) -> Result<String, LoadError> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()?;

    let resp = client.get(url.as_str()).send()?;

    let status = resp.status();
    if !status.is_success() {
        return Err(LoadError::Status(status.as_u16()));
    }

    Ok(resp.text()?)
}
