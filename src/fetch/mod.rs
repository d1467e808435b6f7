//! Loading raw input bytes from disk or over HTTP.

mod basic;
mod client;

pub use basic::BasicClient;
pub use client::HttpClient;

use anyhow::{Context, Result};
use tracing::debug;

/// Issues a GET for `url` and returns the response body.
///
/// Non-success status codes are errors.
pub async fn fetch_bytes<C: HttpClient>(client: &C, url: &str) -> Result<Vec<u8>> {
    let req = reqwest::Request::new(reqwest::Method::GET, url.parse()?);

    let resp = client.execute(req).await?.error_for_status()?;
    Ok(resp.bytes().await?.to_vec())
}

/// Reads the trip dataset from a local path or, when `source` starts with
/// `http`, fetches it with `client`.
#[tracing::instrument(skip(client))]
pub async fn load_source<C: HttpClient>(client: &C, source: &str) -> Result<Vec<u8>> {
    let bytes = if source.starts_with("http") {
        fetch_bytes(client, source).await?
    } else {
        std::fs::read(source).with_context(|| format!("failed to read input '{source}'"))?
    };
    debug!(bytes = bytes.len(), "Input loaded");
    Ok(bytes)
}
