//! Download of missing corpus files.

use std::path::{Path, PathBuf};

use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info};

use porter_core::{Error, PorterConfig, Result};

/// Which corpus files were downloaded and which were already present.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FetchSummary {
    pub downloaded: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    pub bytes: u64,
}

/// Download each corpus file that is not already on disk.
pub async fn ensure_corpus(config: &PorterConfig) -> Result<FetchSummary> {
    let client = Client::builder()
        .timeout(config.http_timeout())
        .build()
        .map_err(|e| Error::Http(format!("Failed to build HTTP client: {}", e)))?;
    ensure_corpus_with(&client, config).await
}

/// [`ensure_corpus`] with a caller-supplied client.
pub async fn ensure_corpus_with(client: &Client, config: &PorterConfig) -> Result<FetchSummary> {
    let paths = &config.corpus_paths;
    tokio::fs::create_dir_all(&paths.root).await?;

    let mut summary = FetchSummary::default();
    for (url, path) in [
        (config.voc_url.as_str(), &paths.voc),
        (config.output_url.as_str(), &paths.output),
    ] {
        if path.is_file() {
            debug!("Already present: {}", path.display());
            summary.skipped.push(path.clone());
            continue;
        }
        summary.bytes += download(client, url, path).await?;
        summary.downloaded.push(path.clone());
    }
    Ok(summary)
}

async fn download(client: &Client, url: &str, path: &Path) -> Result<u64> {
    info!("Downloading {} → {}", url, path.display());

    let resp = client
        .get(url)
        .send()
        .await
        .map_err(|e| Error::Http(format!("{}: {}", url, e)))?;
    if !resp.status().is_success() {
        return Err(Error::Http(format!("{} returned {}", url, resp.status())));
    }
    let body = resp
        .bytes()
        .await
        .map_err(|e| Error::Http(format!("{}: {}", url, e)))?;

    // Write beside the target and rename so an interrupted download never
    // leaves a truncated corpus file behind.
    let partial = path.with_extension("part");
    tokio::fs::write(&partial, &body).await?;
    tokio::fs::rename(&partial, path).await?;

    info!("Saved {} bytes to {}", body.len(), path.display());
    Ok(body.len() as u64)
}
