use std::{fmt::Debug, path::PathBuf};

use log::{debug, info, warn};
use reqwest::IntoUrl;
use scraper::Html;

pub fn parse_document(text: &str) -> Html {
    Html::parse_document(text)
}

/// Reads and parses a local HTML file.
/// The caller is expected to have checked that the file exists.
pub fn load_file(path: impl Into<PathBuf> + Debug) -> anyhow::Result<Html> {
    let path = path.into();
    let bytes = fs_err::read(&path)?;
    info!("Loaded {} bytes from {path:?}", bytes.len());
    Ok(parse_document(&String::from_utf8_lossy(&bytes)))
}

pub fn reqwest_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().connection_verbose(true).build()
}

/// Fetches `url` with a single GET and parses whatever body comes back.
/// The status code is not checked; an error page is checked like any other page.
pub async fn fetch_url(client: &reqwest::Client, url: impl IntoUrl) -> anyhow::Result<Html> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        warn!("{} responded with {status}", response.url());
    } else {
        debug!("{} responded with {status}", response.url());
    }
    let url = response.url().clone();
    let body = response.text().await?;
    info!("Fetched {} bytes from {url}", body.len());
    Ok(parse_document(&body))
}
