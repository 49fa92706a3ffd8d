use std::path::Path;
use std::time::Duration;

use log::{info, warn};
use reqwest::Client;
use tokio::fs;

use crate::assets::models::Model;
use crate::assets::parser::parse_obj;
use crate::config::core::HttpConfig;
use crate::utils::error::{LoadError, RetrievalError};

/// Retrieves OBJ source text from an HTTP(S) URL or the local filesystem.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(config: &HttpConfig) -> Result<Self, RetrievalError> {
        let mut builder = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone());
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Fetches the whole document at `location` as one string.
    ///
    /// `http://` and `https://` locations go over the network, anything else
    /// is read from disk. `file://` URLs may name `localhost` as their host;
    /// any other host is taken as the start of a relative path.
    pub async fn fetch(&self, location: &str) -> Result<String, RetrievalError> {
        if is_remote(location) {
            self.fetch_remote(location).await
        } else {
            fetch_file(Path::new(local_path(location))).await
        }
    }

    async fn fetch_remote(&self, url: &str) -> Result<String, RetrievalError> {
        info!("Fetching {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} answered {}", url, status);
            return Err(RetrievalError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        Ok(response.text().await?)
    }
}

fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

fn local_path(location: &str) -> &str {
    match location.strip_prefix("file://") {
        Some(rest) => rest
            .strip_prefix("localhost")
            .filter(|path| path.starts_with('/'))
            .unwrap_or(rest),
        None => location,
    }
}

async fn fetch_file(path: &Path) -> Result<String, RetrievalError> {
    info!("Reading {}", path.display());
    Ok(fs::read_to_string(path).await?)
}

/// Retrieves `location` and parses it. Retrieval finishes before parsing starts.
pub async fn load_obj(fetcher: &Fetcher, location: &str) -> Result<Model, LoadError> {
    let text = fetcher.fetch(location).await?;
    Ok(parse_obj(&text)?)
}
