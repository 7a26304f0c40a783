//! HTTP list source
//!
//! Fetches a JSON document with a plain GET request.

use log::debug;
use reqwest::Client as HttpClient;
use serde_json::Value;

use super::ListSource;
use crate::errors::SourceError;

/// Source fetching the list from a URL
#[derive(Debug, Clone)]
pub struct HttpSource {
    /// URL of the JSON document
    url: String,
    /// Client HTTP
    http_client: HttpClient,
}

impl HttpSource {
    /// Create a source for the given URL with a default client
    pub fn new<S: Into<String>>(url: S) -> Self {
        Self::with_client(url, HttpClient::new())
    }

    /// Create a source reusing an existing client
    pub fn with_client<S: Into<String>>(url: S, http_client: HttpClient) -> Self {
        HttpSource {
            url: url.into(),
            http_client,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ListSource for HttpSource {
    type Output = Value;
    type Error = SourceError;

    async fn build_list(&self) -> Result<Value, SourceError> {
        debug!("GET {}", self.url);

        let response = self.http_client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                url: self.url.clone(),
                status,
            });
        }

        Ok(response.json().await?)
    }
}
