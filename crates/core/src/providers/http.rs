use async_trait::async_trait;
use reqwest::Client;

use crate::errors::CoreError;
use super::traits::DataSource;

/// Fetches the CSV file over HTTP.
///
/// Any non-success status is reported as `CoreError::HttpStatus`; the
/// body of an error page is never handed to the parser.
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl DataSource for HttpSource {
    fn describe(&self) -> String {
        format!("HTTP {}", self.url)
    }

    async fn fetch_text(&self) -> Result<String, CoreError> {
        let resp = self.client.get(&self.url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CoreError::HttpStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        Ok(resp.text().await?)
    }
}
