//! Trip source that GETs the document over HTTP.

use async_trait::async_trait;
use reqwest::Client;
use tripview_core::trip::TripSource;
use tripview_core::{Result, TripviewError};

/// Retrieves the trip document with a single GET.
///
/// No retry and no timeout of its own; the client's defaults apply.
#[derive(Clone)]
pub struct HttpTripSource {
    client: Client,
    url: String,
}

impl HttpTripSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), url)
    }

    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl TripSource for HttpTripSource {
    async fn fetch(&self) -> Result<String> {
        tracing::debug!("[HttpTripSource] GET {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|err| TripviewError::fetch(format!("request failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("[HttpTripSource] {} answered {}", self.url, status);
            return Err(TripviewError::fetch(format!("HTTP {status}")));
        }

        response
            .text()
            .await
            .map_err(|err| TripviewError::fetch(format!("failed to read response body: {err}")))
    }

    fn location(&self) -> String {
        self.url.clone()
    }
}
