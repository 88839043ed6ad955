use crate::domain::model::RawResponse;
use crate::domain::ports::AvatarSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// reqwest-backed source. Plain GET: no custom headers, no timeout, no retry.
#[derive(Debug, Clone, Default)]
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl AvatarSource for HttpSource {
    async fn fetch(&self, url: &str) -> Result<RawResponse> {
        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status().as_u16();
        tracing::debug!("API response status: {}", status);

        // Body read failures count as transport failures, like the send above.
        let body = response.text().await?;

        Ok(RawResponse { status, body })
    }
}
