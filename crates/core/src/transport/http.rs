use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use super::traits::ApiTransport;
use crate::errors::CoreError;

/// Error bodies are trimmed to this many characters before they end up
/// inside a `CoreError::Api` message.
const MAX_ERROR_BODY_CHARS: usize = 200;

/// JSON-over-HTTP transport against the pension backend.
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// `base_url` is the API root, e.g. `https://api.example.com/api/v1`.
    /// A trailing slash is tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Decode a response. Non-2xx becomes `CoreError::Api` carrying a
    /// trimmed excerpt of the body (or the canonical reason when the
    /// body is empty); an empty 2xx body becomes JSON null.
    async fn decode(resp: reqwest::Response) -> Result<Value, CoreError> {
        let status = resp.status();
        if !status.is_success() {
            let message = match resp.text().await {
                Ok(body) if !body.trim().is_empty() => {
                    truncate_chars(body.trim(), MAX_ERROR_BODY_CHARS)
                }
                _ => status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string(),
            };
            return Err(CoreError::Api {
                status: status.as_u16(),
                message,
            });
        }
        let body = resp.text().await?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max).collect()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ApiTransport for HttpTransport {
    async fn get(&self, path: &str) -> Result<Value, CoreError> {
        let resp = self.client.get(self.url(path)).send().await?;
        Self::decode(resp).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, CoreError> {
        let resp = self.client.post(self.url(path)).json(body).send().await?;
        Self::decode(resp).await
    }

    async fn put(&self, path: &str, body: &Value) -> Result<Value, CoreError> {
        let resp = self.client.put(self.url(path)).json(body).send().await?;
        Self::decode(resp).await
    }

    async fn delete(&self, path: &str) -> Result<(), CoreError> {
        let resp = self.client.delete(self.url(path)).send().await?;
        Self::decode(resp).await.map(|_| ())
    }
}
