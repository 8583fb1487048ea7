use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

use super::traits::ApiTransport;
use crate::errors::CoreError;

/// Typed wrapper over the raw transport: every response body passes
/// through exactly one decode point, so a schema drift shows up as a
/// single `Deserialization` error instead of scattered parse failures.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn ApiTransport>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, CoreError> {
        let value = self.transport.get(path).await?;
        from_value(value)
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &Value,
    ) -> Result<T, CoreError> {
        let value = self.transport.post(path, body).await?;
        from_value(value)
    }

    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &Value,
    ) -> Result<T, CoreError> {
        let value = self.transport.put(path, body).await?;
        from_value(value)
    }

    /// POST where the response body does not matter (often empty).
    pub async fn post_unit(&self, path: &str, body: &Value) -> Result<(), CoreError> {
        self.transport.post(path, body).await.map(|_| ())
    }

    /// PUT where the response body does not matter (often empty).
    pub async fn put_unit(&self, path: &str, body: &Value) -> Result<(), CoreError> {
        self.transport.put(path, body).await.map(|_| ())
    }

    pub async fn delete(&self, path: &str) -> Result<(), CoreError> {
        self.transport.delete(path).await
    }
}

fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, CoreError> {
    serde_json::from_value(value).map_err(CoreError::from)
}
