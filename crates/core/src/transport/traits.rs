use async_trait::async_trait;
use serde_json::Value;

use crate::errors::CoreError;

/// Trait abstraction over the four HTTP verbs this library needs.
///
/// The REST backend is the only real implementation; tests swap in a
/// scripted mock. Bodies travel as JSON values so the trait stays
/// object-safe and one shared transport can serve every operation.
///
/// HTTP failures surface as `CoreError::Api` (non-2xx) or
/// `CoreError::Network` (no response at all).
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ApiTransport: Send + Sync {
    async fn get(&self, path: &str) -> Result<Value, CoreError>;

    async fn post(&self, path: &str, body: &Value) -> Result<Value, CoreError>;

    async fn put(&self, path: &str, body: &Value) -> Result<Value, CoreError>;

    async fn delete(&self, path: &str) -> Result<(), CoreError>;
}
