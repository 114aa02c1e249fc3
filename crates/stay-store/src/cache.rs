//! Key/value cache behind a small HTTP JSON API.
//!
//! - `GET  {base}?key=K`  -> `{caches: [{data: ...}]}` (or `{data: ...}`); 404 when absent
//! - `GET  {base}`        -> every entry, shape left to the server
//! - `PUT|POST {base}`    -> body `{key, data, ttl}`; PUT updates, POST creates

use std::collections::BTreeMap;

use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error::StoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMethod {
    Put,
    Post,
}

impl SaveMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            SaveMethod::Put => "PUT",
            SaveMethod::Post => "POST",
        }
    }

    /// The method to retry with after `status`, if any.
    fn fallback(&self, status: u16) -> Option<SaveMethod> {
        match (self, status) {
            (SaveMethod::Put, 404) => Some(SaveMethod::Post),
            (SaveMethod::Post, 409) => Some(SaveMethod::Put),
            _ => None,
        }
    }
}

/// Cache contract. Object-safe so callers can hold `Box<dyn CacheBackend>`.
#[async_trait::async_trait]
pub trait CacheBackend: Send + Sync {
    /// The stored `data` for `key`, or `None` when the key is absent.
    async fn fetch(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Writes `data` under `key`. `method` is the preferred verb; a PUT on a
    /// missing key retries as POST, a POST on an existing key retries as PUT.
    async fn store(
        &self,
        key: &str,
        data: &Value,
        ttl_seconds: Option<u64>,
        method: SaveMethod,
    ) -> Result<Value, StoreError>;

    /// Raw listing of every cached entry.
    async fn fetch_all(&self) -> Result<Value, StoreError>;
}

/// Pulls the payload out of a keyed GET response.
pub fn extract_data(body: &Value) -> Option<Value> {
    let nested = body
        .get("caches")
        .and_then(Value::as_array)
        .and_then(|caches| caches.first())
        .and_then(|c| c.get("data"));
    let flat = body.get("data");

    nested
        .or(flat)
        .filter(|d| d.is_array())
        .cloned()
}

// ---------------------------------------------------------------------------
// HTTP backend
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct HttpCache {
    http: reqwest::Client,
    base_url: String,
}

impl HttpCache {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send_save(
        &self,
        method: SaveMethod,
        body: &Value,
    ) -> Result<reqwest::Response, StoreError> {
        let req = match method {
            SaveMethod::Put => self.http.put(&self.base_url),
            SaveMethod::Post => self.http.post(&self.base_url),
        };
        Ok(req.json(body).send().await?)
    }
}

/// Body text of a 2xx response; anything else becomes `StoreError::Http`.
async fn read_success(resp: reqwest::Response) -> Result<String, StoreError> {
    let status = resp.status();
    let body = resp.text().await?;
    if !status.is_success() {
        return Err(StoreError::Http {
            status: status.as_u16(),
            body,
        });
    }
    Ok(body)
}

#[async_trait::async_trait]
impl CacheBackend for HttpCache {
    async fn fetch(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let resp = self
            .http
            .get(&self.base_url)
            .query(&[("key", key)])
            .send()
            .await?;

        if resp.status() == StatusCode::NOT_FOUND {
            debug!(key, "cache miss");
            return Ok(None);
        }

        let text = read_success(resp).await?;
        let body: Value = serde_json::from_str(&text)?;
        let data = extract_data(&body);
        if data.is_none() {
            debug!(key, "cache entry has no data array");
        }
        Ok(data)
    }

    async fn store(
        &self,
        key: &str,
        data: &Value,
        ttl_seconds: Option<u64>,
        method: SaveMethod,
    ) -> Result<Value, StoreError> {
        let body = json!({ "key": key, "data": data, "ttl": ttl_seconds });

        let mut used = method;
        let mut resp = self.send_save(method, &body).await?;
        if let Some(next) = method.fallback(resp.status().as_u16()) {
            info!(
                key,
                from = method.as_str(),
                to = next.as_str(),
                status = resp.status().as_u16(),
                "cache save retry"
            );
            used = next;
            resp = self.send_save(next, &body).await?;
        }

        let text = read_success(resp).await?;
        info!(key, method = used.as_str(), "cache saved");
        // Some servers answer 2xx with an empty or non-JSON body.
        Ok(serde_json::from_str(&text).unwrap_or(Value::Null))
    }

    async fn fetch_all(&self) -> Result<Value, StoreError> {
        let resp = self.http.get(&self.base_url).send().await?;
        let text = read_success(resp).await?;
        Ok(serde_json::from_str(&text)?)
    }
}

// ---------------------------------------------------------------------------
// In-process backend
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
struct MemoryEntry {
    data: Value,
    ttl_seconds: Option<u64>,
}

/// Same semantics as [`HttpCache`], held in memory. TTLs are recorded but
/// never expire entries.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<BTreeMap<String, MemoryEntry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn ttl_of(&self, key: &str) -> Option<Option<u64>> {
        self.entries.lock().await.get(key).map(|e| e.ttl_seconds)
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

#[async_trait::async_trait]
impl CacheBackend for MemoryCache {
    async fn fetch(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self
            .entries
            .lock()
            .await
            .get(key)
            .map(|e| e.data.clone())
            .filter(Value::is_array))
    }

    async fn store(
        &self,
        key: &str,
        data: &Value,
        ttl_seconds: Option<u64>,
        method: SaveMethod,
    ) -> Result<Value, StoreError> {
        let mut entries = self.entries.lock().await;
        let exists = entries.contains_key(key);
        let used = match (method, exists) {
            (SaveMethod::Put, false) => SaveMethod::Post,
            (SaveMethod::Post, true) => SaveMethod::Put,
            (m, _) => m,
        };
        entries.insert(
            key.to_string(),
            MemoryEntry {
                data: data.clone(),
                ttl_seconds,
            },
        );
        Ok(json!({ "success": true, "key": key, "method": used.as_str() }))
    }

    async fn fetch_all(&self) -> Result<Value, StoreError> {
        let entries = self.entries.lock().await;
        let caches: Vec<Value> = entries
            .iter()
            .map(|(k, e)| json!({ "key": k, "data": e.data, "ttl": e.ttl_seconds }))
            .collect();
        Ok(json!({ "caches": caches }))
    }
}
