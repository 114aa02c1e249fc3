use serde_json::Value;
use stay_schemas::StayRecord;
use tracing::{info, warn};

use crate::cache::{CacheBackend, SaveMethod};
use crate::defaults::default_trips;
use crate::error::StoreError;

/// Where the stays returned by [`TripStore::load`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    Cache,
    /// Cache empty or missing; defaults were returned (and saved).
    Defaults,
    /// Cache unreachable or unreadable; nothing returned.
    Unavailable,
}

impl LoadSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadSource::Cache => "cache",
            LoadSource::Defaults => "defaults",
            LoadSource::Unavailable => "unavailable",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedTrips {
    pub stays: Vec<StayRecord>,
    pub source: LoadSource,
}

/// The planner's stays persisted under one cache key.
#[derive(Debug)]
pub struct TripStore<B> {
    backend: B,
    key: String,
    ttl_seconds: Option<u64>,
}

impl<B: CacheBackend> TripStore<B> {
    pub fn new(backend: B, key: impl Into<String>, ttl_seconds: Option<u64>) -> Self {
        Self {
            backend,
            key: key.into(),
            ttl_seconds,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Never fails: backend errors degrade to an empty list.
    pub async fn load(&self) -> LoadedTrips {
        let cached = match self.fetch_stays().await {
            Ok(stays) => stays,
            Err(e) => {
                warn!(key = %self.key, error = %e, "trip load failed");
                return LoadedTrips {
                    stays: Vec::new(),
                    source: LoadSource::Unavailable,
                };
            }
        };

        if !cached.is_empty() {
            info!(key = %self.key, count = cached.len(), "trips loaded from cache");
            return LoadedTrips {
                stays: cached,
                source: LoadSource::Cache,
            };
        }

        let defaults = default_trips();
        if let Err(e) = self.save(&defaults).await {
            warn!(key = %self.key, error = %e, "saving default trips failed");
        }
        LoadedTrips {
            stays: defaults,
            source: LoadSource::Defaults,
        }
    }

    pub async fn save(&self, stays: &[StayRecord]) -> Result<Value, StoreError> {
        let data = serde_json::to_value(stays)?;
        self.backend
            .store(&self.key, &data, self.ttl_seconds, SaveMethod::Put)
            .await
    }

    /// Saves and returns the default trips.
    pub async fn reset(&self) -> Result<Vec<StayRecord>, StoreError> {
        let defaults = default_trips();
        self.save(&defaults).await?;
        Ok(defaults)
    }

    async fn fetch_stays(&self) -> Result<Vec<StayRecord>, StoreError> {
        match self.backend.fetch(&self.key).await? {
            Some(data) => Ok(serde_json::from_value(data)?),
            None => Ok(Vec::new()),
        }
    }
}
