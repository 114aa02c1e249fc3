//! Trip store command handlers: `stay store pull|push|reset`.

use anyhow::{Context, Result};
use std::fs;
use tracing::info;

use stay_config::{AppConfig, ConfigScope};
use stay_store::{HttpCache, LoadSource, TripStore};

use super::{load_app_config, load_trips_file};

fn trip_store(cfg: &AppConfig) -> TripStore<HttpCache> {
    TripStore::new(
        HttpCache::new(cfg.cache.base_url.clone()),
        cfg.cache.trips_key.clone(),
        cfg.cache.ttl_seconds,
    )
}

/// Execute `stay store pull`.
pub async fn pull(config_paths: &[String], out: Option<&str>) -> Result<()> {
    let cfg = load_app_config(config_paths, ConfigScope::Store)?;
    let store = trip_store(&cfg);

    let loaded = store.load().await;
    if loaded.source == LoadSource::Unavailable {
        anyhow::bail!(
            "trip cache unavailable: base_url={} key={}",
            cfg.cache.base_url,
            store.key()
        );
    }

    let json =
        serde_json::to_string_pretty(&loaded.stays).context("serialize stays json failed")?;

    println!("trips_source={}", loaded.source.as_str());
    println!("trips_count={}", loaded.stays.len());
    match out {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("write trips failed: {}", path))?;
            println!("out_path={}", path);
        }
        None => println!("{}", json),
    }
    Ok(())
}

/// Execute `stay store push`.
pub async fn push(config_paths: &[String], trips_path: &str) -> Result<()> {
    let cfg = load_app_config(config_paths, ConfigScope::Store)?;
    let stays = load_trips_file(trips_path)?;
    let store = trip_store(&cfg);

    store
        .save(&stays)
        .await
        .with_context(|| format!("push to key '{}' failed", store.key()))?;
    info!(key = %store.key(), count = stays.len(), "trips pushed");

    println!("pushed=true key={} count={}", store.key(), stays.len());
    Ok(())
}

/// Execute `stay store reset`.
pub async fn reset(config_paths: &[String]) -> Result<()> {
    let cfg = load_app_config(config_paths, ConfigScope::Store)?;
    let store = trip_store(&cfg);

    let stays = store
        .reset()
        .await
        .with_context(|| format!("reset of key '{}' failed", store.key()))?;

    println!("reset=true key={} count={}", store.key(), stays.len());
    Ok(())
}
