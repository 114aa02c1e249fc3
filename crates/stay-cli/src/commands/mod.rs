//! Command handler modules for the `stay` binary.
//!
//! Shared utilities used by multiple command paths live here.
//! Command-specific logic lives in the submodules.

pub mod cruise;
pub mod report;
pub mod store;

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use tracing::{debug, warn};

use stay_config::{report_unused_keys, AppConfig, ConfigScope, UnusedKeyPolicy};
use stay_schemas::StayRecord;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Typed config for one command family. No paths means built-in defaults.
/// Keys the scope does not read are logged, never fatal.
pub fn load_app_config(paths: &[String], scope: ConfigScope) -> Result<AppConfig> {
    let mut cfg = if paths.is_empty() {
        AppConfig::default()
    } else {
        let path_refs: Vec<&str> = paths.iter().map(|s| s.as_str()).collect();
        let loaded = stay_config::load_layered_yaml(&path_refs)?;
        let unused = report_unused_keys(scope, &loaded.config_json, UnusedKeyPolicy::Warn)?;
        for pointer in &unused.unused_leaf_pointers {
            warn!(scope = %unused.scope, pointer = %pointer, "config key not read by this command");
        }
        debug!(config_hash = %loaded.config_hash, "config loaded");
        loaded.app()?
    };
    cfg.apply_env(|k| std::env::var(k).ok());
    Ok(cfg)
}

/// Reads a JSON file, tolerating a UTF-8 BOM.
pub fn read_json_file(path: &str) -> Result<Value> {
    let bytes = fs::read(path).with_context(|| format!("read failed: {}", path))?;
    let bytes = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(&bytes);
    let raw = String::from_utf8(bytes.to_vec())
        .with_context(|| format!("{} must be UTF-8 text", path))?;
    serde_json::from_str(raw.trim()).with_context(|| format!("{} must contain valid JSON", path))
}

/// A bare array, or a cache body (`{data: [...]}` / `{caches: [{data: [...]}]}`).
pub fn json_list(v: Value, path: &str) -> Result<Value> {
    if v.is_array() {
        return Ok(v);
    }
    stay_store::extract_data(&v)
        .with_context(|| format!("{} must hold a JSON array or a cache body with data", path))
}

pub fn load_trips_file(path: &str) -> Result<Vec<StayRecord>> {
    let list = json_list(read_json_file(path)?, path)?;
    serde_json::from_value(list).with_context(|| format!("{} is not a list of stays", path))
}

/// Execute `stay config-hash`.
pub fn config_hash(paths: &[String]) -> Result<()> {
    let path_refs: Vec<&str> = paths.iter().map(|s| s.as_str()).collect();
    let loaded = stay_config::load_layered_yaml(&path_refs)?;
    // Typed validation runs before anything is printed.
    loaded.app()?;

    let unused = report_unused_keys(ConfigScope::All, &loaded.config_json, UnusedKeyPolicy::Warn)?;
    for pointer in &unused.unused_leaf_pointers {
        warn!(pointer = %pointer, "config key is not read by any command");
    }

    println!("config_hash={}", loaded.config_hash);
    println!("unused_keys={}", unused.unused_leaf_pointers.len());
    println!("{}", loaded.canonical_json);
    Ok(())
}
