//! Layered YAML configuration.
//!
//! Documents are merged in order (later overrides earlier), converted to
//! JSON, checked for inline credentials and hashed over their
//! canonical JSON form. [`AppConfig`] is the typed view the binaries read.

use anyhow::{Context, Result};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fs;

mod app;
mod pointer;
mod secrets;
mod unused;

pub use app::{
    AppConfig, CacheConfig, CruiseConfig, ResidencyConfig, RulesConfig, TaxYearsConfig,
    WindowConfig, CACHE_URL_ENV,
};
pub use unused::{
    consumed_pointers_for_scope, report_unused_keys, ConfigScope, UnusedKeyPolicy,
    UnusedKeyReport,
};

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config_hash: String,
    pub canonical_json: String,
    pub config_json: Value,
}

impl LoadedConfig {
    /// Typed view over the merged document. Missing keys take defaults.
    pub fn app(&self) -> Result<AppConfig> {
        AppConfig::from_json(&self.config_json)
    }
}

/// Reads and merges `paths` in order.
pub fn load_layered_yaml(paths: &[&str]) -> Result<LoadedConfig> {
    let docs = paths
        .iter()
        .map(|p| fs::read_to_string(p).with_context(|| format!("failed to read yaml path: {p}")))
        .collect::<Result<Vec<String>>>()?;
    let doc_refs: Vec<&str> = docs.iter().map(String::as_str).collect();
    load_layered_yaml_from_strings(&doc_refs)
}

/// Blank or `null` documents are empty layers.
pub fn load_layered_yaml_from_strings(yaml_docs: &[&str]) -> Result<LoadedConfig> {
    let mut merged = Value::Object(Default::default());
    for (i, raw) in yaml_docs.iter().enumerate() {
        let layer: serde_yaml::Value =
            serde_yaml::from_str(raw).with_context(|| format!("invalid yaml in layer {i}"))?;
        if layer.is_null() {
            continue;
        }
        let layer = serde_json::to_value(layer)
            .with_context(|| format!("layer {i} is not representable as json"))?;
        deep_merge(&mut merged, layer);
    }

    secrets::enforce_no_secret_literals(&merged)?;

    // serde_json::Map is key-sorted, so compact output is canonical.
    let canonical_json = serde_json::to_string(&merged).context("canonical json serialize failed")?;
    let config_hash = hex::encode(Sha256::digest(canonical_json.as_bytes()));
    Ok(LoadedConfig {
        config_hash,
        canonical_json,
        config_json: merged,
    })
}

/// Objects merge key by key; anything else in `overlay` replaces `base`.
fn deep_merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (k, v) in overlay_map {
                deep_merge(base_map.entry(k).or_insert(Value::Null), v);
            }
        }
        (slot, v) => *slot = v,
    }
}
