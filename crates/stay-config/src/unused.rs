//! Unused-key lint.
//!
//! "Consumed pointers" are JSON Pointer prefixes. A leaf under any consumed
//! prefix is consumed; every other leaf is reported as unused.
//!
//! - "/rules" consumes "/rules/schengen/limit_days"
//! - "/cache/base_url" consumes "/cache/base_url" but not "/cache/base_url2"

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

use crate::pointer;

/// Which command family is reading the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigScope {
    /// Offline day accounting (report, schengen, cities, uk-tax).
    Report,
    /// Trip cache sync.
    Store,
    /// Cruise catalog.
    Cruise,
    /// Everything any command reads.
    All,
}

impl ConfigScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigScope::Report => "REPORT",
            ConfigScope::Store => "STORE",
            ConfigScope::Cruise => "CRUISE",
            ConfigScope::All => "ALL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnusedKeyPolicy {
    Warn,
    Fail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnusedKeyReport {
    pub scope: String,
    /// Sorted, unique.
    pub consumed_prefixes: Vec<String>,
    /// Sorted.
    pub unused_leaf_pointers: Vec<String>,
}

impl UnusedKeyReport {
    pub fn is_clean(&self) -> bool {
        self.unused_leaf_pointers.is_empty()
    }
}

/// Config sections each command family reads.
pub fn consumed_pointers_for_scope(scope: ConfigScope) -> &'static [&'static str] {
    match scope {
        ConfigScope::Report => &["/rules"],
        ConfigScope::Store => &["/cache"],
        ConfigScope::Cruise => &["/cache", "/cruise"],
        ConfigScope::All => &["/rules", "/cache", "/cruise"],
    }
}

/// `Fail` errors when unused keys exist; `Warn` always returns the report.
pub fn report_unused_keys(
    scope: ConfigScope,
    config_json: &Value,
    policy: UnusedKeyPolicy,
) -> Result<UnusedKeyReport> {
    let consumed_prefixes: Vec<String> = consumed_pointers_for_scope(scope)
        .iter()
        .map(|p| pointer::normalize(p))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let unused_leaf_pointers: Vec<String> = pointer::leaves(config_json)
        .into_iter()
        .map(|(ptr, _)| ptr)
        .filter(|ptr| !consumed_prefixes.iter().any(|cp| pointer::covers(cp, ptr)))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let report = UnusedKeyReport {
        scope: scope.as_str().to_string(),
        consumed_prefixes,
        unused_leaf_pointers,
    };

    if policy == UnusedKeyPolicy::Fail && !report.is_clean() {
        let first: Vec<&str> = report
            .unused_leaf_pointers
            .iter()
            .take(12)
            .map(String::as_str)
            .collect();
        bail!(
            "CONFIG_UNUSED_KEYS (scope={}): {} unused config leaf key(s): {}",
            report.scope,
            report.unused_leaf_pointers.len(),
            first.join(", ")
        );
    }

    Ok(report)
}
