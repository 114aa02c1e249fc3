//! Cruise catalog command handlers: `stay cruise list|cities|dates|compare`.
//!
//! Records come from `--file` when given, otherwise from the cache under
//! `cache.cruises_key`.

use anyhow::{Context, Result};
use tracing::{info, warn};

use stay_config::{AppConfig, ConfigScope};
use stay_cruise::{
    available_cities, available_dates, display_name, process, Catalog, Comparison, Cruise,
    CruiseFilter, Toggle,
};
use stay_store::{CacheBackend, HttpCache};

use super::{json_list, load_app_config, read_json_file};

async fn load_cruises(cfg: &AppConfig, file: Option<&str>) -> Result<Vec<Cruise>> {
    let list = match file {
        Some(path) => json_list(read_json_file(path)?, path)?,
        None => {
            let cache = HttpCache::new(cfg.cache.base_url.clone());
            match cache
                .fetch(&cfg.cache.cruises_key)
                .await
                .with_context(|| format!("fetch cruises key '{}' failed", cfg.cache.cruises_key))?
            {
                Some(data) => data,
                None => {
                    warn!(key = %cfg.cache.cruises_key, "no cruises cached");
                    serde_json::Value::Array(Vec::new())
                }
            }
        }
    };

    let catalog = Catalog::from_json(list).context("cruise records could not be decoded")?;
    info!(count = catalog.len(), "cruises loaded");
    Ok(process(catalog.into_records()))
}

fn opt<T: std::fmt::Display>(v: Option<T>) -> String {
    v.map(|x| x.to_string()).unwrap_or_default()
}

fn print_cruise(c: &Cruise) {
    println!(
        "sailing_id={} departure={} arrival={} lowest_price={} ship={}",
        c.sailing_id(),
        opt(c.departure),
        opt(c.arrival),
        opt(c.lowest_price),
        display_name(&c.record.ship_name)
    );
}

/// Execute `stay cruise list`.
pub async fn list(config_paths: &[String], file: Option<&str>, filter: &CruiseFilter) -> Result<()> {
    let cfg = load_app_config(config_paths, ConfigScope::Cruise)?;
    let cruises = load_cruises(&cfg, file).await?;

    let matched = filter.apply(&cruises, cfg.cruise.max_budget);
    println!("matched={} total={}", matched.len(), cruises.len());
    for c in matched {
        print_cruise(c);
    }
    Ok(())
}

/// Execute `stay cruise cities`.
pub async fn cities(config_paths: &[String], file: Option<&str>) -> Result<()> {
    let cfg = load_app_config(config_paths, ConfigScope::Cruise)?;
    let cruises = load_cruises(&cfg, file).await?;
    for city in available_cities(&cruises) {
        println!("city={}", city);
    }
    Ok(())
}

/// Execute `stay cruise dates`.
pub async fn dates(config_paths: &[String], file: Option<&str>) -> Result<()> {
    let cfg = load_app_config(config_paths, ConfigScope::Cruise)?;
    let cruises = load_cruises(&cfg, file).await?;
    for d in available_dates(&cruises) {
        println!("date={}", d);
    }
    Ok(())
}

/// Execute `stay cruise compare`.
pub async fn compare(config_paths: &[String], file: Option<&str>, ids: &[String]) -> Result<()> {
    let cfg = load_app_config(config_paths, ConfigScope::Cruise)?;
    let cruises = load_cruises(&cfg, file).await?;

    let mut cmp = Comparison::new(cfg.cruise.max_comparison);
    for id in ids.iter().map(|s| s.trim()).filter(|s| !s.is_empty()) {
        if cmp.contains(id) {
            continue;
        }
        if cmp.toggle(id) == Toggle::Full {
            warn!(sailing_id = %id, max = cfg.cruise.max_comparison, "comparison full; skipped");
        }
    }

    let sorted = cmp.sorted(&cruises);
    for id in cmp.ids() {
        if !sorted.iter().any(|c| c.sailing_id() == id) {
            warn!(sailing_id = %id, "sailing not in catalog");
        }
    }

    println!("compared={} max={}", sorted.len(), cfg.cruise.max_comparison);
    for c in sorted {
        print_cruise(c);
    }
    Ok(())
}
