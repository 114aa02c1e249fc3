use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use stay_days::{
    tax_years, ResidencyRule, TaxYear, WindowRule, DEFAULT_TAX_YEAR_FIRST, DEFAULT_TAX_YEAR_LAST,
    SCHENGEN_LIMIT_DAYS, SCHENGEN_WINDOW_DAYS, UK_LOCATION, UK_TAX_RESIDENCY_DAYS,
};

/// Overrides `cache.base_url` when set.
pub const CACHE_URL_ENV: &str = "STAY_CACHE_URL";

const DEFAULT_CACHE_URL: &str = "https://uno-game-eta.vercel.app/api/redis-cache";
const DEFAULT_TTL_SECONDS: u64 = 86_400;

// ---------------------------------------------------------------------------
// Typed config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub rules: RulesConfig,
    pub cache: CacheConfig,
    pub cruise: CruiseConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub schengen: WindowConfig,
    pub uk_residency: ResidencyConfig,
    pub tax_years: TaxYearsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub window_days: u32,
    pub limit_days: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            window_days: SCHENGEN_WINDOW_DAYS,
            limit_days: SCHENGEN_LIMIT_DAYS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResidencyConfig {
    pub location: String,
    pub threshold_days: u32,
}

impl Default for ResidencyConfig {
    fn default() -> Self {
        Self {
            location: UK_LOCATION.to_string(),
            threshold_days: UK_TAX_RESIDENCY_DAYS,
        }
    }
}

/// Inclusive range of tax-year start years.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxYearsConfig {
    pub first_start_year: i32,
    pub last_start_year: i32,
}

impl Default for TaxYearsConfig {
    fn default() -> Self {
        Self {
            first_start_year: DEFAULT_TAX_YEAR_FIRST,
            last_start_year: DEFAULT_TAX_YEAR_LAST,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub base_url: String,
    pub trips_key: String,
    pub cruises_key: String,
    /// `None` stores without expiry.
    pub ttl_seconds: Option<u64>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CACHE_URL.to_string(),
            trips_key: "planner".to_string(),
            cruises_key: "cruises".to_string(),
            ttl_seconds: Some(DEFAULT_TTL_SECONDS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CruiseConfig {
    pub max_comparison: usize,
    /// Budget filters outside `[0, max_budget]` are ignored.
    pub max_budget: f64,
}

impl Default for CruiseConfig {
    fn default() -> Self {
        Self {
            max_comparison: 4,
            max_budget: 999_999.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Loading / validation
// ---------------------------------------------------------------------------

impl AppConfig {
    pub fn from_json(v: &Value) -> Result<Self> {
        let cfg: AppConfig = if v.is_null() {
            AppConfig::default()
        } else {
            serde_json::from_value(v.clone()).context("config does not match AppConfig")?
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        let w = &self.rules.schengen;
        if w.window_days == 0 {
            bail!("CONFIG_INVALID rules.schengen.window_days must be > 0");
        }
        if w.limit_days >= w.window_days {
            bail!(
                "CONFIG_INVALID rules.schengen.limit_days ({}) must be < window_days ({})",
                w.limit_days,
                w.window_days
            );
        }
        let ty = &self.rules.tax_years;
        if ty.first_start_year > ty.last_start_year {
            bail!(
                "CONFIG_INVALID rules.tax_years first_start_year ({}) > last_start_year ({})",
                ty.first_start_year,
                ty.last_start_year
            );
        }
        if self.rules.uk_residency.location.trim().is_empty() {
            bail!("CONFIG_INVALID rules.uk_residency.location is empty");
        }
        if self.cache.base_url.trim().is_empty() {
            bail!("CONFIG_INVALID cache.base_url is empty");
        }
        if self.cruise.max_comparison == 0 {
            bail!("CONFIG_INVALID cruise.max_comparison must be > 0");
        }
        if !(self.cruise.max_budget.is_finite() && self.cruise.max_budget >= 0.0) {
            bail!("CONFIG_INVALID cruise.max_budget must be a non-negative number");
        }
        Ok(())
    }

    /// Applies environment overrides. `lookup` is `std::env::var(..).ok()`
    /// in the binary; tests pass a closure.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(CACHE_URL_ENV).filter(|u| !u.trim().is_empty()) {
            self.cache.base_url = url.trim().to_string();
        }
    }

    pub fn window_rule(&self) -> WindowRule {
        WindowRule {
            window_days: self.rules.schengen.window_days,
            limit_days: self.rules.schengen.limit_days,
        }
    }

    pub fn residency_rule(&self) -> ResidencyRule {
        ResidencyRule {
            location: self.rules.uk_residency.location.clone(),
            threshold_days: self.rules.uk_residency.threshold_days,
        }
    }

    pub fn tax_years(&self) -> Vec<TaxYear> {
        tax_years(
            self.rules.tax_years.first_start_year,
            self.rules.tax_years.last_start_year,
        )
    }
}
