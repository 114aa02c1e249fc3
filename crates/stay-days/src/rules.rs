use chrono::NaiveDate;

use crate::dates::DateSpan;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Schengen short-stay limit: at most 90 days...
pub const SCHENGEN_LIMIT_DAYS: u32 = 90;

/// ...in any 180-day period, counting the day being evaluated.
pub const SCHENGEN_WINDOW_DAYS: u32 = 180;

/// Days in the UK per tax year treated as meeting the residency requirement.
pub const UK_TAX_RESIDENCY_DAYS: u32 = 90;

/// Location string that identifies UK stays. Matched exactly.
pub const UK_LOCATION: &str = "UK";

/// Tax years reported by default: 2024-2025 through 2026-2027.
pub const DEFAULT_TAX_YEAR_FIRST: i32 = 2024;
pub const DEFAULT_TAX_YEAR_LAST: i32 = 2026;

// ---------------------------------------------------------------------------
// Rolling window rule
// ---------------------------------------------------------------------------

/// "No more than `limit_days` in any trailing `window_days`."
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowRule {
    /// Window width in calendar days, inclusive of the evaluated day.
    pub window_days: u32,
    /// A count strictly greater than this is over the limit.
    pub limit_days: u32,
}

impl WindowRule {
    /// 90 days in any 180.
    pub fn schengen() -> Self {
        Self {
            window_days: SCHENGEN_WINDOW_DAYS,
            limit_days: SCHENGEN_LIMIT_DAYS,
        }
    }

    pub fn is_over(&self, days_in_window: u32) -> bool {
        days_in_window > self.limit_days
    }
}

impl Default for WindowRule {
    fn default() -> Self {
        Self::schengen()
    }
}

// ---------------------------------------------------------------------------
// Residency rule
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResidencyRule {
    /// Stays whose `location` equals this string (case-sensitive) count.
    pub location: String,
    /// Requirement is met at `>= threshold_days`.
    pub threshold_days: u32,
}

impl ResidencyRule {
    pub fn uk() -> Self {
        Self {
            location: UK_LOCATION.to_string(),
            threshold_days: UK_TAX_RESIDENCY_DAYS,
        }
    }
}

impl Default for ResidencyRule {
    fn default() -> Self {
        Self::uk()
    }
}

// ---------------------------------------------------------------------------
// Tax years
// ---------------------------------------------------------------------------

/// A named UK fiscal year, 6 April to 5 April inclusive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaxYear {
    /// e.g. `"2025-2026"`.
    pub name: String,
    pub span: DateSpan,
}

impl TaxYear {
    /// The tax year beginning 6 April `year`. `None` only for years chrono
    /// cannot represent.
    pub fn starting(year: i32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, 4, 6)?;
        let end = NaiveDate::from_ymd_opt(year + 1, 4, 5)?;
        Some(Self {
            name: format!("{}-{}", year, year + 1),
            span: DateSpan::new(start, end)?,
        })
    }
}

/// Consecutive tax years starting in `first..=last`. Empty if `last < first`.
pub fn tax_years(first: i32, last: i32) -> Vec<TaxYear> {
    (first..=last).filter_map(TaxYear::starting).collect()
}
