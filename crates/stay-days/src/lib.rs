//! stay-days
//!
//! Day-accounting engine for travel stays:
//! - Schengen 90/180 rolling-window occupancy, all locations combined
//! - the same rule per location
//! - UK residency days per tax year (6 April - 5 April)
//!
//! Deterministic, pure logic. No IO, no wall-clock. Callers hand in a slice
//! of [`StayRecord`]s and get owned summaries back; every call recomputes
//! from scratch.
//!
//! Stays whose dates do not parse (or whose end precedes their start)
//! contribute nothing. Overlapping stays are counted once per stay, never
//! merged.

mod dates;
mod rules;
mod schengen;
mod uk;

pub use dates::{
    calculate_days, calculate_days_str, range_overlap, ranges_overlap, sort_stays, stay_span,
    DateSpan,
};
pub use rules::{
    tax_years, ResidencyRule, TaxYear, WindowRule, DEFAULT_TAX_YEAR_FIRST, DEFAULT_TAX_YEAR_LAST,
    SCHENGEN_LIMIT_DAYS, SCHENGEN_WINDOW_DAYS, UK_LOCATION, UK_TAX_RESIDENCY_DAYS,
};
pub use schengen::{city_limits, over_limit_days, schengen_days, stay_windows, StayWindow};
pub use uk::uk_tax_year_stats;

pub use stay_schemas::{CityLimit, SchengenDay, SchengenReport, StayRecord, UkTaxYearStats};
