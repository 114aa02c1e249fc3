//! Rolling-window occupancy (Schengen 90/180).
//!
//! Every Schengen day is recorded into a per-day count map (`BTreeMap`, so a
//! day covered by two overlapping stays counts twice). Each sampled day then
//! sums the map over `[day - (window_days - 1), day]`. Days after the sampled
//! day never count, even when they belong to the same stay.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use stay_schemas::{CityLimit, SchengenDay, SchengenReport, StayRecord};

use crate::dates::{sort_stays, stay_span, DateSpan};
use crate::rules::WindowRule;

/// Day -> number of stay-days recorded on it.
type DayCounts = BTreeMap<NaiveDate, u32>;

/// Per-stay view of the rolling window, for timeline/checklist displays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StayWindow {
    pub id: i64,
    pub location: String,
    pub span: DateSpan,
    pub days: u32,
    /// Last day of the window that opens on the stay's first day.
    pub window_end: NaiveDate,
    /// Some sample dated inside this stay is over the limit.
    pub has_over_limit: bool,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Sum of counts over the inclusive range `[day - (window_days - 1), day]`.
fn rolling_count(counts: &DayCounts, day: NaiveDate, window_days: u32) -> u32 {
    if window_days == 0 {
        return 0;
    }
    let floor = day
        .checked_sub_days(Days::new(u64::from(window_days - 1)))
        .unwrap_or(NaiveDate::MIN);
    counts.range(floor..=day).map(|(_, &v)| v).sum()
}

fn record_span(counts: &mut DayCounts, span: &DateSpan) {
    for day in span.iter_days() {
        *counts.entry(day).or_insert(0) += 1;
    }
}

/// Schengen-flagged stays with a usable range, in start-date order.
fn schengen_spans(stays: &[StayRecord]) -> Vec<(&StayRecord, DateSpan)> {
    sort_stays(stays)
        .into_iter()
        .filter(|s| s.is_schengen)
        .filter_map(|s| stay_span(s).map(|span| (s, span)))
        .collect()
}

fn sample_stays(
    stays: &[(&StayRecord, DateSpan)],
    counts: &DayCounts,
    rule: &WindowRule,
) -> Vec<SchengenDay> {
    let mut out = Vec::new();
    for (stay, span) in stays {
        for day in span.iter_days() {
            let n = rolling_count(counts, day, rule.window_days);
            out.push(SchengenDay {
                date: day,
                days_in_window: n,
                is_over_limit: rule.is_over(n),
                location: stay.location.clone(),
            });
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// One sample per Schengen stay-day, with the window count across all
/// Schengen locations.
pub fn schengen_days(stays: &[StayRecord], rule: &WindowRule) -> SchengenReport {
    let spans = schengen_spans(stays);

    let mut counts = DayCounts::new();
    for (_, span) in &spans {
        record_span(&mut counts, span);
    }

    let samples = sample_stays(&spans, &counts, rule);
    SchengenReport {
        total_days: samples.len(),
        samples,
    }
}

/// The same rule applied to each Schengen location on its own.
///
/// Every Schengen-flagged location name in the input gets an entry, even
/// when none of its stays have usable dates (all zeros then).
pub fn city_limits(stays: &[StayRecord], rule: &WindowRule) -> BTreeMap<String, CityLimit> {
    let mut by_city: BTreeMap<&str, Vec<(&StayRecord, DateSpan)>> = BTreeMap::new();
    for stay in sort_stays(stays).into_iter().filter(|s| s.is_schengen) {
        let entry = by_city.entry(stay.location.as_str()).or_default();
        if let Some(span) = stay_span(stay) {
            entry.push((stay, span));
        }
    }

    let mut out = BTreeMap::new();
    for (city, city_stays) in by_city {
        let mut counts = DayCounts::new();
        for (_, span) in &city_stays {
            record_span(&mut counts, span);
        }
        let samples = sample_stays(&city_stays, &counts, rule);

        out.insert(
            city.to_string(),
            CityLimit {
                total_days: samples.len(),
                max_in_any_window: samples.iter().map(|d| d.days_in_window).max().unwrap_or(0),
                has_over_limit: samples.iter().any(|d| d.is_over_limit),
            },
        );
    }
    out
}

/// Per-stay summary built from a report produced by [`schengen_days`] over
/// the same `stays`.
pub fn stay_windows(
    stays: &[StayRecord],
    report: &SchengenReport,
    rule: &WindowRule,
) -> Vec<StayWindow> {
    schengen_spans(stays)
        .into_iter()
        .map(|(stay, span)| {
            let window_end = span
                .start
                .checked_add_days(Days::new(u64::from(rule.window_days.saturating_sub(1))))
                .unwrap_or(NaiveDate::MAX);
            let has_over_limit = report
                .samples
                .iter()
                .any(|d| d.is_over_limit && span.contains(d.date));
            StayWindow {
                id: stay.id,
                location: stay.location.clone(),
                span,
                days: span.days(),
                window_end,
                has_over_limit,
            }
        })
        .collect()
}

/// Samples over the limit, in report order.
pub fn over_limit_days(report: &SchengenReport) -> Vec<&SchengenDay> {
    report.samples.iter().filter(|d| d.is_over_limit).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
