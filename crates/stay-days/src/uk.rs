use std::collections::BTreeMap;

use stay_schemas::{StayRecord, UkTaxYearStats};

use crate::dates::{range_overlap, stay_span};
use crate::rules::{ResidencyRule, TaxYear};

/// Days spent at `rule.location` within each tax year.
///
/// Each matching stay adds the inclusive length of its intersection with the
/// tax year. Overlapping stays are not merged, so a day covered twice counts
/// twice.
pub fn uk_tax_year_stats(
    stays: &[StayRecord],
    years: &[TaxYear],
    rule: &ResidencyRule,
) -> BTreeMap<String, UkTaxYearStats> {
    let resident_spans: Vec<_> = stays
        .iter()
        .filter(|s| s.location == rule.location)
        .filter_map(stay_span)
        .collect();

    let mut out = BTreeMap::new();
    for year in years {
        let days_in_uk: u32 = resident_spans
            .iter()
            .filter_map(|span| range_overlap(span, &year.span))
            .map(|o| o.days())
            .sum();

        out.insert(
            year.name.clone(),
            UkTaxYearStats {
                days_in_uk,
                meets_requirement: days_in_uk >= rule.threshold_days,
                days_needed: rule.threshold_days.saturating_sub(days_in_uk),
            },
        );
    }
    out
}
