//! Search filters and the option lists that drive them.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::cruise::Cruise;

/// Budgets outside `[0, DEFAULT_MAX_BUDGET]` are ignored unless the caller
/// supplies its own ceiling.
pub const DEFAULT_MAX_BUDGET: f64 = 999_999.0;

/// All set criteria must match. Unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CruiseFilter {
    /// Exact ship name.
    pub ship: Option<String>,
    /// Keeps sailings whose lowest price is at or below this.
    pub max_budget: Option<f64>,
    pub departs_on_or_after: Option<NaiveDate>,
    pub arrives_on_or_before: Option<NaiveDate>,
    /// Case-insensitive substring of the departure port or any stop.
    pub city: Option<String>,
    /// Case-insensitive substring of any itinerary stop (not the departure port).
    pub itinerary_query: Option<String>,
}

impl CruiseFilter {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// The budget actually applied, given the accepted ceiling.
    fn effective_budget(&self, budget_ceiling: f64) -> Option<f64> {
        self.max_budget
            .filter(|b| b.is_finite() && *b >= 0.0 && *b <= budget_ceiling)
    }

    pub fn matches(&self, c: &Cruise, budget_ceiling: f64) -> bool {
        if let Some(ship) = non_blank(&self.ship) {
            if c.record.ship_name != ship {
                return false;
            }
        }

        if let Some(budget) = self.effective_budget(budget_ceiling) {
            if !c.lowest_price.is_some_and(|p| p <= budget) {
                return false;
            }
        }

        if let Some(from) = self.departs_on_or_after {
            if !c.departure.is_some_and(|d| d >= from) {
                return false;
            }
        }

        if let Some(until) = self.arrives_on_or_before {
            if !c.arrival.is_some_and(|d| d <= until) {
                return false;
            }
        }

        if let Some(city) = non_blank(&self.city) {
            let needle = city.to_lowercase();
            if !c.ports().any(|p| p.to_lowercase().contains(&needle)) {
                return false;
            }
        }

        if let Some(q) = non_blank(&self.itinerary_query) {
            let needle = q.to_lowercase();
            if !c
                .record
                .itinerary
                .iter()
                .any(|s| s.port.to_lowercase().contains(&needle))
            {
                return false;
            }
        }

        true
    }

    /// Matching sailings in catalog order.
    pub fn apply<'a>(&self, cruises: &'a [Cruise], budget_ceiling: f64) -> Vec<&'a Cruise> {
        cruises
            .iter()
            .filter(|c| self.matches(c, budget_ceiling))
            .collect()
    }
}

fn non_blank(v: &Option<String>) -> Option<&str> {
    v.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Distinct non-empty ship names, sorted.
pub fn ship_names(cruises: &[Cruise]) -> Vec<String> {
    cruises
        .iter()
        .map(|c| c.record.ship_name.trim())
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct city names (text before the first comma of each port), sorted.
pub fn available_cities(cruises: &[Cruise]) -> Vec<String> {
    cruises
        .iter()
        .flat_map(|c| c.ports())
        .filter_map(|p| p.split(',').next())
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Every date some sailing is at sea or in port, sorted. Sailings without
/// a usable duration contribute their departure day only.
pub fn available_dates(cruises: &[Cruise]) -> Vec<NaiveDate> {
    let mut dates = BTreeSet::new();
    for c in cruises {
        let Some(dep) = c.departure else { continue };
        match c.arrival {
            Some(arr) => {
                dates.extend(dep.iter_days().take_while(|d| *d <= arr));
            }
            None => {
                dates.insert(dep);
            }
        }
    }
    dates.into_iter().collect()
}
