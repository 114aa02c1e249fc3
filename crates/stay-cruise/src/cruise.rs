use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::parse::{parse_arrival_date, parse_departure_date, parse_price};
use crate::record::CruiseRecord;

/// A record with its derived price and dates.
#[derive(Debug, Clone, PartialEq)]
pub struct Cruise {
    pub record: CruiseRecord,
    /// Cheapest of interior, ocean view and balcony. `None` when none of
    /// them is bookable.
    pub lowest_price: Option<f64>,
    pub departure: Option<NaiveDate>,
    pub arrival: Option<NaiveDate>,
}

impl Cruise {
    pub fn from_record(record: CruiseRecord) -> Self {
        let lowest_price = [
            &record.interior_price,
            &record.ocean_view_price,
            &record.balcony_price,
        ]
        .into_iter()
        .filter_map(|p| parse_price(p))
        .min_by(f64::total_cmp);
        let departure = parse_departure_date(&record.departure_date);
        let arrival = parse_arrival_date(&record.departure_date, &record.duration);
        Self {
            record,
            lowest_price,
            departure,
            arrival,
        }
    }

    pub fn sailing_id(&self) -> &str {
        &self.record.sailing_id
    }

    /// Departure port then every itinerary port.
    pub fn ports(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.record.departure_port.as_str())
            .chain(self.record.itinerary.iter().map(|s| s.port.as_str()))
            .filter(|p| !p.trim().is_empty())
    }

    /// Price ordering with unbookable sailings last.
    pub fn cmp_price(&self, other: &Self) -> Ordering {
        let a = self.lowest_price.unwrap_or(f64::INFINITY);
        let b = other.lowest_price.unwrap_or(f64::INFINITY);
        a.total_cmp(&b)
    }
}

pub fn process(records: impl IntoIterator<Item = CruiseRecord>) -> Vec<Cruise> {
    records.into_iter().map(Cruise::from_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(interior: &str, ocean: &str, balcony: &str) -> CruiseRecord {
        CruiseRecord {
            interior_price: interior.to_string(),
            ocean_view_price: ocean.to_string(),
            balcony_price: balcony.to_string(),
            departure_date: "29 Aug '25 - 5 Sep '25".to_string(),
            duration: "7 Nights".to_string(),
            ..CruiseRecord::new("MSC Grandiosa")
        }
    }

    #[test]
    fn lowest_price_skips_unavailable_cabins() {
        let c = Cruise::from_record(record("N/A", "£899", "£749"));
        assert_eq!(c.lowest_price, Some(749.0));
        assert_eq!(c.departure, NaiveDate::from_ymd_opt(2025, 8, 29));
        assert_eq!(c.arrival, NaiveDate::from_ymd_opt(2025, 9, 5));
    }

    #[test]
    fn no_bookable_cabin_has_no_price() {
        let c = Cruise::from_record(record("N/A", "", "n/a"));
        assert_eq!(c.lowest_price, None);
        let cheap = Cruise::from_record(record("10", "", ""));
        assert_eq!(cheap.cmp_price(&c), Ordering::Less);
    }

    #[test]
    fn ports_skip_blank_entries() {
        let mut r = record("1", "", "");
        r.departure_port = "Barcelona, Spain".to_string();
        r.itinerary = vec![
            crate::record::ItineraryStop::at("Marseille, France"),
            crate::record::ItineraryStop::at(" "),
        ];
        let c = Cruise::from_record(r);
        let ports: Vec<_> = c.ports().collect();
        assert_eq!(ports, vec!["Barcelona, Spain", "Marseille, France"]);
    }
}
