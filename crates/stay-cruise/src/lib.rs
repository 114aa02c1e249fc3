//! stay-cruise
//!
//! Cruise catalog: typed records over the loosely-typed cache blobs, price
//! and date parsing, search filters, side-by-side comparison and the admin
//! edits (add / replace / remove / bulk import).
//!
//! Deterministic, pure logic. No IO, no clock; callers fetch and persist
//! the record list and pass timestamps in.

mod catalog;
mod compare;
mod cruise;
mod error;
mod filter;
mod parse;
mod record;
mod ships;

pub use catalog::{fill_defaults, validate, Catalog};
pub use compare::{Comparison, Toggle, MAX_COMPARISON};
pub use cruise::{process, Cruise};
pub use error::CruiseError;
pub use filter::{available_cities, available_dates, ship_names, CruiseFilter, DEFAULT_MAX_BUDGET};
pub use parse::{parse_arrival_date, parse_departure_date, parse_nights, parse_price};
pub use record::{records_from_json, CruiseRecord, ItineraryStop};
pub use ships::{display_name, ship_specs, ShipSpecs};
