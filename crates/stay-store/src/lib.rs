//! stay-store
//!
//! Persistence for the trip planner: a key/value cache client (HTTP or
//! in-memory), the location registry, the stay editor and the seed data.
//! The day-accounting engine never sees any of this; it only receives the
//! resulting `StayRecord` list.

mod cache;
mod defaults;
mod error;
mod planner;
mod registry;
mod trips;

pub use cache::{extract_data, CacheBackend, HttpCache, MemoryCache, SaveMethod};
pub use defaults::{default_locations, default_trips, COLOR_OPTIONS, DEFAULT_CUSTOM_COLOR};
pub use error::StoreError;
pub use planner::{NewStay, Planner, StayEdit};
pub use registry::LocationRegistry;
pub use trips::{LoadSource, LoadedTrips, TripStore};
