//! Seed data: the stays a fresh planner starts with, the known locations
//! and the colour palette offered for custom ones.

use stay_schemas::{Location, StayRecord};

/// Colour given to a custom location when none is supplied.
pub const DEFAULT_CUSTOM_COLOR: &str = "bg-gray-500";

/// `(css class, label)`.
pub const COLOR_OPTIONS: &[(&str, &str)] = &[
    ("bg-gray-500", "Gray"),
    ("bg-blue-500", "Blue"),
    ("bg-green-500", "Green"),
    ("bg-red-500", "Red"),
    ("bg-yellow-500", "Yellow"),
    ("bg-purple-500", "Purple"),
    ("bg-pink-500", "Pink"),
    ("bg-indigo-500", "Indigo"),
    ("bg-teal-500", "Teal"),
    ("bg-orange-500", "Orange"),
];

const LOCATIONS: &[(&str, bool, &str)] = &[
    ("Spain", true, "bg-blue-500"),
    ("UK", false, "bg-red-500"),
    ("Turkey", false, "bg-amber-500"),
    ("Dubai", false, "bg-yellow-500"),
    ("US/Singapore", false, "bg-purple-500"),
    ("Mediterranean Cruise", true, "bg-teal-500"),
    ("Gibraltar", false, "bg-gray-500"),
];

// (location, start, end); flag and colour come from LOCATIONS.
const TRIPS: &[(&str, &str, &str)] = &[
    ("UK", "2025-01-01", "2025-07-09"),
    ("Spain", "2025-07-10", "2025-08-31"),
    ("Mediterranean Cruise", "2025-09-01", "2025-09-07"),
    ("Turkey", "2025-09-08", "2025-09-22"),
    ("Spain", "2025-09-23", "2025-10-03"),
    ("UK", "2025-10-04", "2025-12-14"),
    ("Spain", "2025-12-15", "2025-12-25"),
    ("US/Singapore", "2025-12-26", "2026-01-14"),
    ("UK", "2026-01-15", "2026-01-31"),
    ("Dubai", "2026-02-01", "2026-04-30"),
    ("Turkey", "2026-05-01", "2026-07-01"),
    ("Spain", "2026-07-02", "2026-09-19"),
];

pub fn default_locations() -> Vec<Location> {
    LOCATIONS
        .iter()
        .map(|&(name, schengen, color)| Location::new(name, schengen, color))
        .collect()
}

/// Twelve stays, ids `0..12`, already in start-date order.
pub fn default_trips() -> Vec<StayRecord> {
    TRIPS
        .iter()
        .zip(0_i64..)
        .map(|(&(location, start, end), id)| {
            let (schengen, color) = LOCATIONS
                .iter()
                .find(|(name, _, _)| *name == location)
                .map(|&(_, s, c)| (s, c))
                .unwrap_or((false, DEFAULT_CUSTOM_COLOR));
            StayRecord::new(id, location, schengen, start, end).with_color(color)
        })
        .collect()
}
