use stay_schemas::Location;

use crate::defaults::default_locations;

/// Known locations in insertion order. Names are unique and matched exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationRegistry {
    locations: Vec<Location>,
}

impl Default for LocationRegistry {
    fn default() -> Self {
        Self {
            locations: default_locations(),
        }
    }
}

impl LocationRegistry {
    pub fn empty() -> Self {
        Self {
            locations: Vec::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Adds `location` unless its name is already known. Returns whether it
    /// was added.
    pub fn register(&mut self, location: Location) -> bool {
        if self.contains(&location.name) {
            return false;
        }
        self.locations.push(location);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}
