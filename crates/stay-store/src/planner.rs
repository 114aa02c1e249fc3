//! In-memory stay editor.
//!
//! Location flag and colour are denormalized onto each stay from the
//! registry when a stay is added or its location changes; editing the
//! registry later does not touch existing stays.

use stay_days::sort_stays;
use stay_schemas::{Location, StayRecord};

use crate::defaults::{default_trips, DEFAULT_CUSTOM_COLOR};
use crate::error::StoreError;
use crate::registry::LocationRegistry;

/// Input for [`Planner::add`]. `is_schengen` and `color` only matter for
/// locations the registry does not know yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStay {
    pub location: String,
    pub is_schengen: bool,
    pub start_date: String,
    pub end_date: String,
    pub color: Option<String>,
}

/// A single-field change for [`Planner::edit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StayEdit {
    /// Re-derives flag and colour when the new location is registered.
    Location(String),
    StartDate(String),
    EndDate(String),
    Schengen(bool),
    Color(String),
}

#[derive(Debug, Clone)]
pub struct Planner {
    stays: Vec<StayRecord>,
    registry: LocationRegistry,
}

impl Default for Planner {
    fn default() -> Self {
        Self::new(default_trips(), LocationRegistry::default())
    }
}

impl Planner {
    /// Takes `stays` in the order given.
    pub fn new(stays: Vec<StayRecord>, registry: LocationRegistry) -> Self {
        Self { stays, registry }
    }

    pub fn stays(&self) -> &[StayRecord] {
        &self.stays
    }

    pub fn registry(&self) -> &LocationRegistry {
        &self.registry
    }

    pub fn into_stays(self) -> Vec<StayRecord> {
        self.stays
    }

    pub fn get(&self, id: i64) -> Option<&StayRecord> {
        self.stays.iter().find(|s| s.id == id)
    }

    /// Adds a stay and returns its id.
    pub fn add(&mut self, new: NewStay) -> i64 {
        let (is_schengen, color) = match self.registry.get(&new.location) {
            Some(known) => (known.is_schengen, known.color.clone()),
            None => {
                let color = new
                    .color
                    .filter(|c| !c.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_CUSTOM_COLOR.to_string());
                self.registry
                    .register(Location::new(&new.location, new.is_schengen, &color));
                (new.is_schengen, color)
            }
        };

        let id = self.next_id();
        self.stays.push(
            StayRecord::new(id, new.location, is_schengen, new.start_date, new.end_date)
                .with_color(color),
        );
        self.resort();
        id
    }

    pub fn edit(&mut self, id: i64, edit: StayEdit) -> Result<(), StoreError> {
        let registry = &self.registry;
        let stay = self
            .stays
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(StoreError::NotFound(id))?;

        match edit {
            StayEdit::Location(name) => {
                if let Some(known) = registry.get(&name) {
                    stay.is_schengen = known.is_schengen;
                    stay.color = known.color.clone();
                }
                stay.location = name;
            }
            StayEdit::StartDate(d) => stay.start_date = d,
            StayEdit::EndDate(d) => stay.end_date = d,
            StayEdit::Schengen(flag) => stay.is_schengen = flag,
            StayEdit::Color(c) => stay.color = c,
        }

        self.resort();
        Ok(())
    }

    /// Removes and returns the stay. Remaining order is unchanged.
    pub fn delete(&mut self, id: i64) -> Result<StayRecord, StoreError> {
        let idx = self
            .stays
            .iter()
            .position(|s| s.id == id)
            .ok_or(StoreError::NotFound(id))?;
        Ok(self.stays.remove(idx))
    }

    /// Back to the default trips. Registered custom locations are kept.
    pub fn reset(&mut self) {
        self.stays = default_trips();
    }

    fn next_id(&self) -> i64 {
        self.stays.iter().map(|s| s.id).max().map_or(0, |m| m + 1)
    }

    fn resort(&mut self) {
        self.stays = sort_stays(&self.stays).into_iter().cloned().collect();
    }
}
