//! Admin operations over the stored list of sailings.
//!
//! The catalog is pure: callers pass the clock in (`now_millis`) and
//! persist [`Catalog::records`] themselves.

use serde_json::Value;

use crate::error::CruiseError;
use crate::record::CruiseRecord;

/// A record is storable when it names its ship.
pub fn validate(record: &CruiseRecord) -> Result<(), CruiseError> {
    if record.ship_name.trim().is_empty() {
        return Err(CruiseError::Invalid {
            index: None,
            reason: "Ship Name is required".to_string(),
        });
    }
    Ok(())
}

/// Blank descriptive fields get their placeholder text.
pub fn fill_defaults(record: &mut CruiseRecord) {
    let slots = [
        (&mut record.departure_port, "TBD"),
        (&mut record.departure_date, "TBD"),
        (&mut record.duration, "7 Nights"),
        (&mut record.interior_price, "N/A"),
        (&mut record.ocean_view_price, "N/A"),
        (&mut record.balcony_price, "N/A"),
        (&mut record.suite_options, "N/A"),
        (&mut record.special_offers, "None"),
    ];
    for (slot, placeholder) in slots {
        if slot.trim().is_empty() {
            *slot = placeholder.to_string();
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<CruiseRecord>,
    next_seq: u64,
}

impl Catalog {
    pub fn new(records: Vec<CruiseRecord>) -> Self {
        Self {
            records,
            next_seq: 0,
        }
    }

    pub fn from_json(v: Value) -> Result<Self, CruiseError> {
        Ok(Self::new(serde_json::from_value(v)?))
    }

    pub fn to_json(&self) -> Result<Value, CruiseError> {
        Ok(serde_json::to_value(&self.records)?)
    }

    pub fn records(&self) -> &[CruiseRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<CruiseRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, sailing_id: &str) -> Option<&CruiseRecord> {
        self.records.iter().find(|r| r.sailing_id == sailing_id)
    }

    /// `cruise_<millis>_<seq>`; `seq` is per catalog so ids minted in the
    /// same millisecond stay distinct.
    fn mint_id(&mut self, now_millis: i64) -> String {
        loop {
            let id = format!("cruise_{}_{}", now_millis, self.next_seq);
            self.next_seq += 1;
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    /// Appends `record` under a fresh sailing id and returns the id. Any id
    /// already on the record is replaced.
    pub fn add(&mut self, mut record: CruiseRecord, now_millis: i64) -> Result<String, CruiseError> {
        validate(&record)?;
        let id = self.mint_id(now_millis);
        record.sailing_id = id.clone();
        self.records.push(record);
        Ok(id)
    }

    /// Replaces the record with the same sailing id, in place.
    pub fn replace(&mut self, record: CruiseRecord) -> Result<(), CruiseError> {
        validate(&record)?;
        let slot = self
            .records
            .iter_mut()
            .find(|r| r.sailing_id == record.sailing_id)
            .ok_or_else(|| CruiseError::NotFound(record.sailing_id.clone()))?;
        *slot = record;
        Ok(())
    }

    pub fn remove(&mut self, sailing_id: &str) -> Result<CruiseRecord, CruiseError> {
        let pos = self
            .records
            .iter()
            .position(|r| r.sailing_id == sailing_id)
            .ok_or_else(|| CruiseError::NotFound(sailing_id.to_string()))?;
        Ok(self.records.remove(pos))
    }

    /// Appends a batch. Nothing is added unless every item validates;
    /// blanks are filled and missing ids minted. Returns the number added.
    pub fn import(
        &mut self,
        mut batch: Vec<CruiseRecord>,
        now_millis: i64,
    ) -> Result<usize, CruiseError> {
        if batch.is_empty() {
            return Err(CruiseError::Invalid {
                index: None,
                reason: "import batch is empty".to_string(),
            });
        }
        for (i, record) in batch.iter().enumerate() {
            validate(record).map_err(|e| match e {
                CruiseError::Invalid { reason, .. } => CruiseError::Invalid {
                    index: Some(i + 1),
                    reason,
                },
                other => other,
            })?;
        }

        for record in batch.iter_mut() {
            fill_defaults(record);
            if record.sailing_id.trim().is_empty() {
                record.sailing_id = self.mint_id(now_millis);
            }
        }

        let added = batch.len();
        self.records.extend(batch);
        Ok(added)
    }
}
