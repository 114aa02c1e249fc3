//! Wire shape of one sailing as stored in the cruise cache.
//!
//! Field names are the spreadsheet column headers the data was scraped
//! into. Values are loosely typed on the wire (prices may be numbers or
//! `"N/A"`, itineraries may be arrays or JSON text), so every string field
//! accepts any scalar and unknown keys are carried through untouched.

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItineraryStop {
    #[serde(default, deserialize_with = "lenient_string")]
    pub day: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub port: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub arrival: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub departure: String,
}

impl ItineraryStop {
    pub fn at(port: impl Into<String>) -> Self {
        Self {
            port: port.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CruiseRecord {
    #[serde(rename = "Unique Sailing ID", default, deserialize_with = "lenient_string")]
    pub sailing_id: String,
    #[serde(rename = "Ship Name", default, deserialize_with = "lenient_string")]
    pub ship_name: String,
    /// e.g. `"7 Nights"`.
    #[serde(rename = "Duration", default, deserialize_with = "lenient_string")]
    pub duration: String,
    #[serde(rename = "Departure Port", default, deserialize_with = "lenient_string")]
    pub departure_port: String,
    /// e.g. `"29 Aug '25 - 5 Sep '25"`.
    #[serde(rename = "Departure Date", default, deserialize_with = "lenient_string")]
    pub departure_date: String,
    #[serde(rename = "Interior Price", default, deserialize_with = "lenient_string")]
    pub interior_price: String,
    #[serde(rename = "Ocean View Price", default, deserialize_with = "lenient_string")]
    pub ocean_view_price: String,
    #[serde(rename = "Standard Balcony", default, deserialize_with = "lenient_string")]
    pub balcony_price: String,
    #[serde(rename = "Suite Options", default, deserialize_with = "lenient_string")]
    pub suite_options: String,
    #[serde(rename = "Special Offers", default, deserialize_with = "lenient_string")]
    pub special_offers: String,
    #[serde(rename = "Itinerary Map", default, deserialize_with = "lenient_string")]
    pub itinerary_map: String,
    #[serde(
        rename = "Booking Link (Constructed)",
        default,
        deserialize_with = "lenient_string"
    )]
    pub booking_link: String,
    #[serde(
        rename = "Complete Itinerary",
        default,
        deserialize_with = "itinerary_from_wire"
    )]
    pub itinerary: Vec<ItineraryStop>,
    #[serde(rename = "User Notes", default, skip_serializing_if = "Option::is_none")]
    pub user_notes: Option<String>,
    /// Keys this type does not model, kept so a load/save cycle is lossless.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl CruiseRecord {
    pub fn new(ship_name: impl Into<String>) -> Self {
        Self {
            ship_name: ship_name.into(),
            ..Self::default()
        }
    }
}

/// Decode a JSON array of records.
pub fn records_from_json(v: Value) -> Result<Vec<CruiseRecord>, serde_json::Error> {
    serde_json::from_value(v)
}

fn lenient_string<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    })
}

fn itinerary_from_wire<'de, D>(d: D) -> Result<Vec<ItineraryStop>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
        Stops(Vec<ItineraryStop>),
        Text(String),
    }

    match Option::<Wire>::deserialize(d)? {
        None => Ok(Vec::new()),
        Some(Wire::Stops(stops)) => Ok(stops),
        Some(Wire::Text(t)) if t.trim().is_empty() => Ok(Vec::new()),
        Some(Wire::Text(t)) => serde_json::from_str(&t)
            .map_err(|_| D::Error::custom("Complete Itinerary must be a JSON array of stops")),
    }
}
