use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::person::Person;

/// The whole locally persisted trip document.
///
/// Loaded lazily with defaults on first access and always written back as one
/// unit; there is no partial-update path. Every field carries a default so a
/// document stored by an older build is filled in field by field, and keys we
/// do not know are ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TripRecord {
    pub hotel: Hotel,
    pub group: Vec<Person>,
    pub dining: Dining,
    pub transport_notes: String,
    pub tickets: Vec<TicketScan>,
    pub predictions: Predictions,
    pub race_result: Option<RaceResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Hotel {
    pub name: String,
    pub address: String,
    pub check_in: String,
    pub check_out: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub notes: String,
}

impl Default for Hotel {
    fn default() -> Self {
        Self {
            name: String::new(),
            address: String::new(),
            check_in: "2026-07-23".into(),
            check_out: "2026-07-27".into(),
            lat: None,
            lng: None,
            notes: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dining {
    /// Free-text plan per trip date (ISO date string keys).
    pub breakfast_plans: BTreeMap<String, String>,
    pub dinner_plans: BTreeMap<String, String>,
    pub saved_restaurants: Vec<Restaurant>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Restaurant {
    pub name: String,
    pub cuisine: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// A scanned ticket kept alongside the trip document (not per person).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TicketScan {
    pub name: String,
    pub data_url: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Podium picks keyed by the predictor's name.
pub type Predictions = BTreeMap<String, PodiumPick>;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PodiumPick {
    pub first: String,
    pub second: String,
    pub third: String,
}

impl PodiumPick {
    pub fn slots(&self) -> [&str; 3] {
        [&self.first, &self.second, &self.third]
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RaceResult {
    /// Finishing order, winner first. Only the top three are scored.
    pub podium: Vec<String>,
}
