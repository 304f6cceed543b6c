use serde::{Deserialize, Serialize};

use super::{
    person::{self, Person},
    trip::{Predictions, RaceResult, TripRecord},
};

/// The slice of the trip document shared through the room service: the group
/// roster (ticket fields stripped), podium predictions and the race result.
/// The serialized form never contains `ticketImage`/`ticketType` keys; the
/// room service has a size ceiling that rules out embedded image data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SyncPayload {
    pub group: Vec<Person>,
    pub predictions: Predictions,
    pub race_result: Option<RaceResult>,
}

impl SyncPayload {
    pub fn of_record(record: &TripRecord) -> Self {
        Self {
            group: person::strip_tickets(&record.group),
            predictions: record.predictions.clone(),
            race_result: record.race_result.clone(),
        }
    }
}
