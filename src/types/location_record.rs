use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::candidate::Candidate;

/// The normalized, display-ready result of a resolution operation. Created
/// once, handed to the details view by value, never mutated afterwards.
/// `accuracy` is the device-reported uncertainty radius in meters and is only
/// populated for records that came from a device fix.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    pub display_name: String,
    pub address: Option<HashMap<String, String>>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "type")]
    pub place_type: Option<String>,
    pub place_class: Option<String>,
    pub importance: Option<f64>,
    pub accuracy: Option<f64>,
}

impl From<Candidate> for LocationRecord {
    fn from(candidate: Candidate) -> Self {
        LocationRecord {
            display_name: candidate.display_name,
            address: candidate.address,
            latitude: candidate.lat,
            longitude: candidate.lon,
            place_type: candidate.place_type,
            place_class: candidate.place_class,
            importance: candidate.importance,
            accuracy: None,
        }
    }
}
