use std::collections::HashMap;

use serde::{de, Deserialize, Deserializer, Serialize};

/// One raw search result from the geocoding service, in the shape Nominatim
/// returns it. Candidates are transient: produced per search, discarded once
/// a selection is made or the query changes.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Candidate {
    #[serde(default)]
    pub place_id: Option<u64>,
    pub display_name: String,
    #[serde(deserialize_with = "de_coordinate")]
    pub lat: f64,
    #[serde(deserialize_with = "de_coordinate")]
    pub lon: f64,
    #[serde(rename = "type", default)]
    pub place_type: Option<String>,
    #[serde(rename = "class", default)]
    pub place_class: Option<String>,
    #[serde(default)]
    pub importance: Option<f64>,
    #[serde(default)]
    pub address: Option<HashMap<String, String>>,
}

// Nominatim serializes coordinates as decimal-degree strings; accept either
// representation and reject anything non-finite at the boundary.
fn de_coordinate<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum CoordinateRepr {
        Number(f64),
        Text(String),
    }

    let value = match CoordinateRepr::deserialize(deserializer)? {
        CoordinateRepr::Number(n) => n,
        CoordinateRepr::Text(s) => s.trim().parse::<f64>().map_err(de::Error::custom)?,
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(de::Error::custom("coordinate is not a finite number"))
    }
}
