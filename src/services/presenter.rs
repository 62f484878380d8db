use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::location_record::LocationRecord;

/// What the details view shows. Arriving without a record is not an error;
/// it renders the empty branch with a way back home.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DetailsView {
    NoData { message: String, back: String },
    Located(LocationDetails),
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct LocationDetails {
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub place_type: Option<String>,
    pub place_class: Option<String>,
    pub importance: Option<String>,
    pub accuracy: Option<String>,
    pub structured_address: Option<HashMap<String, String>>,
}

pub fn details_view(record: Option<&LocationRecord>) -> DetailsView {
    let Some(record) = record else {
        return DetailsView::NoData {
            message: "No location data provided.".to_string(),
            back: "/".to_string(),
        };
    };

    DetailsView::Located(LocationDetails {
        address: address_line(record),
        latitude: record.latitude,
        longitude: record.longitude,
        place_type: record.place_type.clone(),
        place_class: record.place_class.clone(),
        importance: record.importance.map(format_importance),
        accuracy: record.accuracy.and_then(format_accuracy),
        structured_address: record.address.clone(),
    })
}

// Prefer the display name verbatim; fall back to joining whatever structured
// components the upstream sent.
fn address_line(record: &LocationRecord) -> String {
    if !record.display_name.is_empty() {
        return record.display_name.clone();
    }

    match &record.address {
        Some(address) if !address.is_empty() => {
            address.values().cloned().collect::<Vec<_>>().join(", ")
        }
        _ => "Not available".to_string(),
    }
}

fn format_importance(importance: f64) -> String {
    format!("{:.2}", importance)
}

// A zero accuracy reads as "no reading", so it is suppressed along with null.
fn format_accuracy(accuracy: f64) -> Option<String> {
    if accuracy > 0.0 {
        Some(format!("\u{b1}{:.0} meters", accuracy))
    } else {
        None
    }
}
