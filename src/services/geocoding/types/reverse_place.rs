use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Response shape of the reverse endpoint: one object, no array wrapper.
/// Every field is optional because an unresolvable coordinate comes back as
/// `{}` or as `{"error": "..."}` with a 200 status; classifying that outcome
/// is the resolver's job, not a decode failure.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ReversePlace {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(rename = "type", default)]
    pub place_type: Option<String>,
    #[serde(rename = "class", default)]
    pub place_class: Option<String>,
    #[serde(default)]
    pub importance: Option<f64>,
    #[serde(default)]
    pub address: Option<HashMap<String, String>>,
}

impl ReversePlace {
    /// A usable reverse result has a non-empty display name and no upstream
    /// error marker.
    pub fn usable_display_name(&self) -> Option<&str> {
        if self.error.is_some() {
            return None;
        }
        self.display_name.as_deref().filter(|name| !name.is_empty())
    }
}
