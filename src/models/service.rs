use serde::{Deserialize, Serialize};

/// Static catalog entry: a bookable service, doctor, or destination
/// depending on the flow. Prices are whole rupees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceItem {
    pub id: String,
    pub name: String,
    pub duration_minutes: u32,
    pub price: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ServiceItem {
    pub fn new(id: &str, name: &str, duration_minutes: u32, price: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            duration_minutes,
            price,
            icon: None,
            description: None,
        }
    }

    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}
