use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{ServiceItem, TimeSlot};

/// Everything a visitor has picked so far in one flow. Created empty
/// when the session starts, filled in as steps advance, summarized on
/// completion. Never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingSelection {
    pub date: Option<NaiveDate>,
    pub slot: Option<TimeSlot>,
    pub services: Vec<ServiceItem>,
    pub details: BTreeMap<String, String>,
}

impl BookingSelection {
    /// Adds the service if absent, removes it if already selected.
    pub fn toggle_service(&mut self, service: ServiceItem) {
        if let Some(pos) = self.services.iter().position(|s| s.id == service.id) {
            self.services.remove(pos);
        } else {
            self.services.push(service);
        }
    }

    /// Replaces the selected services wholesale, dropping duplicate ids.
    pub fn set_services(&mut self, services: Vec<ServiceItem>) {
        self.services.clear();
        for service in services {
            if !self.services.iter().any(|s| s.id == service.id) {
                self.services.push(service);
            }
        }
    }

    pub fn total_price(&self) -> u32 {
        self.services.iter().map(|s| s.price).sum()
    }

    pub fn total_duration(&self) -> u32 {
        self.services.iter().map(|s| s.duration_minutes).sum()
    }

    pub fn service_names(&self) -> String {
        self.services
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// "Mon Jun 16 2025" style, matching the summary cards.
    pub fn date_label(&self) -> Option<String> {
        self.date.map(|d| d.format("%a %b %-d %Y").to_string())
    }

    pub fn slot_label(&self) -> Option<&str> {
        self.slot.as_ref().map(|s| s.label.as_str())
    }

    pub fn detail(&self, id: &str) -> Option<&str> {
        self.details.get(id).map(|v| v.as_str())
    }
}
