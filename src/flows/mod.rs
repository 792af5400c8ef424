pub mod catalog;

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{BookingSelection, FieldSpec, ServiceItem, TimeSlot};
use crate::services::{slots, validation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowKind {
    Salon,
    Doctor,
    Travel,
    Repair,
}

impl FlowKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlowKind::Salon => "salon",
            FlowKind::Doctor => "doctor",
            FlowKind::Travel => "travel",
            FlowKind::Repair => "repair",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "salon" => Some(FlowKind::Salon),
            "doctor" => Some(FlowKind::Doctor),
            "travel" => Some(FlowKind::Travel),
            "repair" => Some(FlowKind::Repair),
            _ => None,
        }
    }
}

/// Bookable window for a flow's schedule step.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OperatingHours {
    pub start_hour: u32,
    pub end_hour: u32,
    pub interval_minutes: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StepKind {
    /// Pick from the flow's catalog; `multi` selects zero-or-more vs
    /// exactly one.
    Services { multi: bool },
    /// Pick a date plus one of the generated slots for it.
    Schedule,
    /// Free-form fields checked by the validator.
    Details { fields: Vec<FieldSpec> },
    /// Final look at the summary; advancing completes the flow.
    Review,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepSpec {
    pub id: String,
    pub title: String,
    #[serde(flatten)]
    pub kind: StepKind,
}

impl StepSpec {
    pub fn new(id: &str, title: &str, kind: StepKind) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            kind,
        }
    }
}

/// Static description of one guided flow: catalog, operating hours,
/// step sequence, and the strings its summary uses.
#[derive(Debug, Clone, Serialize)]
pub struct FlowDefinition {
    pub kind: FlowKind,
    pub business_name: String,
    pub whatsapp_number: String,
    pub hours: Option<OperatingHours>,
    pub services: Vec<ServiceItem>,
    pub steps: Vec<StepSpec>,
    /// Summary label for the chosen catalog entries ("Services",
    /// "Doctor", ...).
    pub service_label: String,
    /// Summary label for the price line; None for flows without one.
    pub total_label: Option<String>,
    /// Shown when advancing the catalog step with nothing selected.
    pub select_message: String,
}

impl FlowDefinition {
    pub fn service(&self, id: &str) -> Option<&ServiceItem> {
        self.services.iter().find(|s| s.id == id)
    }

    /// Slots for one date under this flow's hours; empty when the flow
    /// has no schedule step.
    pub fn slots_for(&self, date: NaiveDate, now: NaiveDateTime) -> Vec<TimeSlot> {
        match self.hours {
            Some(hours) => slots::generate(
                date,
                hours.start_hour,
                hours.end_hour,
                hours.interval_minutes,
                &[],
                now,
            ),
            None => Vec::new(),
        }
    }
}

/// Client input for one advance call; the variant must match the
/// session's current step.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "step", rename_all = "lowercase")]
pub enum StepInput {
    Services { service_ids: Vec<String> },
    Schedule { date: NaiveDate, slot_id: String },
    Details { values: BTreeMap<String, String> },
    Confirm,
}

#[derive(Debug, thiserror::Error)]
pub enum StepError {
    /// Flow-scoped precondition failure, surfaced as one blocking
    /// message.
    #[error("{0}")]
    Blocked(String),

    /// Field-scoped validation failures.
    #[error("validation failed")]
    Invalid(BTreeMap<String, String>),

    #[error("expected {expected} input for this step")]
    WrongInput { expected: &'static str },

    #[error("flow already completed")]
    Completed,
}

/// Outcome of the fire-and-forget lead submission. Each submission is
/// an independent attempt; there is no in-flight guard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LeadStatus {
    NotSent,
    Sending,
    Sent,
    Failed { message: String },
}

/// One visitor's progress through a flow: current step, accumulated
/// selection, last validation errors, and lead status. Owned
/// exclusively by its session entry; discarded when the session goes.
#[derive(Debug, Clone, Serialize)]
pub struct FlowSession {
    pub id: String,
    pub flow: FlowKind,
    pub step: usize,
    pub selection: BookingSelection,
    pub errors: BTreeMap<String, String>,
    pub lead: LeadStatus,
    pub completed: bool,
    pub created_at: NaiveDateTime,
}

impl FlowSession {
    pub fn new(flow: FlowKind, created_at: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            flow,
            step: 0,
            selection: BookingSelection::default(),
            errors: BTreeMap::new(),
            lead: LeadStatus::NotSent,
            completed: false,
            created_at,
        }
    }

    pub fn current_step<'a>(&self, def: &'a FlowDefinition) -> &'a StepSpec {
        let idx = self.step.min(def.steps.len().saturating_sub(1));
        &def.steps[idx]
    }

    /// Applies `input` to the current step and advances on success.
    /// A successful advance clears stale field errors; a failed one
    /// leaves the step where it was. Advancing the review step marks
    /// the session complete.
    pub fn advance(
        &mut self,
        def: &FlowDefinition,
        input: StepInput,
        now: NaiveDateTime,
    ) -> Result<(), StepError> {
        if self.completed {
            return Err(StepError::Completed);
        }

        let step = self.current_step(def);
        match (&step.kind, input) {
            (StepKind::Services { multi }, StepInput::Services { service_ids }) => {
                let mut chosen = Vec::new();
                for id in &service_ids {
                    match def.service(id) {
                        Some(service) => chosen.push(service.clone()),
                        None => {
                            return Err(StepError::Blocked(format!("Unknown service: {id}")));
                        }
                    }
                }
                if chosen.is_empty() || (!*multi && chosen.len() > 1) {
                    return Err(StepError::Blocked(def.select_message.clone()));
                }
                self.selection.set_services(chosen);
            }

            (StepKind::Schedule, StepInput::Schedule { date, slot_id }) => {
                let generated = def.slots_for(date, now);
                let Some(slot) = generated.into_iter().find(|s| s.id == slot_id) else {
                    return Err(StepError::Blocked(
                        "Please select a date and time slot".to_string(),
                    ));
                };
                if !slot.available {
                    return Err(StepError::Blocked(
                        "Sorry, that time slot is already booked. Could you pick a different time?"
                            .to_string(),
                    ));
                }
                self.selection.date = Some(date);
                self.selection.slot = Some(slot);
            }

            (StepKind::Details { fields }, StepInput::Details { values }) => {
                let result = validation::validate(fields, &values);
                if !result.valid {
                    self.errors = result.errors.clone();
                    return Err(StepError::Invalid(result.errors));
                }
                for field in fields {
                    if let Some(value) = values.get(&field.id) {
                        self.selection
                            .details
                            .insert(field.id.clone(), value.trim().to_string());
                    }
                }
            }

            (StepKind::Review, StepInput::Confirm) => {
                self.errors.clear();
                self.completed = true;
                return Ok(());
            }

            (expected, _) => {
                return Err(StepError::WrongInput {
                    expected: match expected {
                        StepKind::Services { .. } => "services",
                        StepKind::Schedule => "schedule",
                        StepKind::Details { .. } => "details",
                        StepKind::Review => "confirm",
                    },
                });
            }
        }

        self.errors.clear();
        if self.step + 1 < def.steps.len() {
            self.step += 1;
        }
        Ok(())
    }

    /// Steps back one position, floor zero. Completed sessions stay
    /// completed.
    pub fn back(&mut self) {
        if !self.completed && self.step > 0 {
            self.step -= 1;
        }
    }

    /// Ordered "Label: value" pairs describing the selection, with the
    /// slot label carried verbatim.
    pub fn summary_lines(&self, def: &FlowDefinition) -> Vec<(String, String)> {
        let mut lines = Vec::new();

        if !self.selection.services.is_empty() {
            lines.push((def.service_label.clone(), self.selection.service_names()));
        }
        if let Some(date) = self.selection.date_label() {
            lines.push(("Date".to_string(), date));
        }
        if let Some(slot) = self.selection.slot_label() {
            lines.push(("Time".to_string(), slot.to_string()));
        }

        for step in &def.steps {
            if let StepKind::Details { fields } = &step.kind {
                for field in fields {
                    if let Some(value) = self.selection.detail(&field.id) {
                        if !value.is_empty() {
                            lines.push((field.label.clone(), value.to_string()));
                        }
                    }
                }
            }
        }

        if let Some(total_label) = &def.total_label {
            if !self.selection.services.is_empty() {
                lines.push((
                    total_label.clone(),
                    format!("₹{}", self.selection.total_price()),
                ));
            }
        }

        lines
    }

    /// JSON body for the outbound lead: the flow id plus every summary
    /// line keyed by its label.
    pub fn lead_payload(&self, def: &FlowDefinition) -> serde_json::Value {
        let mut payload = serde_json::Map::new();
        payload.insert(
            "flow".to_string(),
            serde_json::Value::String(self.flow.as_str().to_string()),
        );
        payload.insert(
            "business".to_string(),
            serde_json::Value::String(def.business_name.clone()),
        );
        for (label, value) in self.summary_lines(def) {
            payload.insert(label, serde_json::Value::String(value));
        }
        serde_json::Value::Object(payload)
    }

    pub fn whatsapp_url(&self, def: &FlowDefinition) -> String {
        let message =
            crate::services::whatsapp::booking_message(&def.business_name, &self.summary_lines(def));
        crate::services::whatsapp::deep_link(&def.whatsapp_number, &message)
    }
}
