use axum::extract::Query;
use axum::Json;
use chrono::{Local, NaiveDate};
use serde::Deserialize;

use crate::services::slots;

#[derive(Deserialize)]
pub struct SlotsQuery {
    pub date: NaiveDate,
    pub start_hour: u32,
    pub end_hour: u32,
    pub interval_minutes: u32,
    /// Comma-separated labels already taken, e.g. "10:00 AM,2:30 PM".
    pub booked: Option<String>,
}

/// Display boundary: grouped slots for an arbitrary window. An
/// inverted or empty window is not an error, it just has no slots.
/// The flow session endpoints use each flow's own hours instead.
pub async fn get_slots(Query(query): Query<SlotsQuery>) -> Json<serde_json::Value> {
    let booked: Vec<String> = query
        .booked
        .as_deref()
        .unwrap_or("")
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    let now = Local::now().naive_local();
    let generated = slots::generate(
        query.date,
        query.start_hour,
        query.end_hour,
        query.interval_minutes,
        &booked,
        now,
    );
    let total = generated.len();
    let grouped = slots::group(generated);

    Json(serde_json::json!({
        "date": query.date,
        "total": total,
        "slots": grouped,
    }))
}
