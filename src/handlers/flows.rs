use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{Local, NaiveDate};
use serde::Deserialize;

use crate::errors::AppError;
use crate::flows::{catalog, FlowDefinition, FlowKind, FlowSession, StepInput};
use crate::services::slots;
use crate::state::AppState;

fn parse_flow(raw: &str) -> Result<FlowKind, AppError> {
    FlowKind::parse(raw).ok_or_else(|| AppError::UnknownFlow(raw.to_string()))
}

fn session_view(session: &FlowSession, def: &FlowDefinition) -> serde_json::Value {
    let step = session.current_step(def);
    serde_json::json!({
        "session_id": session.id,
        "flow": session.flow,
        "business_name": def.business_name,
        "step": session.step,
        "step_id": step.id,
        "total_steps": def.steps.len(),
        "completed": session.completed,
        "selection": session.selection,
        "summary": session.summary_lines(def),
        "errors": session.errors,
        "lead": session.lead,
    })
}

/// Static catalog for one flow: steps, services, hours.
pub async fn get_flow(Path(raw): Path<String>) -> Result<Json<FlowDefinition>, AppError> {
    let kind = parse_flow(&raw)?;
    Ok(Json(catalog::definition(kind)))
}

pub async fn create_session(
    State(state): State<Arc<AppState>>,
    Path(raw): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let kind = parse_flow(&raw)?;
    let def = catalog::definition(kind);
    let session = FlowSession::new(kind, Local::now().naive_local());

    tracing::info!(flow = kind.as_str(), session = %session.id, "session started");

    let view = session_view(&session, &def);
    state
        .sessions
        .lock()
        .unwrap()
        .insert(session.id.clone(), session);

    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let sessions = state.sessions.lock().unwrap();
    let session = sessions
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("session {id}")))?;
    let def = catalog::definition(session.flow);
    Ok(Json(session_view(session, &def)))
}

#[derive(Deserialize)]
pub struct SessionSlotsQuery {
    pub date: NaiveDate,
}

/// Slots for one date under the session flow's operating hours.
pub async fn get_session_slots(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<SessionSlotsQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let flow = {
        let sessions = state.sessions.lock().unwrap();
        sessions
            .get(&id)
            .map(|s| s.flow)
            .ok_or_else(|| AppError::NotFound(format!("session {id}")))?
    };

    let def = catalog::definition(flow);
    if def.hours.is_none() {
        return Err(AppError::BadRequest(format!(
            "{} flow has no schedule step",
            flow.as_str()
        )));
    }

    let generated = def.slots_for(query.date, Local::now().naive_local());
    let total = generated.len();
    let grouped = slots::group(generated);

    Ok(Json(serde_json::json!({
        "date": query.date,
        "total": total,
        "slots": grouped,
    })))
}

pub async fn advance_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(input): Json<StepInput>,
) -> Result<Json<serde_json::Value>, AppError> {
    let mut sessions = state.sessions.lock().unwrap();
    let session = sessions
        .get_mut(&id)
        .ok_or_else(|| AppError::NotFound(format!("session {id}")))?;
    let def = catalog::definition(session.flow);

    session.advance(&def, input, Local::now().naive_local())?;

    tracing::info!(
        session = %session.id,
        step = session.step,
        completed = session.completed,
        "session advanced"
    );
    Ok(Json(session_view(session, &def)))
}

pub async fn back_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let mut sessions = state.sessions.lock().unwrap();
    let session = sessions
        .get_mut(&id)
        .ok_or_else(|| AppError::NotFound(format!("session {id}")))?;
    let def = catalog::definition(session.flow);

    session.back();
    Ok(Json(session_view(session, &def)))
}

/// Deep link for the session's current summary.
pub async fn get_whatsapp_link(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let sessions = state.sessions.lock().unwrap();
    let session = sessions
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("session {id}")))?;
    let def = catalog::definition(session.flow);

    Ok(Json(serde_json::json!({
        "url": session.whatsapp_url(&def),
    })))
}
