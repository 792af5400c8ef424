use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::errors::AppError;
use crate::flows::{catalog, LeadStatus};
use crate::services::leads::LEAD_FAILURE_MESSAGE;
use crate::state::AppState;

/// Fire-and-forget lead submission. Returns 202 immediately; the
/// outcome lands on the session's lead status. Submitting again starts
/// a fresh independent attempt — there is no in-flight guard.
pub async fn submit_lead(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let payload = {
        let mut sessions = state.sessions.lock().unwrap();
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("session {id}")))?;
        let def = catalog::definition(session.flow);
        session.lead = LeadStatus::Sending;
        session.lead_payload(&def)
    };

    let endpoint = state.config.lead_endpoint.clone();
    let task_state = Arc::clone(&state);
    let session_id = id.clone();

    tokio::spawn(async move {
        // Empty endpoint = dev mode: log and report success
        let outcome = if endpoint.is_empty() {
            tracing::info!(session = %session_id, payload = %payload, "lead endpoint not configured, logging only");
            Ok(())
        } else {
            task_state.leads.send_lead(&endpoint, &payload).await
        };

        let status = match outcome {
            Ok(()) => LeadStatus::Sent,
            Err(e) => {
                tracing::warn!(session = %session_id, error = %e, "lead submission failed");
                LeadStatus::Failed {
                    message: LEAD_FAILURE_MESSAGE.to_string(),
                }
            }
        };

        let mut sessions = task_state.sessions.lock().unwrap();
        if let Some(session) = sessions.get_mut(&session_id) {
            session.lead = status;
        }
    });

    Ok((
        StatusCode::ACCEPTED,
        Json(serde_json::json!({ "lead": LeadStatus::Sending })),
    ))
}
