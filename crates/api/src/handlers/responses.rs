//! Handlers for response collection and the summary report.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use formsmith_core::answer::AnswerSet;
use formsmith_core::error::CoreError;
use formsmith_core::response;
use formsmith_core::summary::{self, QuestionSummary};
use formsmith_db::repositories::ResponseRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::forms::ensure_form_exists;
use crate::response::DataResponse;
use crate::state::AppState;

/// Aggregated report payload for one form.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub form_id: String,
    pub total_responses: i64,
    pub questions: Vec<QuestionSummary>,
}

// ---------------------------------------------------------------------------
// POST /forms/{id}/responses
// ---------------------------------------------------------------------------

/// Submit a respondent's answers against a form.
///
/// The answer validator runs first; any required-question violation rejects
/// the submission with a 422 carrying the full violation map. The insert
/// re-checks form existence inside its transaction, so a submission racing
/// a deletion fails with 404 instead of creating an orphan.
pub async fn submit_response(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(answers): Json<AnswerSet>,
) -> AppResult<impl IntoResponse> {
    let form = ensure_form_exists(&state.pool, &id).await?;

    let accepted = response::submit(&form, &answers).map_err(AppError::Rejected)?;

    let stored = ResponseRepo::create(&state.pool, &accepted).await?;
    if !stored {
        // The form vanished between the lookup and the insert.
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Form",
            id,
        }));
    }

    tracing::info!(form_id = %accepted.form_id, response_id = %accepted.id, "Response submitted");
    Ok((StatusCode::CREATED, Json(DataResponse { data: accepted })))
}

// ---------------------------------------------------------------------------
// GET /forms/{id}/responses
// ---------------------------------------------------------------------------

/// List all responses collected for a form, oldest first.
pub async fn list_responses(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    ensure_form_exists(&state.pool, &id).await?;
    let items = ResponseRepo::list_for_form(&state.pool, &id).await?;
    tracing::debug!(form_id = %id, count = items.len(), "Listed responses");
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// GET /forms/{id}/summary
// ---------------------------------------------------------------------------

/// Per-question aggregated statistics for the report view.
///
/// The report reflects whatever responses are durably committed at read
/// time; choice questions get option counts, free-text questions are
/// listed raw by the UI from the response listing instead.
pub async fn get_summary(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let form = ensure_form_exists(&state.pool, &id).await?;
    let responses = ResponseRepo::list_for_form(&state.pool, &id).await?;

    let questions = summary::summarize(&form, &responses);
    Ok(Json(DataResponse {
        data: SummaryResponse {
            form_id: form.id,
            total_responses: responses.len() as i64,
            questions,
        },
    }))
}
