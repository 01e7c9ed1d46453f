//! Handlers for form authoring: listing, creation, fetch, update, deletion.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use formsmith_core::error::CoreError;
use formsmith_core::form::{Form, FormUpdate, DEFAULT_FORM_TITLE};
use formsmith_core::question::Question;
use formsmith_db::repositories::FormRepo;

use crate::error::{AppError, AppResult};
use crate::query::PageParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Payload for creating a form. The builder UI sends a full draft; every
/// field is optional and the model is permissive about empty titles.
#[derive(Debug, Deserialize)]
pub struct CreateForm {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// Pagination envelope for the form listing.
#[derive(Debug, Serialize)]
pub struct FormListResponse {
    pub forms: Vec<Form>,
    pub total_forms: i64,
    pub total_pages: i64,
    pub current_page: i64,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fetch a form or map its absence to a 404.
pub(crate) async fn ensure_form_exists(pool: &sqlx::PgPool, id: &str) -> AppResult<Form> {
    FormRepo::find_by_id(pool, id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Form",
            id: id.to_string(),
        })
    })
}

// ---------------------------------------------------------------------------
// GET /forms
// ---------------------------------------------------------------------------

/// List forms, newest first, with the pagination envelope the dashboard
/// consumes (`forms`, `total_forms`, `total_pages`, `current_page`).
pub async fn list_forms(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let limit = params.limit();
    let page = params.page();

    let forms = FormRepo::list(&state.pool, limit, params.offset()).await?;
    let total_forms = FormRepo::count(&state.pool).await?;
    let total_pages = (total_forms + limit - 1) / limit;

    tracing::debug!(count = forms.len(), page, "Listed forms");
    Ok(Json(FormListResponse {
        forms,
        total_forms,
        total_pages,
        current_page: page,
    }))
}

// ---------------------------------------------------------------------------
// POST /forms
// ---------------------------------------------------------------------------

/// Create a form from a builder draft.
pub async fn create_form(
    State(state): State<AppState>,
    Json(input): Json<CreateForm>,
) -> AppResult<impl IntoResponse> {
    let form = Form::new(
        input.title.unwrap_or_else(|| DEFAULT_FORM_TITLE.to_string()),
        input.description.unwrap_or_default(),
        input.questions,
    );
    form.check_integrity()?;

    FormRepo::create(&state.pool, &form).await?;
    tracing::info!(id = %form.id, title = %form.title, "Form created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: form })))
}

// ---------------------------------------------------------------------------
// GET /forms/{id}
// ---------------------------------------------------------------------------

/// Fetch a single form by id.
pub async fn get_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let form = ensure_form_exists(&state.pool, &id).await?;
    Ok(Json(DataResponse { data: form }))
}

// ---------------------------------------------------------------------------
// PUT /forms/{id}
// ---------------------------------------------------------------------------

/// Apply a partial update to a form. `id` and `created_at` never change.
pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<FormUpdate>,
) -> AppResult<impl IntoResponse> {
    let form = ensure_form_exists(&state.pool, &id).await?;
    let patched = form.apply(update);
    patched.check_integrity()?;

    FormRepo::update(&state.pool, &patched).await?;
    tracing::info!(id = %patched.id, "Form updated");
    Ok(Json(DataResponse { data: patched }))
}

// ---------------------------------------------------------------------------
// DELETE /forms/{id}
// ---------------------------------------------------------------------------

/// Delete a form. All responses referencing it are removed in the same
/// statement via the foreign-key cascade.
pub async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let deleted = FormRepo::delete(&state.pool, &id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Form",
            id,
        }));
    }
    tracing::info!(%id, "Form deleted with its responses");
    Ok(StatusCode::NO_CONTENT)
}
