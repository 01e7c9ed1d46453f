pub mod forms;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /forms                        list (paginated), create
/// /forms/{id}                   get, update, delete (cascades responses)
/// /forms/{id}/responses         submit, list
/// /forms/{id}/summary           per-question aggregated statistics
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/forms", forms::router())
}
