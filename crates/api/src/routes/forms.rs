//! Route definitions for forms and their responses.
//!
//! ```text
//! GET    /                      list_forms
//! POST   /                      create_form
//! GET    /{id}                  get_form
//! PUT    /{id}                  update_form
//! DELETE /{id}                  delete_form
//! POST   /{id}/responses        submit_response
//! GET    /{id}/responses        list_responses
//! GET    /{id}/summary          get_summary
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::{forms, responses};
use crate::state::AppState;

/// Form routes — mounted at `/forms`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(forms::list_forms).post(forms::create_form))
        .route(
            "/{id}",
            get(forms::get_form)
                .put(forms::update_form)
                .delete(forms::delete_form),
        )
        .route(
            "/{id}/responses",
            get(responses::list_responses).post(responses::submit_response),
        )
        .route("/{id}/summary", get(responses::get_summary))
}
