//! HTTP-level integration tests for response submission, listing, and the
//! delete cascade.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, build_test_app, delete, get, post_json};
use serde_json::json;
use sqlx::PgPool;

/// Create a survey with one required single-choice question (`q1`), one
/// required multi-choice question (`q2`), and one optional paragraph
/// question (`q3`). Returns the new form's id.
async fn create_survey(app: Router) -> String {
    let response = post_json(
        app,
        "/api/v1/forms",
        json!({
            "title": "Survey",
            "questions": [
                {"id": "q1", "title": "Pick one", "type": "single-choice", "options": ["A", "B"], "required": true},
                {"id": "q2", "title": "Pick any", "type": "multi-choice", "options": ["X", "Y", "Z"], "required": true},
                {"id": "q3", "title": "Comments", "type": "paragraph", "options": [], "required": false}
            ]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"]
        .as_str()
        .expect("form id")
        .to_string()
}

// ---------------------------------------------------------------------------
// Test: submission with missing required answers returns 422 listing every
// failing question, and creates nothing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_submit_reports_all_violations(pool: PgPool) {
    let app = build_test_app(pool);
    let id = create_survey(app.clone()).await;

    let response = post_json(app.clone(), &format!("/api/v1/forms/{id}/responses"), json!({})).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_FAILED");
    assert_eq!(body["violations"]["q1"], "This question is required");
    assert_eq!(body["violations"]["q2"], "This question is required");
    assert!(body["violations"].get("q3").is_none());

    // No response was created.
    let response = get(app, &format!("/api/v1/forms/{id}/responses")).await;
    let listed = body_json(response).await;
    assert!(listed["data"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Test: whitespace-only text does not satisfy a required question
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_whitespace_only_answer_is_rejected(pool: PgPool) {
    let app = build_test_app(pool);
    let id = create_survey(app.clone()).await;

    let response = post_json(
        app,
        &format!("/api/v1/forms/{id}/responses"),
        json!({"q1": "   ", "q2": ["X"]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["violations"]["q1"], "This question is required");
    assert!(body["violations"].get("q2").is_none());
}

// ---------------------------------------------------------------------------
// Test: a valid submission round-trips through the listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_valid_submission_round_trips(pool: PgPool) {
    let app = build_test_app(pool);
    let id = create_survey(app.clone()).await;

    let answers = json!({"q1": "A", "q2": ["X", "Y"], "q3": "free text"});
    let response = post_json(app.clone(), &format!("/api/v1/forms/{id}/responses"), answers.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    let response_id = created["data"]["id"].as_str().expect("response id");
    assert_eq!(created["data"]["form_id"], id.as_str());
    assert_eq!(created["data"]["answers"], answers);

    let response = get(app, &format!("/api/v1/forms/{id}/responses")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let listed = body_json(response).await;
    let items = listed["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], response_id);
    assert_eq!(items[0]["answers"], answers);
}

// ---------------------------------------------------------------------------
// Test: submitting against an unknown form returns 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_submit_to_missing_form_returns_404(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(app, "/api/v1/forms/no-such-form/responses", json!({"q1": "A"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: deleting a form cascades to its responses
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_form_cascades_to_responses(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let id = create_survey(app.clone()).await;

    for choice in ["A", "B"] {
        let response = post_json(
            app.clone(),
            &format!("/api/v1/forms/{id}/responses"),
            json!({"q1": choice, "q2": ["Z"]}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = delete(app.clone(), &format!("/api/v1/forms/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The form is gone...
    let response = get(app, &format!("/api/v1/forms/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // ...and no orphaned responses remain.
    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM responses WHERE form_id = $1")
        .bind(&id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0);
}
