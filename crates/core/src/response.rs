//! Response model: the immutable record of one submission against a form.
//!
//! Responses are only ever created through [`submit`], which runs the
//! validator first. A response holds a weak reference to its form (the id);
//! deleting the form cascades to its responses at the persistence layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::answer::AnswerSet;
use crate::form::Form;
use crate::types::{new_token, Timestamp};
use crate::validator;

/// One respondent's accepted answer set against a specific form.
///
/// Never mutated after creation; deleted only as a cascade of form
/// deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormResponse {
    pub id: String,
    pub form_id: String,
    pub answers: AnswerSet,
    pub submitted_at: Timestamp,
}

/// A submission turned away by the validator.
///
/// Carries the full violation map (question id → reason) so every failing
/// question can be surfaced to the respondent at once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedSubmission {
    pub violations: BTreeMap<String, String>,
}

/// Validate a candidate answer set and, if clean, mint a response.
///
/// On any violation no response is created and the violation map is
/// returned instead. On success the response stores its own copy of the
/// answers: mutating the caller's map afterwards cannot affect the record.
pub fn submit(form: &Form, answers: &AnswerSet) -> Result<FormResponse, RejectedSubmission> {
    let violations = validator::validate(form, answers);
    if !violations.is_empty() {
        return Err(RejectedSubmission { violations });
    }
    Ok(FormResponse {
        id: new_token(),
        form_id: form.id.clone(),
        answers: answers.clone(),
        submitted_at: chrono::Utc::now(),
    })
}
