//! Required-question validation applied at submission time.
//!
//! `validate` is a pure function over a form and a candidate answer set. It
//! reports *every* failing question in one pass so the UI can highlight all
//! problems simultaneously, and never rejects anything on a non-required
//! question.

use std::collections::BTreeMap;

use crate::answer::{AnswerSet, AnswerValue};
use crate::form::Form;

/// The single violation message. Per product decision there is no per-type
/// customization.
pub const REQUIRED_MESSAGE: &str = "This question is required";

/// Check a candidate answer set against a form's required questions.
///
/// Returns a map from question id to a human-readable reason; an empty map
/// means the submission may proceed. For a required multi-choice question
/// the answer must be a selection list with at least one entry; for every
/// other required type it must be a single string that is non-empty after
/// trimming. A value of the wrong shape for the declared type counts as
/// missing. Non-required questions never produce a violation.
pub fn validate(form: &Form, answers: &AnswerSet) -> BTreeMap<String, String> {
    let mut violations = BTreeMap::new();

    for question in &form.questions {
        if !question.required {
            continue;
        }
        let value = answers.get(&question.id);
        let satisfied = if question.question_type.is_multi_valued() {
            matches!(value, Some(AnswerValue::Selections(items)) if !items.is_empty())
        } else {
            matches!(value, Some(AnswerValue::Text(text)) if !text.trim().is_empty())
        };
        if !satisfied {
            violations.insert(question.id.clone(), REQUIRED_MESSAGE.to_string());
        }
    }

    violations
}
