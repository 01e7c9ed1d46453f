//! Form model: an ordered collection of questions plus display metadata.
//!
//! The form is the root aggregate. All editing operations take `&self` and
//! return a new `Form` value — the caller's prior reference is never
//! mutated, which keeps concurrent readers (and undo-style UIs) safe by
//! construction. Question list order is the single source of truth for
//! display and report column order; there is no separate order field.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::question::{Question, QuestionType};
use crate::types::{new_token, Timestamp};

/// Title used when a form is created without one.
pub const DEFAULT_FORM_TITLE: &str = "Untitled Form";

// ---------------------------------------------------------------------------
// Form
// ---------------------------------------------------------------------------

/// An ordered set of questions plus metadata; the unit of authoring and
/// distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub questions: Vec<Question>,
    pub created_at: Timestamp,
}

/// Partial patch applied to a form via [`Form::apply`].
///
/// Absent fields leave the current value untouched. `id` and `created_at`
/// are not patchable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub questions: Option<Vec<Question>>,
}

/// Partial patch applied to a single question via [`Form::update_question`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionUpdate {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub question_type: Option<QuestionType>,
    pub options: Option<Vec<String>>,
    pub required: Option<bool>,
}

impl Form {
    /// Create a form with a fresh id and creation timestamp.
    ///
    /// Titles are not validated here — an empty title is allowed and the UI
    /// substitutes a placeholder.
    pub fn new(title: impl Into<String>, description: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            id: new_token(),
            title: title.into(),
            description: description.into(),
            questions,
            created_at: chrono::Utc::now(),
        }
    }

    /// Merge a partial update, returning the patched form.
    ///
    /// `id` and `created_at` always carry over unchanged.
    pub fn apply(&self, update: FormUpdate) -> Self {
        Self {
            id: self.id.clone(),
            title: update.title.unwrap_or_else(|| self.title.clone()),
            description: update.description.unwrap_or_else(|| self.description.clone()),
            questions: update.questions.unwrap_or_else(|| self.questions.clone()),
            created_at: self.created_at,
        }
    }

    /// Look up a question by id.
    pub fn question(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }

    /// Append a new question of the given type with editor defaults.
    pub fn add_question(&self, question_type: QuestionType) -> Self {
        let mut questions = self.questions.clone();
        questions.push(Question::new(question_type));
        Self {
            questions,
            ..self.clone()
        }
    }

    /// Remove a question by id. No-op if the id is not present.
    pub fn remove_question(&self, question_id: &str) -> Self {
        Self {
            questions: self
                .questions
                .iter()
                .filter(|q| q.id != question_id)
                .cloned()
                .collect(),
            ..self.clone()
        }
    }

    /// Duplicate a question, inserting the clone directly after the
    /// original. The clone gets a fresh id; the original is untouched.
    /// No-op if the id is not present.
    pub fn duplicate_question(&self, question_id: &str) -> Self {
        let mut questions = self.questions.clone();
        if let Some(pos) = questions.iter().position(|q| q.id == question_id) {
            let copy = questions[pos].duplicate();
            questions.insert(pos + 1, copy);
        }
        Self {
            questions,
            ..self.clone()
        }
    }

    /// Move a question to `new_index`, shifting its neighbors.
    ///
    /// The index is clamped to the list bounds. No-op if the id is not
    /// present.
    pub fn move_question(&self, question_id: &str, new_index: usize) -> Self {
        let mut questions = self.questions.clone();
        if let Some(pos) = questions.iter().position(|q| q.id == question_id) {
            let question = questions.remove(pos);
            let target = new_index.min(questions.len());
            questions.insert(target, question);
        }
        Self {
            questions,
            ..self.clone()
        }
    }

    /// Patch a single question in place (by value), normalizing options
    /// against the resulting type: non-choice types end up with no options,
    /// choice types never end up with an empty option list.
    ///
    /// No-op if the id is not present.
    pub fn update_question(&self, question_id: &str, patch: QuestionUpdate) -> Self {
        let questions = self
            .questions
            .iter()
            .map(|q| {
                if q.id != question_id {
                    return q.clone();
                }
                let mut patched = Question {
                    id: q.id.clone(),
                    title: patch.title.clone().unwrap_or_else(|| q.title.clone()),
                    question_type: patch.question_type.unwrap_or(q.question_type),
                    options: patch.options.clone().unwrap_or_else(|| q.options.clone()),
                    required: patch.required.unwrap_or(q.required),
                };
                patched = patched.with_type(patched.question_type);
                patched
            })
            .collect();
        Self {
            questions,
            ..self.clone()
        }
    }

    /// Guard the aggregate invariant: question ids must be unique within
    /// one form. Duplicates are a conflict, never silently ignored.
    pub fn check_integrity(&self) -> Result<(), CoreError> {
        let mut seen = std::collections::HashSet::new();
        for question in &self.questions {
            if !seen.insert(question.id.as_str()) {
                return Err(CoreError::Conflict(format!(
                    "Duplicate question id '{}' in form '{}'",
                    question.id, self.id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_form() -> Form {
        Form::new(
            "Customer Feedback",
            "Help us improve",
            vec![
                Question::new(QuestionType::ShortText),
                Question::new(QuestionType::SingleChoice),
            ],
        )
    }

    // --- Creation & update ---

    #[test]
    fn new_form_assigns_id_and_timestamp() {
        let form = sample_form();
        assert!(!form.id.is_empty());
        assert_eq!(form.questions.len(), 2);
    }

    #[test]
    fn apply_merges_without_touching_id_or_created_at() {
        let form = sample_form();
        let patched = form.apply(FormUpdate {
            title: Some("Renamed".into()),
            ..Default::default()
        });
        assert_eq!(patched.title, "Renamed");
        assert_eq!(patched.id, form.id);
        assert_eq!(patched.created_at, form.created_at);
        assert_eq!(patched.description, form.description);
        // The original value is unchanged.
        assert_eq!(form.title, "Customer Feedback");
    }

    #[test]
    fn apply_can_replace_question_list() {
        let form = sample_form();
        let patched = form.apply(FormUpdate {
            questions: Some(vec![]),
            ..Default::default()
        });
        assert!(patched.questions.is_empty());
        assert_eq!(form.questions.len(), 2);
    }

    // --- Question list editing ---

    #[test]
    fn add_question_appends_with_defaults() {
        let form = sample_form().add_question(QuestionType::Dropdown);
        assert_eq!(form.questions.len(), 3);
        assert_eq!(form.questions[2].question_type, QuestionType::Dropdown);
        assert_eq!(form.questions[2].options, vec!["Option 1"]);
    }

    #[test]
    fn remove_question_is_noop_for_unknown_id() {
        let form = sample_form();
        let same = form.remove_question("no-such-id");
        assert_eq!(same.questions.len(), 2);
    }

    #[test]
    fn remove_question_drops_matching_id() {
        let form = sample_form();
        let target = form.questions[0].id.clone();
        let trimmed = form.remove_question(&target);
        assert_eq!(trimmed.questions.len(), 1);
        assert!(trimmed.question(&target).is_none());
    }

    #[test]
    fn duplicate_question_inserts_clone_after_original() {
        let form = sample_form();
        let target = form.questions[0].id.clone();
        let duplicated = form.duplicate_question(&target);
        assert_eq!(duplicated.questions.len(), 3);
        assert_eq!(duplicated.questions[0].id, target);
        assert_ne!(duplicated.questions[1].id, target);
        assert_eq!(duplicated.questions[1].title, duplicated.questions[0].title);
        duplicated.check_integrity().unwrap();
    }

    #[test]
    fn move_question_reorders_and_clamps() {
        let form = sample_form();
        let first = form.questions[0].id.clone();
        let moved = form.move_question(&first, 5);
        assert_eq!(moved.questions[1].id, first);
        let back = moved.move_question(&first, 0);
        assert_eq!(back.questions[0].id, first);
    }

    #[test]
    fn update_question_patches_fields_and_normalizes_options() {
        let form = sample_form();
        let target = form.questions[1].id.clone();
        let updated = form.update_question(
            &target,
            QuestionUpdate {
                title: Some("Pick one".into()),
                required: Some(true),
                ..Default::default()
            },
        );
        let q = updated.question(&target).unwrap();
        assert_eq!(q.title, "Pick one");
        assert!(q.required);

        // Switching to a text type clears the option list.
        let retyped = updated.update_question(
            &target,
            QuestionUpdate {
                question_type: Some(QuestionType::Paragraph),
                ..Default::default()
            },
        );
        assert!(retyped.question(&target).unwrap().options.is_empty());
    }

    // --- Integrity ---

    #[test]
    fn check_integrity_rejects_duplicate_question_ids() {
        let mut form = sample_form();
        let mut dupe = form.questions[0].clone();
        dupe.title = "Copy with stolen id".into();
        form.questions.push(dupe);
        let err = form.check_integrity().unwrap_err();
        assert!(matches!(err, CoreError::Conflict(_)));
    }
}
