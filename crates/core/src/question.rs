//! Question model: the closed set of question types and the shape of a
//! single prompt within a form.
//!
//! A question is a plain value; the form owns the (mutable) question list.
//! Editing operations live on [`crate::form::Form`] and always produce new
//! values rather than mutating in place.

use serde::{Deserialize, Serialize};

use crate::types::new_token;

/// Default title for a freshly added question.
pub const DEFAULT_QUESTION_TITLE: &str = "Untitled Question";

/// Placeholder option seeded when a question becomes a choice type.
pub const DEFAULT_OPTION_LABEL: &str = "Option 1";

// ---------------------------------------------------------------------------
// Question type
// ---------------------------------------------------------------------------

/// The closed enumeration of question types.
///
/// Wire names are kebab-case (`short-text`, `multi-choice`, ...). Choice
/// types carry a list of declared options; all other types leave the
/// options list empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    ShortText,
    Paragraph,
    SingleChoice,
    MultiChoice,
    Dropdown,
    Date,
    Time,
}

impl QuestionType {
    /// Whether this type selects among declared options.
    pub fn is_choice(self) -> bool {
        matches!(self, Self::SingleChoice | Self::MultiChoice | Self::Dropdown)
    }

    /// Whether answers to this type are collections rather than single values.
    pub fn is_multi_valued(self) -> bool {
        matches!(self, Self::MultiChoice)
    }

    /// Human-readable label for display in the UI.
    pub fn label(self) -> &'static str {
        match self {
            Self::ShortText => "Short answer",
            Self::Paragraph => "Paragraph",
            Self::SingleChoice => "Single choice",
            Self::MultiChoice => "Multiple choice",
            Self::Dropdown => "Dropdown",
            Self::Date => "Date",
            Self::Time => "Time",
        }
    }
}

// ---------------------------------------------------------------------------
// Question
// ---------------------------------------------------------------------------

/// One typed prompt within a form.
///
/// Ids are opaque tokens, unique among the question's siblings and stable
/// across edits. Respondent answers are keyed by this id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub required: bool,
}

impl Question {
    /// Create a question of the given type with editor defaults: fresh id,
    /// placeholder title, not required, and a single placeholder option for
    /// choice types.
    pub fn new(question_type: QuestionType) -> Self {
        let options = if question_type.is_choice() {
            vec![DEFAULT_OPTION_LABEL.to_string()]
        } else {
            Vec::new()
        };
        Self {
            id: new_token(),
            title: DEFAULT_QUESTION_TITLE.to_string(),
            question_type,
            options,
            required: false,
        }
    }

    /// Clone this question under a fresh id. The original is untouched.
    pub fn duplicate(&self) -> Self {
        Self {
            id: new_token(),
            ..self.clone()
        }
    }

    /// Return a copy with the type switched, normalizing options.
    ///
    /// Switching to a non-choice type clears the option list; switching to a
    /// choice type seeds a placeholder option if the list is empty so the
    /// editor never presents a choice question without options.
    pub fn with_type(&self, question_type: QuestionType) -> Self {
        let options = if question_type.is_choice() {
            if self.options.is_empty() {
                vec![DEFAULT_OPTION_LABEL.to_string()]
            } else {
                self.options.clone()
            }
        } else {
            Vec::new()
        };
        Self {
            question_type,
            options,
            ..self.clone()
        }
    }
}
