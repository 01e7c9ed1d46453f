//! Answer representation: what one respondent provides for one question.
//!
//! Stored answers are schema-less at the persistence boundary (a JSON map
//! keyed by question id). In core they are a tagged union so the validator
//! and aggregator match on the question's *declared* type to interpret the
//! value instead of trusting runtime shape.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The value a respondent supplied for a single question.
///
/// Single-valued types (short-text, paragraph, single-choice, dropdown,
/// date, time) carry a free-form string; multi-choice carries a list of
/// selected option strings. Date/time values are intentionally left as
/// unvalidated strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    Selections(Vec<String>),
}

/// One respondent's answers, keyed by question id.
///
/// Keys need not cover every question: unanswered optional questions may be
/// absent entirely or present with an empty value.
pub type AnswerSet = BTreeMap<String, AnswerValue>;

impl AnswerValue {
    /// Whether this value counts as answered: non-whitespace text, or at
    /// least one selection.
    pub fn is_answered(&self) -> bool {
        match self {
            Self::Text(text) => !text.trim().is_empty(),
            Self::Selections(items) => !items.is_empty(),
        }
    }

    /// The single text value, if this is a text answer.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Selections(_) => None,
        }
    }

    /// The selection list, if this is a multi-valued answer.
    pub fn as_selections(&self) -> Option<&[String]> {
        match self {
            Self::Text(_) => None,
            Self::Selections(items) => Some(items),
        }
    }
}
