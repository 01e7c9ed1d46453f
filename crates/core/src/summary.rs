//! Response aggregation for the report view.
//!
//! Choice-type questions (single-choice, multi-choice, dropdown) get
//! per-option counts; everything else is listed verbatim by the reporting
//! layer, so its summary carries no statistic. Option iteration follows the
//! question's declared option order for reproducible report rendering.

use serde::Serialize;

use crate::answer::AnswerValue;
use crate::form::Form;
use crate::question::{Question, QuestionType};
use crate::response::FormResponse;

// ---------------------------------------------------------------------------
// Summary types
// ---------------------------------------------------------------------------

/// Count and display percentage for one declared option.
///
/// The raw count is canonical; `percent` is rounded to the nearest integer
/// over the *total* response count and exists for display only. With zero
/// responses the percentage is defined as 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionCount {
    pub option: String,
    pub count: u64,
    pub percent: u32,
}

/// Aggregated view of one question across all responses.
///
/// `stats` is `None` for free-text question types — those have no numeric
/// aggregation and the report lists raw answers per response instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionSummary {
    pub question_id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub answered: u64,
    pub stats: Option<Vec<OptionCount>>,
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Compute per-question statistics over a set of responses.
///
/// Summaries come back in the form's question order. Matching is exact
/// string equality against declared options — case-sensitive, no trimming;
/// answers that match no declared option are tolerated and simply not
/// counted. Every declared option appears in the result, zero counts
/// included.
pub fn summarize(form: &Form, responses: &[FormResponse]) -> Vec<QuestionSummary> {
    let total = responses.len() as u64;
    form.questions
        .iter()
        .map(|question| summarize_question(question, responses, total))
        .collect()
}

fn summarize_question(
    question: &Question,
    responses: &[FormResponse],
    total: u64,
) -> QuestionSummary {
    let answered = responses
        .iter()
        .filter(|r| {
            r.answers
                .get(&question.id)
                .is_some_and(AnswerValue::is_answered)
        })
        .count() as u64;

    let stats = match question.question_type {
        QuestionType::SingleChoice | QuestionType::Dropdown => {
            Some(count_options(question, responses, total, |value, option| {
                value.as_text() == Some(option)
            }))
        }
        QuestionType::MultiChoice => {
            // One response can increment several option counts.
            Some(count_options(question, responses, total, |value, option| {
                value
                    .as_selections()
                    .is_some_and(|items| items.iter().any(|item| item == option))
            }))
        }
        QuestionType::ShortText | QuestionType::Paragraph | QuestionType::Date | QuestionType::Time => None,
    };

    QuestionSummary {
        question_id: question.id.clone(),
        title: question.title.clone(),
        question_type: question.question_type,
        answered,
        stats,
    }
}

fn count_options(
    question: &Question,
    responses: &[FormResponse],
    total: u64,
    matches: impl Fn(&AnswerValue, &str) -> bool,
) -> Vec<OptionCount> {
    question
        .options
        .iter()
        .map(|option| {
            let count = responses
                .iter()
                .filter(|r| {
                    r.answers
                        .get(&question.id)
                        .is_some_and(|value| matches(value, option))
                })
                .count() as u64;
            OptionCount {
                option: option.clone(),
                count,
                percent: percent_of(count, total),
            }
        })
        .collect()
}

/// `count / total * 100` rounded to the nearest integer; 0 when `total` is 0.
fn percent_of(count: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    ((count as f64 / total as f64) * 100.0).round() as u32
}
