//! Row model for the `responses` table.

use formsmith_core::answer::AnswerSet;
use formsmith_core::response::FormResponse;
use formsmith_core::types::Timestamp;
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `responses` table. The answer map is schema-less JSONB,
/// decoded into the core tagged union during row mapping.
#[derive(Debug, Clone, FromRow)]
pub struct ResponseRow {
    pub id: String,
    pub form_id: String,
    pub answers: Json<AnswerSet>,
    pub submitted_at: Timestamp,
}

impl From<ResponseRow> for FormResponse {
    fn from(row: ResponseRow) -> Self {
        FormResponse {
            id: row.id,
            form_id: row.form_id,
            answers: row.answers.0,
            submitted_at: row.submitted_at,
        }
    }
}
