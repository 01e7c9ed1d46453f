//! Row model for the `forms` table.

use formsmith_core::form::Form;
use formsmith_core::question::Question;
use formsmith_core::types::Timestamp;
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `forms` table. The question list is stored as JSONB and
/// decoded into typed questions during row mapping.
#[derive(Debug, Clone, FromRow)]
pub struct FormRow {
    pub id: String,
    pub title: String,
    pub description: String,
    pub questions: Json<Vec<Question>>,
    pub created_at: Timestamp,
}

impl From<FormRow> for Form {
    fn from(row: FormRow) -> Self {
        Form {
            id: row.id,
            title: row.title,
            description: row.description,
            questions: row.questions.0,
            created_at: row.created_at,
        }
    }
}
