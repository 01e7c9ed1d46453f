//! Repository for the `forms` table.

use formsmith_core::form::Form;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::form::FormRow;

const FORM_COLUMNS: &str = "id, title, description, questions, created_at";

/// Provides CRUD operations for forms.
///
/// Deleting a form removes its responses in the same statement via the
/// `ON DELETE CASCADE` foreign key, so deletion is atomic with respect to
/// concurrent submissions.
pub struct FormRepo;

impl FormRepo {
    /// Persist a freshly created form.
    pub async fn create(pool: &PgPool, form: &Form) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO forms (id, title, description, questions, created_at) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&form.id)
        .bind(&form.title)
        .bind(&form.description)
        .bind(Json(&form.questions))
        .bind(form.created_at)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Find a form by its id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Form>, sqlx::Error> {
        let query = format!("SELECT {FORM_COLUMNS} FROM forms WHERE id = $1");
        let row = sqlx::query_as::<_, FormRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Form::from))
    }

    /// List forms, newest first.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Form>, sqlx::Error> {
        let query = format!(
            "SELECT {FORM_COLUMNS} FROM forms ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, FormRow>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Form::from).collect())
    }

    /// Total number of forms.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM forms")
            .fetch_one(pool)
            .await
    }

    /// Overwrite a form's mutable fields. Returns whether a row matched.
    ///
    /// `id` and `created_at` are never written after creation.
    pub async fn update(pool: &PgPool, form: &Form) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE forms SET title = $2, description = $3, questions = $4 WHERE id = $1",
        )
        .bind(&form.id)
        .bind(&form.title)
        .bind(&form.description)
        .bind(Json(&form.questions))
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a form and, via cascade, all of its responses. Returns
    /// whether a row was deleted.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM forms WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
