//! Repository for the `responses` table.

use formsmith_core::response::FormResponse;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::response::ResponseRow;

const RESPONSE_COLUMNS: &str = "id, form_id, answers, submitted_at";

/// Provides insert and read operations for responses.
pub struct ResponseRepo;

impl ResponseRepo {
    /// Persist an accepted response. Returns `false` when the owning form
    /// no longer exists.
    ///
    /// The insert runs in a transaction that first takes a `FOR SHARE` lock
    /// on the form row. A submission racing a form deletion therefore
    /// either commits before the delete (and is removed by the cascade) or
    /// observes the form gone and is rejected — a response can never
    /// outlive its form.
    pub async fn create(pool: &PgPool, response: &FormResponse) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let form_exists: Option<String> =
            sqlx::query_scalar("SELECT id FROM forms WHERE id = $1 FOR SHARE")
                .bind(&response.form_id)
                .fetch_optional(&mut *tx)
                .await?;
        if form_exists.is_none() {
            tracing::debug!(form_id = %response.form_id, "Submission against missing form rejected");
            tx.rollback().await?;
            return Ok(false);
        }

        sqlx::query(
            "INSERT INTO responses (id, form_id, answers, submitted_at) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(&response.id)
        .bind(&response.form_id)
        .bind(Json(&response.answers))
        .bind(response.submitted_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(true)
    }

    /// List all responses for a form, oldest first.
    pub async fn list_for_form(
        pool: &PgPool,
        form_id: &str,
    ) -> Result<Vec<FormResponse>, sqlx::Error> {
        let query = format!(
            "SELECT {RESPONSE_COLUMNS} FROM responses WHERE form_id = $1 ORDER BY submitted_at ASC"
        );
        let rows = sqlx::query_as::<_, ResponseRow>(&query)
            .bind(form_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(FormResponse::from).collect())
    }

    /// Number of responses collected for a form.
    pub async fn count_for_form(pool: &PgPool, form_id: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM responses WHERE form_id = $1")
            .bind(form_id)
            .fetch_one(pool)
            .await
    }
}
