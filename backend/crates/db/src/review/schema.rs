use referee_common::error::{RefereeError, RefereeResult};
use sqlx::PgPool;

pub const CREATE_REVIEW_RESULTS: &str = "create table if not exists review_results (
  id bigserial primary key,
  filename text not null,
  review_type text not null,
  scores text not null,
  feedback text not null,
  full_response text not null,
  created_at timestamptz not null default now()
)";

pub const DROP_REVIEW_RESULTS: &str = "drop table if exists review_results";

/// Create the `review_results` table when it does not exist yet.
pub async fn ensure_schema(pool: &PgPool) -> RefereeResult<()> {
    sqlx::query(CREATE_REVIEW_RESULTS)
        .execute(pool)
        .await
        .map_err(|e| RefereeError::Database(e.to_string()))?;
    Ok(())
}

/// Drop and recreate the table. Every stored review is lost.
pub async fn reset_schema(pool: &PgPool) -> RefereeResult<()> {
    tracing::warn!("dropping review_results");
    sqlx::query(DROP_REVIEW_RESULTS)
        .execute(pool)
        .await
        .map_err(|e| RefereeError::Database(e.to_string()))?;
    ensure_schema(pool).await
}
