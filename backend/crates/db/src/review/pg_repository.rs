use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::review::models::{NewReview, ReviewRecord, ReviewType};
use crate::review::repositories::ReviewRepository;
use referee_common::error::{RefereeError, RefereeResult};

#[derive(Clone)]
pub struct PgReviewRepository {
    pool: PgPool,
}

impl PgReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn map_row(row: sqlx::postgres::PgRow) -> RefereeResult<ReviewRecord> {
        let review_type: String = row.get("review_type");
        let review_type = review_type
            .parse::<ReviewType>()
            .map_err(RefereeError::Database)?;

        Ok(ReviewRecord {
            id: row.get("id"),
            filename: row.get("filename"),
            review_type,
            scores: row.get("scores"),
            feedback: row.get("feedback"),
            full_response: row.get("full_response"),
            created_at: row.get("created_at"),
        })
    }
}

#[async_trait]
impl ReviewRepository for PgReviewRepository {
    async fn insert(&self, review: NewReview) -> RefereeResult<ReviewRecord> {
        let row = sqlx::query(
            "insert into review_results (filename, review_type, scores, feedback, full_response)
             values ($1, $2, $3, $4, $5)
             returning id, filename, review_type, scores, feedback, full_response, created_at",
        )
        .bind(&review.filename)
        .bind(review.review_type.as_str())
        .bind(&review.scores)
        .bind(&review.feedback)
        .bind(&review.full_response)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RefereeError::Database(e.to_string()))?;

        Self::map_row(row)
    }

    async fn list_all(&self) -> RefereeResult<Vec<ReviewRecord>> {
        let rows = sqlx::query(
            "select id, filename, review_type, scores, feedback, full_response, created_at
             from review_results
             order by id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RefereeError::Database(e.to_string()))?;

        rows.into_iter().map(Self::map_row).collect()
    }
}
