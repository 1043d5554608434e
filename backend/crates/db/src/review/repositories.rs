use async_trait::async_trait;

use crate::review::models::{NewReview, ReviewRecord};
use referee_common::error::RefereeResult;

/// Append-only store of past reviews.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn insert(&self, review: NewReview) -> RefereeResult<ReviewRecord>;
    async fn list_all(&self) -> RefereeResult<Vec<ReviewRecord>>;
}
