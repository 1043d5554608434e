use referee_db::review::models::ReviewRecord;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ReviewResponse<T> {
    pub status: &'static str,
    pub feedback: T,
}

impl<T> ReviewResponse<T> {
    pub fn success(feedback: T) -> Self {
        Self {
            status: "success",
            feedback,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub data: Vec<ReviewRecord>,
    pub count: usize,
}
