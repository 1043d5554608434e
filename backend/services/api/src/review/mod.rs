pub mod engine;
pub mod handlers;
pub mod requests;
pub mod responses;

use axum::routing::{get, post};
use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/review/writeup", post(handlers::post_writeup_review))
        .route("/review/code", post(handlers::post_code_review))
        .route("/review/plagiarism", post(handlers::post_plagiarism_check))
        .route(
            "/review/code_plagiarism",
            post(handlers::post_code_plagiarism_check),
        )
        .route("/history", get(handlers::list_history))
}
