use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, State};
use axum::Json;
use referee_analysis::AnalysisResult;
use referee_common::error::RefereeError;

use crate::error::ApiError;
use crate::AppState;

use super::engine::CodeFeedback;
use super::requests::{PlagiarismRequest, SubmissionForm};
use super::responses::{HistoryResponse, ReviewResponse};

pub async fn post_writeup_review(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ReviewResponse<AnalysisResult>>, ApiError> {
    let form = SubmissionForm::read(multipart).await?;

    let (filename, text) = match (form.file, form.text) {
        (Some(file), _) => (
            file.filename
                .unwrap_or_else(|| "uploaded_file.txt".to_string()),
            file.content,
        ),
        (None, Some(text)) => ("text_input".to_string(), text),
        (None, None) => {
            return Err(RefereeError::Validation("No text or file provided".to_string()).into())
        }
    };

    tracing::info!(%filename, chars = text.chars().count(), "write-up review requested");
    let result = state.engine.review_writeup(&filename, &text).await?;
    Ok(Json(ReviewResponse::success(result)))
}

pub async fn post_code_review(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ReviewResponse<CodeFeedback>>, ApiError> {
    let form = SubmissionForm::read(multipart).await?;

    let language = form
        .language
        .filter(|l| !l.trim().is_empty())
        .ok_or_else(|| RefereeError::Validation("language is required".to_string()))?;
    let extension = language.trim().to_lowercase();

    let (filename, code) = match (form.file, form.code) {
        (Some(file), _) => (
            file.filename
                .unwrap_or_else(|| format!("uploaded_code.{extension}")),
            file.content,
        ),
        (None, Some(code)) => (format!("code_input.{extension}"), code),
        (None, None) => {
            return Err(RefereeError::Validation("No code or file provided".to_string()).into())
        }
    };

    tracing::info!(%filename, %language, "code review requested");
    let result = state.engine.review_code(&filename, &code, &language).await?;
    Ok(Json(ReviewResponse::success(result)))
}

pub async fn post_plagiarism_check(
    State(state): State<AppState>,
    payload: Result<Json<PlagiarismRequest>, JsonRejection>,
) -> Result<Json<ReviewResponse<AnalysisResult>>, ApiError> {
    let Json(body) = payload?;
    tracing::info!(filename = %body.filename, "plagiarism check requested");
    let result = state
        .engine
        .check_plagiarism(&body.filename, &body.text)
        .await?;
    Ok(Json(ReviewResponse::success(result)))
}

pub async fn post_code_plagiarism_check(
    State(state): State<AppState>,
    payload: Result<Json<PlagiarismRequest>, JsonRejection>,
) -> Result<Json<ReviewResponse<AnalysisResult>>, ApiError> {
    let Json(body) = payload?;
    tracing::info!(
        filename = %body.filename,
        language = body.language.as_deref().unwrap_or("Unknown"),
        "code plagiarism check requested"
    );
    let result = state
        .engine
        .check_code_plagiarism(&body.filename, &body.text, body.language.as_deref())
        .await?;
    Ok(Json(ReviewResponse::success(result)))
}

pub async fn list_history(
    State(state): State<AppState>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let data = state.engine.history().await?;
    let count = data.len();
    Ok(Json(HistoryResponse { data, count }))
}
