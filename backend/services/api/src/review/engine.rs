use serde::{Deserialize, Serialize};

use referee_analysis::{normalize, prompts, AnalysisResult, ResultKind};
use referee_common::error::{RefereeError, RefereeResult};
use referee_db::review::models::{NewReview, ReviewRecord, ReviewType};
use referee_db::review::repositories::ReviewRepository;
use referee_llm::CompletionClient;

const UNKNOWN_LANGUAGE: &str = "Unknown";

/// Free-form Markdown returned by a code review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeFeedback {
    pub feedback: String,
}

/// Runs one review end to end: prompt, completion, normalization, persistence.
///
/// A review either completes with exactly one stored record or fails with
/// nothing stored. Blank input is rejected before the provider is contacted.
pub struct ReviewEngine<R: ReviewRepository, C: CompletionClient> {
    repo: R,
    llm: C,
}

impl<R: ReviewRepository, C: CompletionClient> ReviewEngine<R, C> {
    pub fn new(repo: R, llm: C) -> Self {
        Self { repo, llm }
    }

    /// Always an [`AnalysisResult::Writeup`].
    pub async fn review_writeup(&self, filename: &str, text: &str) -> RefereeResult<AnalysisResult> {
        require_content(text, "text")?;
        let prompt = prompts::writeup_prompt(text);
        self.analyse(filename, ResultKind::Writeup, &prompt, text, None)
            .await
    }

    pub async fn review_code(
        &self,
        filename: &str,
        code: &str,
        language: &str,
    ) -> RefereeResult<CodeFeedback> {
        require_content(code, "code")?;

        let feedback = self
            .llm
            .complete(&prompts::code_review_prompt(code, language))
            .await?;
        let result = CodeFeedback { feedback };

        let no_scores = serde_json::Map::new();
        self.persist(filename, ReviewType::Code, &no_scores, &result.feedback, &result)
            .await?;
        Ok(result)
    }

    /// Always an [`AnalysisResult::Plagiarism`].
    pub async fn check_plagiarism(
        &self,
        filename: &str,
        text: &str,
    ) -> RefereeResult<AnalysisResult> {
        require_content(text, "text")?;
        let prompt = prompts::plagiarism_prompt(text);
        self.analyse(filename, ResultKind::Plagiarism, &prompt, text, None)
            .await
    }

    /// Always an [`AnalysisResult::CodePlagiarism`]. `language` falls back to
    /// `"Unknown"` when absent or blank.
    pub async fn check_code_plagiarism(
        &self,
        filename: &str,
        code: &str,
        language: Option<&str>,
    ) -> RefereeResult<AnalysisResult> {
        require_content(code, "code")?;
        let language = language
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(UNKNOWN_LANGUAGE);

        let prompt = prompts::code_plagiarism_prompt(code, language);
        self.analyse(
            filename,
            ResultKind::CodePlagiarism,
            &prompt,
            code,
            Some(language),
        )
        .await
    }

    /// Every stored review, oldest first.
    pub async fn history(&self) -> RefereeResult<Vec<ReviewRecord>> {
        self.repo.list_all().await
    }

    async fn analyse(
        &self,
        filename: &str,
        kind: ResultKind,
        prompt: &str,
        input: &str,
        language: Option<&str>,
    ) -> RefereeResult<AnalysisResult> {
        let raw = self.llm.complete(prompt).await?;
        let result = normalize(&raw, kind, input, language);

        self.persist(
            filename,
            review_type(kind),
            &result.score_summary(),
            result.feedback(),
            &result,
        )
        .await?;
        Ok(result)
    }

    async fn persist<S: Serialize, F: Serialize>(
        &self,
        filename: &str,
        review_type: ReviewType,
        scores: &S,
        feedback: &str,
        full_response: &F,
    ) -> RefereeResult<ReviewRecord> {
        let review = NewReview {
            filename: filename.to_string(),
            review_type,
            scores: to_json(scores)?,
            feedback: feedback.to_string(),
            full_response: to_json(full_response)?,
        };

        match self.repo.insert(review).await {
            Ok(record) => {
                tracing::info!(id = record.id, %review_type, filename, "review stored");
                Ok(record)
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    %review_type,
                    filename,
                    "failed to store review, discarding result"
                );
                Err(e)
            }
        }
    }
}

fn review_type(kind: ResultKind) -> ReviewType {
    match kind {
        ResultKind::Writeup => ReviewType::Writeup,
        ResultKind::Plagiarism => ReviewType::Plagiarism,
        ResultKind::CodePlagiarism => ReviewType::CodePlagiarism,
    }
}

fn require_content(value: &str, field: &str) -> RefereeResult<()> {
    if value.trim().is_empty() {
        return Err(RefereeError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

fn to_json<T: Serialize>(value: &T) -> RefereeResult<String> {
    serde_json::to_string(value).map_err(|e| RefereeError::Internal(e.to_string()))
}
