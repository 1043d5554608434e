//! Result schemas returned to callers and persisted as `full_response`.
//!
//! Every field is mandatory except `WriteupResult::error_analysis`. Scores are
//! `u8` and only ever built through [`clamp_score`], so they stay in `0..=100`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Clamp a model-supplied number into `0..=100`, dropping any fraction.
pub fn clamp_score(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, 100.0) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    Low,
    Medium,
    High,
    Unknown,
}

impl Confidence {
    /// Case-insensitive match on the four level names.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Confidence::Low),
            "medium" => Some(Confidence::Medium),
            "high" => Some(Confidence::High),
            "unknown" => Some(Confidence::Unknown),
            _ => None,
        }
    }
}

// ── Write-up review ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteupScores {
    pub grammar: u8,
    pub clarity: u8,
    pub structure: u8,
}

impl WriteupScores {
    /// Used when the model gave no usable value for a sub-score.
    pub const PLACEHOLDER: WriteupScores = WriteupScores {
        grammar: 85,
        clarity: 80,
        structure: 75,
    };
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorAnalysis {
    pub grammar_errors: Vec<String>,
    pub spelling_errors: Vec<String>,
    pub article_issues: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WriteupResult {
    pub scores: WriteupScores,
    pub overall_feedback: String,
    pub justifications: BTreeMap<String, String>,
    /// Passed through as the model produced it.
    pub per_paragraph_feedback: Vec<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_analysis: Option<ErrorAnalysis>,
}

// ── Plagiarism screening ────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    pub uri: String,
    pub similarity: String,
    pub matched_phrases: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSource {
    pub title: String,
    pub uri: String,
    pub similarity: String,
    pub matched_patterns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indicator {
    pub pattern: String,
    pub description: String,
    pub severity: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlagiarismResult {
    pub plagiarism_score: u8,
    pub confidence: Confidence,
    pub summary: String,
    pub sources: Vec<Source>,
    pub matched_phrases: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodePlagiarismResult {
    pub plagiarism_score: u8,
    pub confidence: Confidence,
    pub summary: String,
    pub sources: Vec<CodeSource>,
    pub matched_phrases: Vec<String>,
    pub indicators: Vec<Indicator>,
    pub recommendations: Vec<String>,
}

/// Compact score record stored in `review_results.scores`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlagiarismScores {
    pub plagiarism_score: u8,
    pub confidence: Confidence,
    pub source_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indicator_count: Option<usize>,
}

impl PlagiarismResult {
    pub fn score_summary(&self) -> PlagiarismScores {
        PlagiarismScores {
            plagiarism_score: self.plagiarism_score,
            confidence: self.confidence,
            source_count: self.sources.len(),
            indicator_count: None,
        }
    }
}

impl CodePlagiarismResult {
    pub fn score_summary(&self) -> PlagiarismScores {
        PlagiarismScores {
            plagiarism_score: self.plagiarism_score,
            confidence: self.confidence,
            source_count: self.sources.len(),
            indicator_count: Some(self.indicators.len()),
        }
    }
}

// ── Kinds ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    Writeup,
    Plagiarism,
    CodePlagiarism,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisResult {
    Writeup(WriteupResult),
    Plagiarism(PlagiarismResult),
    CodePlagiarism(CodePlagiarismResult),
}

/// What a stored review keeps in its `scores` column.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScoreSummary {
    Writeup(WriteupScores),
    Plagiarism(PlagiarismScores),
}

impl AnalysisResult {
    pub fn kind(&self) -> ResultKind {
        match self {
            AnalysisResult::Writeup(_) => ResultKind::Writeup,
            AnalysisResult::Plagiarism(_) => ResultKind::Plagiarism,
            AnalysisResult::CodePlagiarism(_) => ResultKind::CodePlagiarism,
        }
    }

    /// Headline text stored alongside the scores.
    pub fn feedback(&self) -> &str {
        match self {
            AnalysisResult::Writeup(r) => &r.overall_feedback,
            AnalysisResult::Plagiarism(r) => &r.summary,
            AnalysisResult::CodePlagiarism(r) => &r.summary,
        }
    }

    pub fn score_summary(&self) -> ScoreSummary {
        match self {
            AnalysisResult::Writeup(r) => ScoreSummary::Writeup(r.scores),
            AnalysisResult::Plagiarism(r) => ScoreSummary::Plagiarism(r.score_summary()),
            AnalysisResult::CodePlagiarism(r) => ScoreSummary::Plagiarism(r.score_summary()),
        }
    }
}
