use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewType {
    Writeup,
    Code,
    Plagiarism,
    CodePlagiarism,
}

impl ReviewType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewType::Writeup => "writeup",
            ReviewType::Code => "code",
            ReviewType::Plagiarism => "plagiarism",
            ReviewType::CodePlagiarism => "code_plagiarism",
        }
    }
}

impl fmt::Display for ReviewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReviewType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "writeup" => Ok(ReviewType::Writeup),
            "code" => Ok(ReviewType::Code),
            "plagiarism" => Ok(ReviewType::Plagiarism),
            "code_plagiarism" => Ok(ReviewType::CodePlagiarism),
            other => Err(format!("unknown review type: {other}")),
        }
    }
}

/// A stored review. `scores` and `full_response` hold serialized JSON text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub id: i64,
    pub filename: String,
    pub review_type: ReviewType,
    pub scores: String,
    pub feedback: String,
    pub full_response: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload; the store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
    pub filename: String,
    pub review_type: ReviewType,
    pub scores: String,
    pub feedback: String,
    pub full_response: String,
}
