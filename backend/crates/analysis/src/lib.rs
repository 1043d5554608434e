pub mod extract;
pub mod heuristics;
pub mod normalize;
pub mod prompts;
pub mod results;

pub use normalize::{normalize, normalize_code_plagiarism, normalize_plagiarism, normalize_writeup};
pub use results::{
    AnalysisResult, CodePlagiarismResult, Confidence, PlagiarismResult, ResultKind, ScoreSummary,
    WriteupResult,
};
