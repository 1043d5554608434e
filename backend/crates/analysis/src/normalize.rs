//! Parse-then-repair pass over raw completions.
//!
//! The first balanced JSON object in the completion is taken as the base and
//! every field is repaired on its own: a malformed field falls back to a typed
//! default without touching siblings that parsed. With no object at all, the
//! whole result comes from [`crate::heuristics`].

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::extract::find_json_object;
use crate::heuristics;
use crate::prompts::truncate_chars;
use crate::results::{
    clamp_score, AnalysisResult, CodePlagiarismResult, CodeSource, Confidence, ErrorAnalysis,
    Indicator, PlagiarismResult, ResultKind, Source, WriteupResult, WriteupScores,
};

const UNKNOWN_LANGUAGE: &str = "Unknown";
const WRITEUP_FALLBACK_FEEDBACK_CHARS: usize = 500;
const NO_FEEDBACK: &str = "No feedback generated";

/// Normalize a completion for any of the three structured kinds.
///
/// `original_input` feeds the heuristic fallbacks and `language` is only read
/// for [`ResultKind::CodePlagiarism`].
pub fn normalize(
    raw: &str,
    kind: ResultKind,
    original_input: &str,
    language: Option<&str>,
) -> AnalysisResult {
    match kind {
        ResultKind::Writeup => AnalysisResult::Writeup(normalize_writeup(raw)),
        ResultKind::Plagiarism => {
            AnalysisResult::Plagiarism(normalize_plagiarism(raw, original_input))
        }
        ResultKind::CodePlagiarism => AnalysisResult::CodePlagiarism(normalize_code_plagiarism(
            raw,
            original_input,
            language.unwrap_or(UNKNOWN_LANGUAGE),
        )),
    }
}

// ── Write-up ────────────────────────────────────────────────────

pub fn normalize_writeup(raw: &str) -> WriteupResult {
    tracing::debug!(raw_len = raw.len(), raw = %raw, "normalizing write-up completion");

    let Some(obj) = find_json_object(raw) else {
        tracing::warn!("no JSON object in write-up completion, using placeholder");
        return writeup_placeholder(raw);
    };

    let scores = obj.get("scores").and_then(Value::as_object);
    let sub_score = |key: &str, default: u8| {
        scores
            .and_then(|s| s.get(key))
            .and_then(numeric)
            .map(clamp_score)
            .unwrap_or(default)
    };
    let placeholder = WriteupScores::PLACEHOLDER;

    let mut justifications = string_map(obj.get("justifications"));
    if justifications.is_empty() {
        justifications = canned_map(&[
            ("grammar_justification", "No detailed grammar analysis provided."),
            ("clarity_justification", "No detailed clarity analysis provided."),
            ("structure_justification", "No detailed structure analysis provided."),
            ("improvement_suggestions", "No specific improvement suggestions provided."),
        ]);
    }

    WriteupResult {
        scores: WriteupScores {
            grammar: sub_score("grammar", placeholder.grammar),
            clarity: sub_score("clarity", placeholder.clarity),
            structure: sub_score("structure", placeholder.structure),
        },
        overall_feedback: str_field(&obj, "overall_feedback")
            .unwrap_or_else(|| NO_FEEDBACK.to_string()),
        justifications,
        per_paragraph_feedback: obj
            .get("per_paragraph_feedback")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default(),
        error_analysis: obj
            .get("error_analysis")
            .and_then(Value::as_object)
            .map(|ea| ErrorAnalysis {
                grammar_errors: string_list(ea.get("grammar_errors")).unwrap_or_default(),
                spelling_errors: string_list(ea.get("spelling_errors")).unwrap_or_default(),
                article_issues: string_list(ea.get("article_issues")).unwrap_or_default(),
            }),
    }
}

fn writeup_placeholder(raw: &str) -> WriteupResult {
    let feedback = truncate_chars(raw, WRITEUP_FALLBACK_FEEDBACK_CHARS);
    WriteupResult {
        scores: WriteupScores::PLACEHOLDER,
        overall_feedback: if feedback.trim().is_empty() {
            NO_FEEDBACK.to_string()
        } else {
            feedback.to_string()
        },
        justifications: canned_map(&[
            ("grammar_justification", "Grammar analysis not available."),
            ("clarity_justification", "Clarity analysis not available."),
            ("structure_justification", "Structure analysis not available."),
            ("improvement_suggestions", "Suggestions not available."),
        ]),
        per_paragraph_feedback: Vec::new(),
        error_analysis: None,
    }
}

// ── Text plagiarism ─────────────────────────────────────────────

pub fn normalize_plagiarism(raw: &str, text: &str) -> PlagiarismResult {
    tracing::debug!(raw_len = raw.len(), raw = %raw, "normalizing plagiarism completion");

    let Some(obj) = find_json_object(raw) else {
        tracing::warn!("no JSON object in plagiarism completion, using heuristic fallback");
        return heuristics::text_fallback(text);
    };

    let sources = match obj.get("sources").and_then(Value::as_array) {
        Some(items) => items
            .iter()
            .filter_map(Value::as_object)
            .map(|s| Source {
                title: str_field(s, "title").unwrap_or_else(|| "Unknown Source".to_string()),
                uri: str_field(s, "uri").unwrap_or_else(|| "https://example.com".to_string()),
                similarity: text_like(s.get("similarity"))
                    .unwrap_or_else(|| "Unknown".to_string()),
                matched_phrases: string_list(s.get("matched_phrases")).unwrap_or_default(),
            })
            .collect(),
        None => heuristics::text_sources(text),
    };

    PlagiarismResult {
        plagiarism_score: score_field(&obj).unwrap_or_else(|| heuristics::text_score(text)),
        confidence: confidence_field(&obj),
        summary: str_field(&obj, "summary").unwrap_or_else(|| {
            format!("Analysis of text with {} characters.", text.chars().count())
        }),
        sources,
        matched_phrases: string_list(obj.get("matched_phrases")).unwrap_or_default(),
        recommendations: string_list(obj.get("recommendations")).unwrap_or_else(|| {
            vec![
                "Verify with online sources".to_string(),
                "Check academic databases".to_string(),
            ]
        }),
    }
}

// ── Code plagiarism ─────────────────────────────────────────────

pub fn normalize_code_plagiarism(raw: &str, code: &str, language: &str) -> CodePlagiarismResult {
    tracing::debug!(
        raw_len = raw.len(),
        raw = %raw,
        language,
        "normalizing code plagiarism completion"
    );

    let Some(obj) = find_json_object(raw) else {
        tracing::warn!(language, "no JSON object in code plagiarism completion, using heuristic fallback");
        return heuristics::code_fallback(code, language);
    };

    let sources = match obj.get("sources").and_then(Value::as_array) {
        Some(items) => items
            .iter()
            .filter_map(Value::as_object)
            .map(|s| CodeSource {
                title: str_field(s, "title").unwrap_or_else(|| format!("{language} Code Example")),
                uri: str_field(s, "uri")
                    .unwrap_or_else(|| "https://github.com/example".to_string()),
                similarity: text_like(s.get("similarity"))
                    .unwrap_or_else(|| "Unknown".to_string()),
                matched_patterns: string_list(s.get("matched_patterns")).unwrap_or_default(),
            })
            .collect(),
        None => heuristics::code_sources(language),
    };

    let indicators = obj
        .get("indicators")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_object)
                .map(|i| Indicator {
                    pattern: str_field(i, "pattern")
                        .unwrap_or_else(|| "Unknown Pattern".to_string()),
                    description: str_field(i, "description")
                        .unwrap_or_else(|| "No description".to_string()),
                    severity: str_field(i, "severity").unwrap_or_else(|| "Medium".to_string()),
                })
                .collect()
        })
        .unwrap_or_default();

    CodePlagiarismResult {
        plagiarism_score: score_field(&obj)
            .unwrap_or_else(|| heuristics::code_score(code, language)),
        confidence: confidence_field(&obj),
        summary: str_field(&obj, "summary").unwrap_or_else(|| {
            format!(
                "Analysis of {language} code with {} characters.",
                code.chars().count()
            )
        }),
        sources,
        matched_phrases: string_list(obj.get("matched_phrases")).unwrap_or_default(),
        indicators,
        recommendations: string_list(obj.get("recommendations")).unwrap_or_else(|| {
            vec![
                "Compare with online examples".to_string(),
                "Review code originality".to_string(),
            ]
        }),
    }
}

// ── Field helpers ───────────────────────────────────────────────

fn str_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Strings as-is, numbers stringified.
fn text_like(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// `None` unless the value is an array. Non-string elements that are not
/// numbers are dropped.
fn string_list(value: Option<&Value>) -> Option<Vec<String>> {
    let items = value?.as_array()?;
    Some(items.iter().filter_map(|v| text_like(Some(v))).collect())
}

fn string_map(value: Option<&Value>) -> BTreeMap<String, String> {
    value
        .and_then(Value::as_object)
        .map(|m| {
            m.iter()
                .filter_map(|(k, v)| text_like(Some(v)).map(|v| (k.clone(), v)))
                .collect()
        })
        .unwrap_or_default()
}

fn canned_map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

/// Numbers, or strings such as `"72"` and `"72%"`.
fn numeric(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|v| v.is_finite())
}

fn score_field(obj: &Map<String, Value>) -> Option<u8> {
    obj.get("plagiarism_score").and_then(numeric).map(clamp_score)
}

/// Missing or non-string values read as `Medium`, as do unrecognised levels.
fn confidence_field(obj: &Map<String, Value>) -> Confidence {
    obj.get("confidence")
        .and_then(Value::as_str)
        .and_then(Confidence::parse)
        .unwrap_or(Confidence::Medium)
}
