//! One prompt per task. Write-up input is cut to its first 2000 characters and
//! plagiarism input to 1500; code is always embedded whole.

pub const WRITEUP_PROMPT_CHARS: usize = 2000;
pub const PLAGIARISM_PROMPT_CHARS: usize = 1500;

/// Longest prefix of `text` holding at most `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

pub fn writeup_prompt(text: &str) -> String {
    let text = truncate_chars(text, WRITEUP_PROMPT_CHARS);
    format!(
        r#"Review the following write-up. Score grammar, clarity and structure from 0 to 100,
explain each score, and give two or three paragraphs of overall feedback.

TEXT:
{text}

Reply with ONLY a JSON object of exactly this shape:
{{
  "scores": {{"grammar": 85, "clarity": 80, "structure": 75}},
  "overall_feedback": "Overall feedback...",
  "justifications": {{
    "grammar_justification": "Why the grammar score...",
    "clarity_justification": "Why the clarity score...",
    "structure_justification": "Why the structure score...",
    "improvement_suggestions": "Concrete suggestions..."
  }},
  "per_paragraph_feedback": [],
  "error_analysis": {{
    "grammar_errors": [],
    "spelling_errors": [],
    "article_issues": []
  }}
}}

Do not add any text before or after the JSON."#
    )
}

pub fn code_review_prompt(code: &str, language: &str) -> String {
    format!(
        r#"You are a senior software engineer reviewing a {language} snippet.

Cover, in order:
1. Correctness: bugs and logic errors.
2. Best practices: idiomatic {language} and common patterns.
3. Readability: style, naming and comments.
4. Suggestions: specific, actionable improvements.

Answer in Markdown.

CODE:
---
{code}
---"#
    )
}

pub fn plagiarism_prompt(text: &str) -> String {
    let text = truncate_chars(text, PLAGIARISM_PROMPT_CHARS);
    format!(
        r#"Estimate how likely the following text is to be plagiarized and give a realistic score from 0 to 100.

TEXT:
{text}

Reply with ONLY a JSON object of exactly this shape:
{{
  "plagiarism_score": 50,
  "confidence": "Medium",
  "summary": "Short explanation of the score",
  "sources": [
    {{
      "title": "Source name",
      "uri": "https://example.com",
      "similarity": "75%",
      "matched_phrases": ["phrase one", "phrase two"]
    }}
  ],
  "matched_phrases": ["suspicious phrase one", "suspicious phrase two"],
  "recommendations": ["Check source one", "Verify originality"]
}}

"confidence" must be one of "Low", "Medium" or "High"."#
    )
}

pub fn code_plagiarism_prompt(code: &str, language: &str) -> String {
    format!(
        r#"Estimate how likely the following {language} code is to be copied and give a realistic score from 0 to 100.

CODE:
---
{code}
---

Reply with ONLY a JSON object of exactly this shape:
{{
  "plagiarism_score": 50,
  "confidence": "Medium",
  "summary": "Short explanation of the score",
  "sources": [
    {{
      "title": "Source name",
      "uri": "https://example.com",
      "similarity": "75%",
      "matched_patterns": ["pattern one", "pattern two"]
    }}
  ],
  "indicators": [
    {{
      "pattern": "Common pattern",
      "description": "What the pattern is",
      "severity": "Medium"
    }}
  ],
  "recommendations": ["Check repository one", "Verify originality"]
}}

"confidence" must be one of "Low", "Medium" or "High"."#
    )
}
