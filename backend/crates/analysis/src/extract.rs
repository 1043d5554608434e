//! Locating a JSON object inside free-form model output.
//!
//! Models wrap their JSON in prose or Markdown fences, and sometimes emit
//! brace-delimited fragments that are not JSON. Spans are found by balancing
//! braces outside string literals, so a trailing second object or a stray
//! `}` in the prose never widens the match.

use serde_json::{Map, Value};

/// First top-level balanced `{...}` span in `text` that decodes to a JSON
/// object. A balanced span that fails to decode is skipped whole and an unclosed
/// `{` ends the search, so an object nested inside a malformed one is never
/// returned.
pub fn find_json_object(text: &str) -> Option<Map<String, Value>> {
    let mut from = 0;
    while let Some(offset) = text[from..].find('{') {
        let start = from + offset;
        match balanced_len(&text[start..]) {
            Some(len) => {
                if let Ok(Value::Object(map)) = serde_json::from_str(&text[start..start + len]) {
                    return Some(map);
                }
                // Never descend into a malformed object's members.
                from = start + len;
            }
            // Everything after an unclosed `{` lies inside it.
            None => return None,
        }
    }
    None
}

/// Byte length of the balanced span opening at the start of `s`, or `None`
/// when the text ends first.
fn balanced_len(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (idx, c) in s.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(idx + 1);
                }
            }
            _ => {}
        }
    }
    None
}
