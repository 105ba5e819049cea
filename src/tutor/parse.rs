//! Tolerant interpretation of model replies.
//!
//! Models are asked for plain text or strict JSON but routinely wrap answers
//! in markdown or emit slightly broken JSON. Everything here degrades
//! gracefully instead of failing.

use super::Verdict;
use serde::Deserialize;

/// Strips common markdown markup and collapses whitespace.
pub fn clean_markdown(text: &str) -> String {
    let without_headers: Vec<&str> = text.lines().map(strip_header).collect();
    let mut cleaned = without_headers.join("\n").replace("```", "");
    for delim in ["**", "__", "`", "*", "_"] {
        cleaned = strip_paired(&cleaned, delim);
    }
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn strip_header(line: &str) -> &str {
    let trimmed = line.trim_start();
    let rest = trimmed.trim_start_matches('#');
    if rest.len() < trimmed.len() && rest.starts_with(char::is_whitespace) {
        rest.trim_start()
    } else {
        line
    }
}

/// Replaces `delim content delim` with `content` for non-empty, single-line
/// content. Unpaired delimiters are left alone.
fn strip_paired(text: &str, delim: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find(delim) {
        out.push_str(&rest[..start]);
        let after = &rest[start + delim.len()..];
        let closing = after
            .find(delim)
            .filter(|&end| end > 0 && !after[..end].contains('\n'));
        match closing {
            Some(end) => {
                out.push_str(&after[..end]);
                rest = &after[end + delim.len()..];
            }
            None => {
                out.push_str(delim);
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Locates the JSON object in a reply.
///
/// Prefers a fenced code block, otherwise takes everything from the first `{`
/// to the last `}`. Control characters are removed from the result.
pub fn extract_json_object(reply: &str) -> Option<String> {
    let candidate = fenced_block(reply)
        .filter(|block| block.starts_with('{'))
        .or_else(|| {
            let start = reply.find('{')?;
            let end = reply.rfind('}')?;
            (end > start).then(|| &reply[start..=end])
        })?;
    Some(candidate.chars().filter(|c| !c.is_control()).collect())
}

fn fenced_block(reply: &str) -> Option<&str> {
    let open = reply.find("```")?;
    let body = &reply[open + 3..];
    let body = body.strip_prefix("json").unwrap_or(body);
    let close = body.find("```")?;
    Some(body[..close].trim())
}

#[derive(Deserialize)]
struct RawVerdict {
    #[serde(default, rename = "isCorrect")]
    is_correct: bool,
    #[serde(default)]
    feedback: Option<String>,
    #[serde(default, rename = "correctAnswer")]
    correct_answer: Option<String>,
}

/// Turns a grading reply into a [`Verdict`].
///
/// Tries strict JSON first, then pulls the fields out by hand, and finally
/// falls back to looking for the word "correct" in free text.
pub fn parse_verdict(reply: &str) -> Verdict {
    if let Some(json) = extract_json_object(reply) {
        match serde_json::from_str::<RawVerdict>(&json) {
            Ok(raw) => {
                return Verdict {
                    is_correct: raw.is_correct,
                    feedback: clean_markdown(raw.feedback.as_deref().unwrap_or(reply)),
                    correct_answer: non_empty(raw.correct_answer.as_deref()),
                };
            }
            Err(e) => {
                log::warn!("Verdict JSON did not parse ({}); extracting fields by hand", e);
                return Verdict {
                    is_correct: json_bool_is_true(&json, "isCorrect"),
                    feedback: clean_markdown(
                        string_field(&json, "feedback").as_deref().unwrap_or(reply),
                    ),
                    correct_answer: non_empty(string_field(&json, "correctAnswer").as_deref()),
                };
            }
        }
    }

    log::warn!("Verdict reply had no JSON object; judging by keywords");
    let lower = reply.to_lowercase();
    Verdict {
        is_correct: lower.contains("correct") && !lower.contains("incorrect"),
        feedback: clean_markdown(reply),
        correct_answer: None,
    }
}

fn non_empty(text: Option<&str>) -> Option<String> {
    text.map(clean_markdown).filter(|s| !s.is_empty())
}

/// Position just past `"name"` followed by optional whitespace and a colon.
fn field_value_start(json: &str, name: &str) -> Option<usize> {
    let key = format!("\"{name}\"");
    let mut from = 0;
    while let Some(found) = json[from..].find(&key) {
        let after_key = from + found + key.len();
        let rest = &json[after_key..];
        let trimmed = rest.trim_start();
        if let Some(value) = trimmed.strip_prefix(':') {
            let value_offset = json.len() - value.trim_start().len();
            return Some(value_offset);
        }
        from = after_key;
    }
    None
}

fn json_bool_is_true(json: &str, name: &str) -> bool {
    field_value_start(json, name).is_some_and(|start| json[start..].starts_with("true"))
}

/// Reads a string value, unescaping `\n`, `\"` and `\\`.
fn string_field(json: &str, name: &str) -> Option<String> {
    let start = field_value_start(json, name)?;
    let mut chars = json[start..].strip_prefix('"')?.chars();
    let mut value = String::new();
    while let Some(c) = chars.next() {
        match c {
            '"' => return Some(value),
            '\\' => match chars.next()? {
                'n' => value.push('\n'),
                't' => value.push('\t'),
                other => value.push(other),
            },
            other => value.push(other),
        }
    }
    None
}
