//! The response normalizer: deterministic string and JSON transforms that
//! recover a structured plan from the free text an unreliable generator
//! returns.
//!
//! This layer tolerates wrapped code fences, explanatory prose around the
//! JSON object, stray control bytes, and trailing commas. It performs no
//! semantic repair; a payload that parses but references nonsense is the
//! engine's (or the healing path's) problem.

use crate::error::NormalizeError;
use crate::plan::GeneratedPlan;
use once_cell::sync::Lazy;
use regex::Regex;

static FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)```(?:json)?").unwrap());
static TRAILING_COMMA: Lazy<Regex> = Lazy::new(|| Regex::new(r",(\s*[}\]])").unwrap());

const EXCERPT_LEN: usize = 120;

/// Extracts the candidate JSON object from raw generator text.
///
/// Strips Markdown fences, slices from the first `{` to the last `}`, and
/// removes ASCII control characters other than newline, carriage return,
/// and tab.
pub fn extract_json(raw: &str) -> Result<String, NormalizeError> {
    let stripped = FENCE.replace_all(raw, "");

    let start = stripped.find('{').ok_or(NormalizeError::NoJsonObjectFound)?;
    let end = stripped.rfind('}').ok_or(NormalizeError::NoJsonObjectFound)?;
    if end < start {
        return Err(NormalizeError::NoJsonObjectFound);
    }

    Ok(stripped[start..=end]
        .chars()
        .filter(|c| !c.is_ascii_control() || matches!(c, '\n' | '\r' | '\t'))
        .collect())
}

/// Parses extracted text into a JSON value, applying one trailing-comma
/// repair pass before giving up.
pub fn parse_json(raw: &str) -> Result<serde_json::Value, NormalizeError> {
    let candidate = extract_json(raw)?;

    match serde_json::from_str(&candidate) {
        Ok(value) => Ok(value),
        Err(_) => {
            let repaired = TRAILING_COMMA.replace_all(&candidate, "$1");
            serde_json::from_str(&repaired).map_err(|e| NormalizeError::MalformedJson {
                message: e.to_string(),
                excerpt: excerpt(&repaired),
            })
        }
    }
}

/// Normalizes raw generator text into an untrusted [`GeneratedPlan`].
pub fn normalize(raw: &str) -> Result<GeneratedPlan, NormalizeError> {
    let value = parse_json(raw)?;
    serde_json::from_value(value).map_err(|e| NormalizeError::MalformedJson {
        message: e.to_string(),
        excerpt: excerpt(raw),
    })
}

fn excerpt(text: &str) -> String {
    text.chars().take(EXCERPT_LEN).collect()
}
