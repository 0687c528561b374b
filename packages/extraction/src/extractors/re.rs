//! Regular expression extraction over the raw document text.

use regex::Regex;
use serde_json::Value;

use crate::error::{ExtractError, ExtractResult};

/// All capture groups across every match, findall-style.
///
/// Patterns without capture groups yield the whole match text instead.
/// Unmatched optional groups appear as empty strings, and nothing is
/// trimmed. The result is always a list, empty when nothing matched.
pub fn capture_groups(text: &str, pattern: &str) -> ExtractResult<Option<Value>> {
    let re = Regex::new(pattern).map_err(|e| ExtractError::Evaluation(e.to_string()))?;

    let mut groups: Vec<Value> = Vec::new();
    for caps in re.captures_iter(text) {
        if re.captures_len() > 1 {
            for group in caps.iter().skip(1) {
                let text = group.map(|m| m.as_str()).unwrap_or("");
                groups.push(Value::String(text.to_string()));
            }
        } else if let Some(whole) = caps.get(0) {
            groups.push(Value::String(whole.as_str().to_string()));
        }
    }

    Ok(Some(Value::Array(groups)))
}
