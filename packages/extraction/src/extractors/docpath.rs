//! Slash-delimited path resolution over nested values.
//!
//! Paths address JSON-like structures the way a filesystem path
//! addresses directories: `/note/subject` walks two map keys, `/items/0`
//! indexes into a sequence, and segments may glob (`*`, `?`) over keys
//! and indices. Exactly one leaf must remain after the walk.

use serde_json::Value;

use crate::error::{ExtractError, ExtractResult};
use crate::types::PathType;

use super::xml::xml_to_value;

/// Parse the body as JSON and resolve a slash path against it.
pub fn from_json(body: &str, path: &str) -> ExtractResult<Option<Value>> {
    let root: Value =
        serde_json::from_str(body).map_err(|e| ExtractError::Evaluation(e.to_string()))?;
    resolve_path(&root, path, PathType::Json)
}

/// Parse the body as XML into its nested-map form and resolve a slash
/// path against it, using the same grammar as JSON paths.
pub fn from_xml(body: &str, path: &str) -> ExtractResult<Option<Value>> {
    let root = xml_to_value(body)?;
    resolve_path(&root, path, PathType::Xml)
}

/// Walk a slash path through a value. Empty segments are ignored, so a
/// leading slash is optional. Sequence elements are addressed by their
/// decimal index, and globs match against that index text.
pub fn resolve_path(root: &Value, path: &str, path_type: PathType) -> ExtractResult<Option<Value>> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        return Err(ExtractError::PathNotFound { path_type });
    }

    let mut current: Vec<&Value> = vec![root];
    for segment in &segments {
        let mut next: Vec<&Value> = Vec::new();
        for value in current {
            match value {
                Value::Object(map) => {
                    for (key, child) in map {
                        if glob_match(segment, key) {
                            next.push(child);
                        }
                    }
                }
                Value::Array(items) => {
                    for (index, child) in items.iter().enumerate() {
                        if glob_match(segment, &index.to_string()) {
                            next.push(child);
                        }
                    }
                }
                _ => {}
            }
        }
        if next.is_empty() {
            return Err(ExtractError::PathNotFound { path_type });
        }
        current = next;
    }

    if current.len() > 1 {
        return Err(ExtractError::Evaluation(format!(
            "path matched {} values where exactly one was expected",
            current.len()
        )));
    }
    Ok(Some(current[0].clone()))
}

/// fnmatch-style comparison restricted to `*` (any run) and `?` (any
/// one character). Other characters, including `[`, match literally.
fn glob_match(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();

    let (mut p, mut t) = (0usize, 0usize);
    let mut star: Option<usize> = None;
    let mut mark = 0usize;

    while t < text.len() {
        if p < pattern.len() && (pattern[p] == '?' || pattern[p] == text[t]) {
            p += 1;
            t += 1;
        } else if p < pattern.len() && pattern[p] == '*' {
            star = Some(p);
            mark = t;
            p += 1;
        } else if let Some(s) = star {
            p = s + 1;
            mark += 1;
            t = mark;
        } else {
            return false;
        }
    }
    while p < pattern.len() && pattern[p] == '*' {
        p += 1;
    }
    p == pattern.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn note() -> Value {
        json!({
            "note": {
                "to": "Guest",
                "subject": "hello",
                "tags": ["a", "b", "c"],
            }
        })
    }

    #[test]
    fn test_plain_key_walk() {
        let value = resolve_path(&note(), "/note/subject", PathType::Json).unwrap();
        assert_eq!(value, Some(json!("hello")));
    }

    #[test]
    fn test_leading_slash_is_optional() {
        let with = resolve_path(&note(), "/note/to", PathType::Json).unwrap();
        let without = resolve_path(&note(), "note/to", PathType::Json).unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn test_sequence_index() {
        let value = resolve_path(&note(), "/note/tags/1", PathType::Json).unwrap();
        assert_eq!(value, Some(json!("b")));
    }

    #[test]
    fn test_glob_matching_one_leaf() {
        let value = resolve_path(&note(), "/note/subj*", PathType::Json).unwrap();
        assert_eq!(value, Some(json!("hello")));
    }

    #[test]
    fn test_glob_matching_many_leaves_is_an_error() {
        let err = resolve_path(&note(), "/note/tags/*", PathType::Json).unwrap_err();
        assert_eq!(err.code(), 2);
        assert!(err.to_string().contains("3 values"));
    }

    #[test]
    fn test_missing_key_is_path_not_found() {
        let err = resolve_path(&note(), "/note/missing", PathType::Json).unwrap_err();
        assert_eq!(err.code(), 1);
        assert!(err.to_string().contains("'JSON'"));
    }

    #[test]
    fn test_walking_through_a_scalar_is_path_not_found() {
        let err = resolve_path(&note(), "/note/subject/deeper", PathType::Json).unwrap_err();
        assert_eq!(err.code(), 1);
    }

    #[test]
    fn test_empty_path_is_path_not_found() {
        for path in ["", "/", "//"] {
            let err = resolve_path(&note(), path, PathType::Json).unwrap_err();
            assert_eq!(err.code(), 1, "path: {path:?}");
        }
    }

    #[test]
    fn test_question_mark_glob() {
        assert!(glob_match("t?", "to"));
        assert!(!glob_match("t?", "tags"));
        assert!(glob_match("*s", "tags"));
    }

    #[test]
    fn test_from_json_rejects_invalid_documents() {
        let err = from_json("{not json", "/a").unwrap_err();
        assert_eq!(err.code(), 2);
    }
}
