//! Path type tags and extraction results.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Selector grammar applied to a fetched document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PathType {
    Xpath,
    Css,
    Regex,
    Json,
    Xml,
}

impl PathType {
    /// Path types whose non-string results are rendered to indented
    /// JSON text, since the extracted value may be a collection rather
    /// than scalar text.
    pub fn reformats_content(self) -> bool {
        matches!(self, PathType::Json | PathType::Xml | PathType::Regex)
    }
}

impl fmt::Display for PathType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PathType::Xpath => "XPATH",
            PathType::Css => "CSS",
            PathType::Regex => "REGEX",
            PathType::Json => "JSON",
            PathType::Xml => "XML",
        };
        f.write_str(name)
    }
}

/// Successful extraction outcome.
///
/// A path that matches nothing is still a success; both fields stay
/// `None`. Failures are a separate value entirely, never shared state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    /// Rendered text form of the extracted value, if anything matched.
    pub path_data: Option<String>,
    /// Value as produced by the selector engine, before rendering.
    pub raw_path_data: Option<Value>,
    /// True when a non-string value was serialized to indented text.
    pub content_reformatted: bool,
}

impl Extraction {
    /// No match, no failure.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Render a selector engine value. Strings are trimmed of
    /// surrounding whitespace; other values keep their raw form and,
    /// for the reformatting path types, serialize to indented JSON.
    pub fn from_value(value: Value, path_type: PathType) -> Self {
        match value {
            Value::Null => Self::empty(),
            Value::String(s) => {
                let trimmed = s.trim().to_string();
                Extraction {
                    path_data: Some(trimmed.clone()),
                    raw_path_data: Some(Value::String(trimmed)),
                    content_reformatted: false,
                }
            }
            other => {
                let content_reformatted = path_type.reformats_content();
                let rendered = if content_reformatted {
                    serde_json::to_string_pretty(&other).unwrap_or_else(|_| other.to_string())
                } else {
                    other.to_string()
                };
                Extraction {
                    path_data: Some(rendered),
                    raw_path_data: Some(other),
                    content_reformatted,
                }
            }
        }
    }
}
