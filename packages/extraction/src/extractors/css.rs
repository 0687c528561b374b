//! CSS selector extraction over an HTML parse.

use scraper::{Html, Selector};
use serde_json::Value;

use crate::error::{ExtractError, ExtractResult};

/// Outer HTML of the first element matching a CSS selector.
pub fn first_match(html: &str, selector_str: &str) -> ExtractResult<Option<Value>> {
    let document = Html::parse_document(html);
    let selector =
        Selector::parse(selector_str).map_err(|e| ExtractError::Evaluation(e.to_string()))?;

    Ok(document
        .select(&selector)
        .next()
        .map(|el| Value::String(el.html())))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HTML: &str = r#"<html><body><div class="price">$19.99</div><div class="price">$29.99</div></body></html>"#;

    #[test]
    fn test_first_match_returns_outer_html() {
        let value = first_match(HTML, ".price").unwrap();
        assert_eq!(
            value,
            Some(Value::String("<div class=\"price\">$19.99</div>".to_string()))
        );
    }

    #[test]
    fn test_no_match_is_none() {
        assert_eq!(first_match(HTML, "span.missing").unwrap(), None);
    }

    #[test]
    fn test_invalid_selector_is_an_evaluation_error() {
        let err = first_match(HTML, "div[[").unwrap_err();
        assert_eq!(err.code(), 2);
    }
}
