//! XPath extraction over a lenient HTML parse.

use serde_json::Value;
use skyscraper::html;
use skyscraper::xpath::grammar::data_model::XpathItem;
use skyscraper::xpath::grammar::XpathItemTreeNode;
use skyscraper::xpath::{self, XpathItemTree};

use crate::error::{ExtractError, ExtractResult};

/// First item matched by an XPath expression.
///
/// Text and attribute matches yield their string value; element matches
/// yield their text content.
pub fn first_match(body: &str, path: &str) -> ExtractResult<Option<Value>> {
    let tree = html::parse(body).map_err(|e| ExtractError::Evaluation(e.to_string()))?;

    let expr = xpath::parse(path).map_err(|e| ExtractError::Evaluation(e.to_string()))?;
    let items = expr
        .apply(&tree)
        .map_err(|e| ExtractError::Evaluation(e.to_string()))?;

    let text = items.iter().next().and_then(|item| item_text(item, &tree));
    Ok(text.map(Value::String))
}

fn item_text(item: &XpathItem<'_>, tree: &XpathItemTree) -> Option<String> {
    match item {
        XpathItem::Node(node) => match node {
            XpathItemTreeNode::AttributeNode(attr) => Some(attr.value.clone()),
            other => other.text(tree),
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HTML: &str = "<html><head><title>Example</title></head><body><div class=\"note\"><span><strong>Subject:</strong> hello there</span><p id=\"p1\">Body text</p></div></body></html>";

    #[test]
    fn test_text_node_match() {
        let value = first_match(HTML, "/html/body/div/span/text()").unwrap();
        let text = value.and_then(|v| v.as_str().map(str::to_string)).unwrap();
        assert_eq!(text.trim(), "hello there");
    }

    #[test]
    fn test_element_match_yields_text_content() {
        let value = first_match(HTML, "//p").unwrap();
        assert_eq!(value, Some(Value::String("Body text".to_string())));
    }

    #[test]
    fn test_attribute_match() {
        let value = first_match(HTML, "//p/@id").unwrap();
        assert_eq!(value, Some(Value::String("p1".to_string())));
    }

    #[test]
    fn test_no_match_is_none() {
        assert_eq!(first_match(HTML, "/html/body/article").unwrap(), None);
    }

    #[test]
    fn test_invalid_expression_is_an_evaluation_error() {
        let err = first_match(HTML, "///[[").unwrap_err();
        assert_eq!(err.code(), 2);
    }
}
