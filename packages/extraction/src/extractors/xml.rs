//! XML to nested-map conversion.
//!
//! Folds an XML document into the same shape a JSON parse produces, so
//! both share one path-resolution grammar. Attributes become `@name`
//! entries, text-only elements collapse to their text, mixed content
//! keeps its text under `#text`, and repeated sibling tags collect into
//! arrays. Empty elements become null.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde_json::{Map, Value};

use crate::error::{ExtractError, ExtractResult};

struct Frame {
    name: String,
    map: Map<String, Value>,
    text: Vec<String>,
}

/// Parse an XML document into its nested-map form.
///
/// Any malformation - unclosed or mismatched tags, text outside the
/// root, zero or multiple roots - is reported as the single XML parse
/// error; the caller cannot act on finer detail.
pub fn xml_to_value(xml: &str) -> ExtractResult<Value> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    // Bottom frame stands in for the document itself.
    let mut stack: Vec<Frame> = vec![Frame {
        name: String::new(),
        map: Map::new(),
        text: Vec::new(),
    }];

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => stack.push(open_frame(&e)?),
            Ok(Event::Empty(e)) => {
                let frame = open_frame(&e)?;
                let parent = stack.last_mut().ok_or(ExtractError::XmlParse)?;
                insert_child(parent, frame);
            }
            Ok(Event::End(_)) => {
                let frame = stack.pop().ok_or(ExtractError::XmlParse)?;
                let parent = stack.last_mut().ok_or(ExtractError::XmlParse)?;
                insert_child(parent, frame);
            }
            Ok(Event::Text(e)) => {
                let text = e.unescape().map_err(|_| ExtractError::XmlParse)?;
                if !text.is_empty() {
                    if stack.len() == 1 {
                        // Text outside the root element.
                        return Err(ExtractError::XmlParse);
                    }
                    if let Some(frame) = stack.last_mut() {
                        frame.text.push(text.into_owned());
                    }
                }
            }
            Ok(Event::CData(e)) => {
                if stack.len() == 1 {
                    return Err(ExtractError::XmlParse);
                }
                if let Some(frame) = stack.last_mut() {
                    frame.text.push(String::from_utf8_lossy(&e.into_inner()).into_owned());
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {} // declarations, comments, processing instructions
            Err(_) => return Err(ExtractError::XmlParse),
        }
        buf.clear();
    }

    // Unclosed elements leave extra frames behind.
    if stack.len() != 1 {
        return Err(ExtractError::XmlParse);
    }
    let document = stack.pop().ok_or(ExtractError::XmlParse)?;
    if document.map.len() != 1 {
        // No root, or trailing siblings after it.
        return Err(ExtractError::XmlParse);
    }
    Ok(Value::Object(document.map))
}

fn open_frame(e: &BytesStart<'_>) -> ExtractResult<Frame> {
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let mut map = Map::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|_| ExtractError::XmlParse)?;
        let key = format!("@{}", String::from_utf8_lossy(attr.key.as_ref()));
        let value = attr
            .unescape_value()
            .map_err(|_| ExtractError::XmlParse)?
            .into_owned();
        map.insert(key, Value::String(value));
    }
    Ok(Frame {
        name,
        map,
        text: Vec::new(),
    })
}

fn insert_child(parent: &mut Frame, frame: Frame) {
    let Frame { name, map, text } = frame;
    let text = text.join("");

    let value = if map.is_empty() {
        if text.is_empty() {
            Value::Null
        } else {
            Value::String(text)
        }
    } else if text.is_empty() {
        Value::Object(map)
    } else {
        let mut map = map;
        map.insert("#text".to_string(), Value::String(text));
        Value::Object(map)
    };

    // Repeated sibling tags collect into an array.
    match parent.map.get_mut(&name) {
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let prior = existing.take();
            *existing = Value::Array(vec![prior, value]);
        }
        None => {
            parent.map.insert(name, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_only_elements_collapse_to_strings() {
        let value = xml_to_value("<note><to>Guest</to><subject>hello</subject></note>").unwrap();
        assert_eq!(value, json!({"note": {"to": "Guest", "subject": "hello"}}));
    }

    #[test]
    fn test_attributes_become_at_keys() {
        let value = xml_to_value(r#"<note lang="en"><to>Guest</to></note>"#).unwrap();
        assert_eq!(value, json!({"note": {"@lang": "en", "to": "Guest"}}));
    }

    #[test]
    fn test_mixed_content_keeps_text_entry() {
        let value = xml_to_value(r#"<p id="x">hello</p>"#).unwrap();
        assert_eq!(value, json!({"p": {"@id": "x", "#text": "hello"}}));
    }

    #[test]
    fn test_repeated_tags_collect_into_arrays() {
        let value = xml_to_value("<list><item>a</item><item>b</item><item>c</item></list>").unwrap();
        assert_eq!(value, json!({"list": {"item": ["a", "b", "c"]}}));
    }

    #[test]
    fn test_empty_elements_are_null() {
        let value = xml_to_value("<note><to/></note>").unwrap();
        assert_eq!(value, json!({"note": {"to": null}}));
    }

    #[test]
    fn test_declaration_is_ignored() {
        let value = xml_to_value("<?xml version=\"1.0\" encoding=\"UTF-8\"?><a>b</a>").unwrap();
        assert_eq!(value, json!({"a": "b"}));
    }

    #[test]
    fn test_malformed_documents_error() {
        for xml in [
            "",
            "plain text",
            "<unclosed>",
            "<a><b></a></b>",
            "<a>1</a><b>2</b>",
            "text before <a>1</a>",
        ] {
            assert!(xml_to_value(xml).is_err(), "xml: {xml:?}");
        }
    }

    #[test]
    fn test_cdata_is_text() {
        let value = xml_to_value("<a><![CDATA[<raw>]]></a>").unwrap();
        assert_eq!(value, json!({"a": "<raw>"}));
    }
}
