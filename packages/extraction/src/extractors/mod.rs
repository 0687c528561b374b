//! Path extraction, one module per selector grammar.

mod css;
mod docpath;
mod re;
mod xml;
mod xpath;

pub use docpath::resolve_path;
pub use xml::xml_to_value;

use crate::error::ExtractResult;
use crate::types::{Extraction, PathType};

/// Apply `path` to `raw_body` according to `path_type`.
///
/// A path that matches nothing on a parseable document is a success
/// with empty data; only evaluation failures and unparseable documents
/// produce errors.
pub fn extract(raw_body: &str, path: &str, path_type: PathType) -> ExtractResult<Extraction> {
    let value = match path_type {
        PathType::Xpath => xpath::first_match(raw_body, path)?,
        PathType::Css => css::first_match(raw_body, path)?,
        PathType::Regex => re::capture_groups(raw_body, path)?,
        PathType::Json => docpath::from_json(raw_body, path)?,
        PathType::Xml => docpath::from_xml(raw_body, path)?,
    };

    Ok(match value {
        Some(value) => Extraction::from_value(value, path_type),
        None => Extraction::empty(),
    })
}
