//! Static example documents, served as extraction targets for
//! documentation and tests.

use axum::http::header;
use axum::response::{Html, IntoResponse, Json, Response};
use serde_json::json;

/// The fixed note every example document carries.
pub struct DocumentExamples;

impl DocumentExamples {
    pub const TO: &'static str = "Guest";
    pub const FROM: &'static str = "Avi Perl";
    pub const SUBJECT: &'static str = "You scraped me \u{1F915}";
    pub const BODY: &'static str = "Thats painful, ouch!";

    pub const HTML: &'static str = "<html><head><title>HTML Example Note</title></head><body><div class=\"note\"><span><strong>To:</strong> Guest</span><br><span><strong>From:</strong> Avi Perl</span><br><span><strong>Subject:</strong> You scraped me \u{1F915}</span><hr><p>Thats painful, ouch!</p></div></body></html>";
    pub const XML: &'static str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?><note><to>Guest</to><from>Avi Perl</from><subject>You scraped me \u{1F915}</subject><body>Thats painful, ouch!</body></note>";
}

/// The note as a JSON document.
pub fn json_document() -> serde_json::Value {
    json!({
        "note": {
            "to": DocumentExamples::TO,
            "from": DocumentExamples::FROM,
            "subject": DocumentExamples::SUBJECT,
            "body": DocumentExamples::BODY,
        }
    })
}

/// Serve the HTML example note.
pub async fn html_example_handler() -> Html<&'static str> {
    Html(DocumentExamples::HTML)
}

/// Serve the JSON example note.
pub async fn json_example_handler() -> Json<serde_json::Value> {
    Json(json_document())
}

/// Serve the XML example note.
pub async fn xml_example_handler() -> Response {
    (
        [(header::CONTENT_TYPE, "application/xml")],
        DocumentExamples::XML,
    )
        .into_response()
}
