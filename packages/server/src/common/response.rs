//! Response envelope and verbosity shaping.

use axum::response::{Html, IntoResponse, Json, Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use extraction::{ExtractError, Extraction, FetchResult};

/// Transport outcome of the outbound fetch, keyed by its HTTP status.
#[derive(Debug, Clone, Serialize)]
pub struct RequestError {
    pub code: u16,
    /// `[short reason, long description]`, null for unknown codes.
    pub msg: Option<(String, String)>,
}

impl From<&FetchResult> for RequestError {
    fn from(fetch: &FetchResult) -> Self {
        Self {
            code: fetch.status_code,
            msg: fetch
                .status_short
                .zip(fetch.status_long)
                .map(|(short, long)| (short.to_string(), long.to_string())),
        }
    }
}

/// Extraction outcome: code 0 is success, 1-3 are the failure classes.
#[derive(Debug, Clone, Serialize)]
pub struct ParserError {
    pub code: u8,
    pub msg: String,
}

impl ParserError {
    pub fn success() -> Self {
        Self {
            code: 0,
            msg: "Success".to_string(),
        }
    }
}

impl From<&ExtractError> for ParserError {
    fn from(err: &ExtractError) -> Self {
        Self {
            code: err.code(),
            msg: err.to_string(),
        }
    }
}

/// Cache provenance for a response. No cache exists; the type keeps the
/// wire contract and the field always serializes as null.
#[derive(Debug, Clone, Serialize)]
pub struct CacheInfo {
    pub original_request_time: DateTime<Utc>,
    pub age_seconds: i64,
    pub time_remaining_seconds: i64,
    pub retrieved_count: u32,
}

/// Response verbosity requested by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReturnStyle {
    #[default]
    Basic,
    DataOnly,
    Verbose,
}

/// Full result of one request before shaping.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseEnvelope<R: Serialize> {
    pub request_item: R,
    pub request_error: RequestError,
    pub parser_error: ParserError,
    pub used_cache: bool,
    pub cache_info: Option<CacheInfo>,
    pub path_data: Option<String>,
    /// The full fetched document.
    pub raw_data: String,
}

/// The frozen BASIC projection of an envelope.
#[derive(Debug, Clone, Serialize)]
pub struct BasicResponse {
    pub request_error: RequestError,
    pub path_data: Option<String>,
    pub used_cache: bool,
}

impl<R: Serialize> ResponseEnvelope<R> {
    /// Assemble the envelope from the request echo, the fetch outcome
    /// and the extraction outcome. Pure; never fails.
    pub fn build(
        request_item: R,
        fetch: &FetchResult,
        outcome: &Result<Extraction, ExtractError>,
    ) -> Self {
        let (parser_error, path_data) = match outcome {
            Ok(extraction) => (ParserError::success(), extraction.path_data.clone()),
            Err(err) => (ParserError::from(err), None),
        };
        Self {
            request_item,
            request_error: RequestError::from(fetch),
            parser_error,
            used_cache: false,
            cache_info: None,
            path_data,
            raw_data: fetch.raw_body.clone(),
        }
    }

    /// Project down to the BASIC allow-list. The envelope is not
    /// modified; the projection is its own struct.
    pub fn to_basic(&self) -> BasicResponse {
        BasicResponse {
            request_error: self.request_error.clone(),
            path_data: self.path_data.clone(),
            used_cache: self.used_cache,
        }
    }

    /// Reduce to the requested verbosity.
    ///
    /// DATA_ONLY renders the extracted value alone as a raw text body,
    /// dropping both error channels - a caller choosing it gets an
    /// empty 200 when the fetch or extraction failed.
    pub fn into_shaped(self, style: ReturnStyle) -> Response {
        match style {
            ReturnStyle::Basic => Json(self.to_basic()).into_response(),
            ReturnStyle::DataOnly => Html(self.path_data.unwrap_or_default()).into_response(),
            ReturnStyle::Verbose => Json(self).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use extraction::{extract, PathType};
    use serde_json::{json, Value};

    fn sample_envelope() -> ResponseEnvelope<Value> {
        let body = r#"{"note":{"subject":"hello"}}"#;
        let outcome = extract(body, "/note/subject", PathType::Json);
        let fetch = FetchResult {
            status_code: 200,
            status_short: Some("OK"),
            status_long: Some("Request fulfilled, document follows"),
            raw_body: body.to_string(),
        };
        ResponseEnvelope::build(json!({"url": "http://localhost"}), &fetch, &outcome)
    }

    #[test]
    fn test_basic_keys_are_a_strict_subset_of_verbose_keys() {
        let envelope = sample_envelope();
        let basic = serde_json::to_value(envelope.to_basic()).unwrap();
        let verbose = serde_json::to_value(&envelope).unwrap();

        let basic_keys: Vec<&String> = basic.as_object().unwrap().keys().collect();
        let verbose_obj = verbose.as_object().unwrap();
        for key in &basic_keys {
            assert!(verbose_obj.contains_key(*key), "missing key {key}");
        }
        assert!(basic_keys.len() < verbose_obj.len());
    }

    #[test]
    fn test_basic_allow_list_is_frozen() {
        let basic = serde_json::to_value(sample_envelope().to_basic()).unwrap();
        let mut keys: Vec<String> = basic.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, ["path_data", "request_error", "used_cache"]);
    }

    #[test]
    fn test_envelope_reports_success() {
        let envelope = sample_envelope();
        assert_eq!(envelope.parser_error.code, 0);
        assert_eq!(envelope.parser_error.msg, "Success");
        assert_eq!(envelope.path_data.as_deref(), Some("hello"));
        assert!(!envelope.used_cache);
        assert!(envelope.cache_info.is_none());
    }

    #[test]
    fn test_envelope_carries_extraction_errors() {
        let body = r#"{"note":{}}"#;
        let outcome = extract(body, "/note/subject", PathType::Json);
        let fetch = FetchResult {
            status_code: 200,
            status_short: Some("OK"),
            status_long: Some("Request fulfilled, document follows"),
            raw_body: body.to_string(),
        };
        let envelope = ResponseEnvelope::build(json!({}), &fetch, &outcome);
        assert_eq!(envelope.parser_error.code, 1);
        assert_eq!(envelope.path_data, None);
        assert_eq!(envelope.raw_data, body);
    }

    #[test]
    fn test_request_error_serializes_msg_as_pair() {
        let envelope = sample_envelope();
        let value = serde_json::to_value(&envelope.request_error).unwrap();
        assert_eq!(
            value,
            json!({"code": 200, "msg": ["OK", "Request fulfilled, document follows"]})
        );
    }

    #[test]
    fn test_unknown_status_has_null_msg() {
        let fetch = FetchResult {
            status_code: 999,
            status_short: None,
            status_long: None,
            raw_body: String::new(),
        };
        let value = serde_json::to_value(RequestError::from(&fetch)).unwrap();
        assert_eq!(value, json!({"code": 999, "msg": null}));
    }

    #[tokio::test]
    async fn test_data_only_body_equals_verbose_path_data() {
        let envelope = sample_envelope();
        let expected = envelope.path_data.clone().unwrap();

        let response = envelope.into_shaped(ReturnStyle::DataOnly);
        assert_eq!(response.status(), 200);
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap()
            .to_string();
        assert!(content_type.starts_with("text/html"));

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(body.as_ref(), expected.as_bytes());
    }

    #[tokio::test]
    async fn test_data_only_with_no_match_is_an_empty_200() {
        let mut envelope = sample_envelope();
        envelope.path_data = None;
        let response = envelope.into_shaped(ReturnStyle::DataOnly);
        assert_eq!(response.status(), 200);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
    }

    #[test]
    fn test_return_style_parses_wire_tags() {
        let style: ReturnStyle = serde_json::from_str("\"DATA_ONLY\"").unwrap();
        assert_eq!(style, ReturnStyle::DataOnly);
        assert_eq!(ReturnStyle::default(), ReturnStyle::Basic);
    }
}
