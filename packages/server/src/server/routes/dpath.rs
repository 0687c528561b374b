//! `/dpath` - slash-path extraction over JSON and XML documents.

use axum::extract::{Extension, Query};
use axum::response::Response;
use serde::{Deserialize, Serialize};

use extraction::PathType;

use crate::common::error::ApiError;
use crate::common::response::ReturnStyle;
use crate::server::app::AppState;

use super::run_pipeline;

/// `path_type` values admitted by `/dpath`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DpathPathType {
    #[default]
    Json,
    Xml,
}

impl From<DpathPathType> for PathType {
    fn from(path_type: DpathPathType) -> Self {
        match path_type {
            DpathPathType::Json => PathType::Json,
            DpathPathType::Xml => PathType::Xml,
        }
    }
}

/// Query parameters accepted by `/dpath`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DpathRequest {
    pub url: String,
    pub path: String,
    #[serde(default)]
    pub path_type: DpathPathType,
    #[serde(default = "super::default_user_agent")]
    pub user_agent: String,
    #[serde(default)]
    pub return_style: ReturnStyle,
}

/// Extract part of a remote JSON or XML document with a slash path.
/// XML documents are folded into their nested-map form first, so both
/// formats share one path grammar.
pub async fn dpath_handler(
    Extension(state): Extension<AppState>,
    Query(request_item): Query<DpathRequest>,
) -> Result<Response, ApiError> {
    let DpathRequest {
        url,
        path,
        path_type,
        user_agent,
        return_style,
    } = request_item.clone();

    run_pipeline(
        &state,
        request_item,
        &url,
        &path,
        path_type.into(),
        &user_agent,
        return_style,
    )
    .await
}
