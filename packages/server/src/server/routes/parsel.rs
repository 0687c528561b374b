//! `/parsel` - XPath, CSS and regex extraction over a fetched document.

use axum::extract::{Extension, Query};
use axum::response::Response;
use serde::{Deserialize, Serialize};

use extraction::PathType;

use crate::common::error::ApiError;
use crate::common::response::ReturnStyle;
use crate::server::app::AppState;

use super::run_pipeline;

/// `path_type` values admitted by `/parsel`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParselPathType {
    #[default]
    Xpath,
    Css,
    Regex,
}

impl From<ParselPathType> for PathType {
    fn from(path_type: ParselPathType) -> Self {
        match path_type {
            ParselPathType::Xpath => PathType::Xpath,
            ParselPathType::Css => PathType::Css,
            ParselPathType::Regex => PathType::Regex,
        }
    }
}

/// Query parameters accepted by `/parsel`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParselRequest {
    pub url: String,
    pub path: String,
    #[serde(default)]
    pub path_type: ParselPathType,
    #[serde(default = "super::default_user_agent")]
    pub user_agent: String,
    #[serde(default)]
    pub return_style: ReturnStyle,
}

/// Extract part of a remote document with an XPath expression, a CSS
/// selector or a regular expression.
pub async fn parsel_handler(
    Extension(state): Extension<AppState>,
    Query(request_item): Query<ParselRequest>,
) -> Result<Response, ApiError> {
    let ParselRequest {
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
