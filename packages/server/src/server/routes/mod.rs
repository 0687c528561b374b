// HTTP routes
pub mod dpath;
pub mod examples;
pub mod meta;
pub mod parsel;

pub use dpath::*;
pub use examples::*;
pub use meta::*;
pub use parsel::*;

use axum::response::Response;
use serde::Serialize;

use extraction::{extract, PathType};

use crate::common::error::ApiError;
use crate::common::response::{ResponseEnvelope, ReturnStyle};
use crate::server::app::AppState;

pub(crate) fn default_user_agent() -> String {
    extraction::DEFAULT_USER_AGENT.to_string()
}

/// The fetch -> extract -> envelope -> shape pipeline shared by the
/// data endpoints. The fetch is fully awaited before extraction runs.
pub(crate) async fn run_pipeline<R: Serialize>(
    state: &AppState,
    request_item: R,
    url: &str,
    path: &str,
    path_type: PathType,
    user_agent: &str,
    return_style: ReturnStyle,
) -> Result<Response, ApiError> {
    let fetch = state.fetcher.fetch(url, user_agent).await?;
    let outcome = extract(&fetch.raw_body, path, path_type);
    let envelope = ResponseEnvelope::build(request_item, &fetch, &outcome);
    Ok(envelope.into_shaped(return_style))
}
