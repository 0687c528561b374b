//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use extraction::DocumentFetcher;

use crate::config::Config;
use crate::server::routes::{
    dpath_handler, html_example_handler, json_example_handler, parsel_handler,
    user_agents_handler, wake_handler, xml_example_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub fetcher: Arc<DocumentFetcher>,
}

/// Build the Axum application router
pub fn build_app(config: Config, fetcher: DocumentFetcher) -> Router {
    let app_state = AppState {
        config: Arc::new(config),
        fetcher: Arc::new(fetcher),
    };

    // CORS configuration - read-only API, any origin may call it
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        // Data endpoints
        .route("/parsel", get(parsel_handler))
        .route("/dpath", get(dpath_handler))
        // Static example documents
        .route("/examples/html", get(html_example_handler))
        .route("/examples/json", get(json_example_handler))
        .route("/examples/xml", get(xml_example_handler))
        // Utility endpoints
        .route("/user_agents", get(user_agents_handler))
        .route("/wake", get(wake_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
