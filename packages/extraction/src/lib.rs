//! Document fetching and multi-format path extraction.
//!
//! Given a URL and a path expression, this library fetches the document
//! once and pulls out the addressed sub-value using one of five selector
//! grammars: XPath, CSS selectors, regular expressions, or slash-paths
//! over JSON and XML documents.
//!
//! # Usage
//!
//! ```rust,ignore
//! use extraction::{extract, DocumentFetcher, PathType};
//!
//! let fetcher = DocumentFetcher::new()?;
//! let fetch = fetcher.fetch("example.com/note.json", user_agent).await?;
//! let outcome = extract(&fetch.raw_body, "/note/subject", PathType::Json);
//! ```
//!
//! # Modules
//!
//! - [`fetch`] - Single-shot document retrieval
//! - [`extractors`] - One module per selector grammar, plus dispatch
//! - [`status`] - Static HTTP status reason table
//! - [`types`] - Path type tags and extraction results
//! - [`error`] - Typed extraction and fetch errors

pub mod error;
pub mod extractors;
pub mod fetch;
pub mod status;
pub mod types;
pub mod user_agents;

// Re-export core types at crate root
pub use error::{ExtractError, FetchError};
pub use extractors::extract;
pub use fetch::{normalize_url, DocumentFetcher, FetchResult};
pub use types::{Extraction, PathType};
pub use user_agents::{DEFAULT_USER_AGENT, USER_AGENTS};
