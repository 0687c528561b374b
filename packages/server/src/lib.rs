// Selector API - server core
//
// HTTP surface for the document fetch + path extraction pipeline: two
// data endpoints split by selector family, static example documents,
// and a couple of utility routes.

pub mod common;
pub mod config;
pub mod server;

pub use config::*;
