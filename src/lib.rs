//! Movie award records service with producer win-interval analytics.

pub mod analyzer;
pub mod api;
pub mod bootstrap;
pub mod config;
pub mod model;
pub mod normalizer;
pub mod parser;
pub mod storage;
pub mod utils;

pub use api::{AppState, build_router};
