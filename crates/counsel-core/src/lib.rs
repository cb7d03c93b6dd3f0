// Public fallible APIs in this crate share one concrete error contract
// (`CounselError`). Repeating per-function `# Errors` boilerplate obscures
// behavior more than it clarifies.
#![allow(
    clippy::missing_errors_doc,
    reason = "crate-wide fallible API uses one explicit error type; per-item boilerplate would duplicate contract"
)]

pub mod client;
pub mod config;
pub mod error;
pub mod fallback;
pub mod models;
pub mod provider;
pub mod scorer;
pub mod table;
pub(crate) mod text;

pub use client::Counsel;
pub use error::{CounselError, Result};
pub use models::{GuidanceResponse, ResponseSource, TopicRecord};
pub use scorer::{RelevanceEngine, ScorerConfig};
pub use table::TopicTable;
