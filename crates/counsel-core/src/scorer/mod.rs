mod config;
mod engine;
mod phrases;

pub use config::ScorerConfig;
pub use engine::RelevanceEngine;
