pub mod catalog;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod exit;
pub mod graph;
pub mod ranker;
pub mod reporting;
pub mod scoring;
pub mod types;

pub use config::Config;
pub use engine::FeedEngine;
pub use error::{FeedError, Result};
pub use types::{Counters, Interaction, Recommendation, VideoRecord, Watch};
