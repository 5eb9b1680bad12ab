// src/scoring/mod.rs
//! Popularity and engagement scoring.
//!
//! `initial` and `weights` are the two fixed linear formulas; `pagerank`
//! turns the interaction graph into a per-node rank score.

pub mod initial;
pub mod pagerank;
pub mod recalc;
pub mod weights;

pub use initial::initial_score;
pub use pagerank::{Personalization, RankReport, Stationary};
pub use recalc::recalculate;
pub use weights::interaction_weight;
