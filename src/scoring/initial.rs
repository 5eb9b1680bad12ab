// src/scoring/initial.rs
use crate::config::ScoringConfig;
use crate::types::Counters;

/// Computes the ingestion-time popularity score of a video.
///
/// All coefficients are validated non-negative, so the result is never negative.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn initial_score(counters: &Counters, coefficients: &ScoringConfig) -> f64 {
    counters.viewers as f64 * coefficients.viewers
        + counters.likes as f64 * coefficients.likes
        + counters.comments as f64 * coefficients.comments
        + counters.shares as f64 * coefficients.shares
        + counters.saves as f64 * coefficients.saves
}
