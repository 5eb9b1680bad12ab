// src/ranker.rs
//! Final ordering of the feed.

use rand::distributions::WeightedIndex;
use rand::prelude::*;

use crate::config::RankerConfig;
use crate::graph::{InteractionGraph, UserNode};
use crate::types::Recommendation;

/// `current * (1 + affinity / divisor)`, or the bare score with the boost off.
#[must_use]
pub fn ranking_key(current: f64, affinity: f64, config: &RankerConfig) -> f64 {
    if config.genre_boost {
        current * (1.0 + affinity / config.genre_boost_divisor)
    } else {
        current
    }
}

/// Scores every video for `user` and sorts by key, highest first.
///
/// The sort is stable: equal keys keep catalog order. Videos never scored
/// count as zero.
#[must_use]
pub fn rank_all(graph: &InteractionGraph, user: &UserNode, config: &RankerConfig) -> Vec<Recommendation> {
    let mut ranked: Vec<Recommendation> = graph
        .videos()
        .iter()
        .map(|video| Recommendation {
            video_id: video.id().to_string(),
            score: ranking_key(
                video.current_score().unwrap_or(0.0),
                user.affinity(video.genre()),
                config,
            ),
        })
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

/// Draws one entry with probability proportional to its score.
///
/// Falls back to a uniform draw when every score is zero.
pub fn pick_weighted<'a, R: Rng + ?Sized>(
    ranked: &'a [Recommendation],
    rng: &mut R,
) -> Option<&'a Recommendation> {
    match WeightedIndex::new(ranked.iter().map(|r| r.score)) {
        Ok(dist) => ranked.get(dist.sample(rng)),
        Err(_) => ranked.choose(rng),
    }
}
