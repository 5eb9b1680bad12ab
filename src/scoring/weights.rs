// src/scoring/weights.rs
use crate::config::InteractionWeights;
use crate::types::Interaction;

/// Weight contributed by one engagement event.
#[must_use]
pub fn interaction_weight(event: &Interaction, weights: &InteractionWeights) -> f64 {
    let on = |flag: bool| if flag { 1.0 } else { 0.0 };

    on(event.like) * weights.like
        + on(event.comment) * weights.comment
        + on(event.share) * weights.share
        + on(event.save) * weights.save
        + event.watch.fraction() * weights.full_watch
}
