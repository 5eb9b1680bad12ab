// src/scoring/recalc.rs
use tracing::{info, warn};

use super::pagerank::{self, Personalization, RankReport};
use crate::config::RankConfig;
use crate::graph::{builder, InteractionGraph};

/// Re-derives every video's `current_score` from the current graph.
///
/// Reads edges, weights and preferences without touching them; only
/// `current_score` is written.
pub fn recalculate(graph: &mut InteractionGraph, config: &RankConfig) -> RankReport {
    let video_count = graph.video_count();
    if video_count == 0 {
        return RankReport {
            iterations: 0,
            converged: true,
            delta: 0.0,
            personalization: Personalization::Uniform,
            video_mass: 0.0,
            user_mass: 0.0,
        };
    }

    let node_count = video_count + graph.user_count();
    let (vector, personalization) =
        pagerank::build_personalization(&graph.initial_scores(), node_count);
    let adjacency = builder::adjacency(graph);
    let result = pagerank::compute(&adjacency, &vector, config);

    let (videos, users) = result.scores.split_at(video_count);
    graph.set_current_scores(videos);

    let report = RankReport {
        iterations: result.iterations,
        converged: result.converged,
        delta: result.delta,
        personalization,
        video_mass: videos.iter().sum(),
        user_mass: users.iter().sum(),
    };

    if report.converged {
        info!(
            iterations = report.iterations,
            videos = video_count,
            edges = graph.edge_count(),
            "scores recalculated"
        );
    } else {
        warn!(
            iterations = report.iterations,
            delta = report.delta,
            "rank iteration hit the cap before converging, keeping best estimate"
        );
    }
    report
}
