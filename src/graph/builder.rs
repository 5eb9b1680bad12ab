// src/graph/builder.rs
//! Flattens the interaction graph into dense node indices for ranking.

use super::store::InteractionGraph;

/// Weighted out-edges per node.
///
/// Videos occupy `0..video_count`, users follow at `video_count + position`.
/// Videos have no out-edges; annotation-only edges carry zero weight.
#[must_use]
pub fn adjacency(graph: &InteractionGraph) -> Vec<Vec<(usize, f64)>> {
    let mut nodes: Vec<Vec<(usize, f64)>> = vec![Vec::new(); graph.video_count()];

    for out in &graph.edges {
        nodes.push(
            out.iter()
                .map(|(&video, edge)| (video, edge.weight.unwrap_or(0.0)))
                .collect(),
        );
    }

    nodes
}
