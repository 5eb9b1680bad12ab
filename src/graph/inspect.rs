// src/graph/inspect.rs
//! Read-only views of the graph for rendering collaborators.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write;

use super::store::InteractionGraph;
use crate::error::Result;
use crate::types::{Counters, NodeKind};

/// A node with its type tag and attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeView {
    Video {
        id: String,
        genre: String,
        counters: Counters,
        initial_score: f64,
        current_score: Option<f64>,
        extra: BTreeMap<String, serde_json::Value>,
    },
    User {
        id: String,
        genre_preferences: BTreeMap<String, f64>,
    },
}

impl NodeView {
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Video { .. } => NodeKind::Video,
            Self::User { .. } => NodeKind::User,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Video { id, .. } | Self::User { id, .. } => id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Interaction,
    Recommendation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeView {
    pub source: String,
    pub target: String,
    pub kind: EdgeKind,
    pub weight: Option<f64>,
    pub recommendation_score: Option<f64>,
}

impl EdgeView {
    /// The number a renderer should label the edge with.
    /// Recommendation score wins over weight.
    #[must_use]
    pub fn display_value(&self) -> f64 {
        self.recommendation_score.or(self.weight).unwrap_or(0.0)
    }
}

/// Owned copy of every node and edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<NodeView>,
    pub edges: Vec<EdgeView>,
}

impl GraphSnapshot {
    /// Captures the graph: videos, then users, then edges grouped by user.
    #[must_use]
    pub fn capture(graph: &InteractionGraph) -> Self {
        let videos = graph.videos().iter().map(|v| NodeView::Video {
            id: v.id.clone(),
            genre: v.genre.clone(),
            counters: v.counters,
            initial_score: v.initial_score,
            current_score: v.current_score,
            extra: v.extra.clone(),
        });
        let users = graph.users().iter().map(|u| NodeView::User {
            id: u.id.clone(),
            genre_preferences: u.genre_preferences.clone(),
        });

        let edges = graph
            .edges()
            .map(|(user, video, edge)| EdgeView {
                source: user.to_string(),
                target: video.to_string(),
                kind: if edge.weight.is_some() {
                    EdgeKind::Interaction
                } else {
                    EdgeKind::Recommendation
                },
                weight: edge.weight,
                recommendation_score: edge.recommendation_score,
            })
            .collect();

        Self {
            nodes: videos.chain(users).collect(),
            edges,
        }
    }

    /// # Errors
    /// Returns error if JSON serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Renders Graphviz DOT: users blue, videos green, edges labelled with
    /// their display value and widened in proportion to it.
    #[must_use]
    pub fn to_dot(&self) -> String {
        let mut out = String::from("digraph fyp {\n");
        let max = self
            .edges
            .iter()
            .map(EdgeView::display_value)
            .fold(0.0_f64, f64::max);

        for node in &self.nodes {
            let (color, key) = match node.kind() {
                NodeKind::User => ("blue", dot_key(NodeKind::User, node.id())),
                NodeKind::Video => ("green", dot_key(NodeKind::Video, node.id())),
            };
            let _ = writeln!(
                out,
                "  {key} [label=\"{}\", style=filled, fillcolor={color}];",
                escape(node.id())
            );
        }

        for edge in &self.edges {
            let value = edge.display_value();
            let width = if max > 0.0 { value / max * 5.0 } else { 1.0 };
            let _ = writeln!(
                out,
                "  {} -> {} [label=\"{value:.4}\", penwidth={width:.2}];",
                dot_key(NodeKind::User, &edge.source),
                dot_key(NodeKind::Video, &edge.target),
            );
        }

        out.push_str("}\n");
        out
    }
}

fn dot_key(kind: NodeKind, id: &str) -> String {
    let prefix = match kind {
        NodeKind::User => "user",
        NodeKind::Video => "video",
    };
    format!("\"{prefix}:{}\"", escape(id))
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
