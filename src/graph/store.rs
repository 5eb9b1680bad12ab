// src/graph/store.rs
//! The user/video interaction graph and its bookkeeping.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::config::ScoringConfig;
use crate::error::{FeedError, Result};
use crate::scoring::initial_score;
use crate::types::{Counters, VideoRecord};

/// A catalog video. `initial_score` is fixed at ingestion.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoNode {
    pub(crate) id: String,
    pub(crate) genre: String,
    pub(crate) counters: Counters,
    pub(crate) initial_score: f64,
    pub(crate) current_score: Option<f64>,
    pub(crate) extra: BTreeMap<String, serde_json::Value>,
}

impl VideoNode {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn genre(&self) -> &str {
        &self.genre
    }

    #[must_use]
    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    #[must_use]
    pub fn initial_score(&self) -> f64 {
        self.initial_score
    }

    /// Rank score from the last recalculation, `None` before the first one.
    /// Stale after any mutation until the next recalculation.
    #[must_use]
    pub fn current_score(&self) -> Option<f64> {
        self.current_score
    }

    /// Pass-through display fields.
    #[must_use]
    pub fn extra(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.extra
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.extra.get("title").and_then(serde_json::Value::as_str)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserNode {
    pub(crate) id: String,
    pub(crate) genre_preferences: BTreeMap<String, f64>,
}

impl UserNode {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Accumulated interaction weight per genre.
    #[must_use]
    pub fn genre_preferences(&self) -> &BTreeMap<String, f64> {
        &self.genre_preferences
    }

    #[must_use]
    pub fn affinity(&self, genre: &str) -> f64 {
        self.genre_preferences.get(genre).copied().unwrap_or(0.0)
    }
}

/// A user -> video edge.
///
/// `weight` is present once the pair has interacted. `recommendation_score`
/// is a visualization annotation and never feeds scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Edge {
    pub weight: Option<f64>,
    pub recommendation_score: Option<f64>,
}

/// Directed graph of users, videos and engagement edges.
///
/// User and video ids live in separate namespaces.
#[derive(Debug, Clone, Default)]
pub struct InteractionGraph {
    pub(crate) videos: Vec<VideoNode>,
    pub(crate) video_index: HashMap<String, usize>,
    pub(crate) users: Vec<UserNode>,
    pub(crate) user_index: HashMap<String, usize>,
    /// Out-edges per user (same position as `users`), keyed by video position.
    pub(crate) edges: Vec<BTreeMap<usize, Edge>>,
    pub(crate) genre_totals: BTreeMap<String, f64>,
}

impl InteractionGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a video. Returns false (and changes nothing) if the id exists.
    pub fn add_video(&mut self, record: VideoRecord, coefficients: &ScoringConfig) -> bool {
        if self.video_index.contains_key(&record.id) {
            debug!(video = %record.id, "video already ingested, skipping");
            return false;
        }

        let score = initial_score(&record.counters, coefficients);
        *self.genre_totals.entry(record.genre.clone()).or_default() += score;

        self.video_index.insert(record.id.clone(), self.videos.len());
        debug!(video = %record.id, genre = %record.genre, initial_score = score, "video added");
        self.videos.push(VideoNode {
            id: record.id,
            genre: record.genre,
            counters: record.counters,
            initial_score: score,
            current_score: None,
            extra: record.extra,
        });
        true
    }

    /// Registers a user with no preferences. Returns false if already present.
    pub fn add_user(&mut self, user_id: &str) -> bool {
        if self.user_index.contains_key(user_id) {
            return false;
        }
        self.insert_user(user_id);
        true
    }

    fn insert_user(&mut self, user_id: &str) -> usize {
        let position = self.users.len();
        self.user_index.insert(user_id.to_string(), position);
        self.users.push(UserNode {
            id: user_id.to_string(),
            genre_preferences: BTreeMap::new(),
        });
        self.edges.push(BTreeMap::new());
        debug!(user = user_id, "user added");
        position
    }

    /// Adds `weight` to the (user, video) edge and to the user's affinity for
    /// the video's genre, registering the user if needed.
    ///
    /// Returns the accumulated edge weight.
    ///
    /// # Errors
    /// `VideoNotFound` if the video is unknown, `InvalidInput` if `weight` is
    /// negative or not finite. Neither case mutates the graph.
    pub fn record_interaction(&mut self, user_id: &str, video_id: &str, weight: f64) -> Result<f64> {
        let Some(&video) = self.video_index.get(video_id) else {
            return Err(FeedError::VideoNotFound {
                id: video_id.to_string(),
            });
        };
        if !weight.is_finite() || weight < 0.0 {
            return Err(FeedError::invalid(format!(
                "interaction weight must be finite and non-negative (got {weight})"
            )));
        }

        let user = match self.user_index.get(user_id) {
            Some(&position) => position,
            None => self.insert_user(user_id),
        };

        let edge = self.edges[user].entry(video).or_default();
        let total = edge.weight.unwrap_or(0.0) + weight;
        edge.weight = Some(total);

        let genre = self.videos[video].genre.clone();
        *self.users[user].genre_preferences.entry(genre).or_default() += weight;

        Ok(total)
    }

    /// Attaches a recommendation annotation to a pair with no edge yet.
    /// Returns false if the pair already has an edge or either node is unknown.
    pub fn annotate_recommendation(&mut self, user_id: &str, video_id: &str, score: f64) -> bool {
        let (Some(&user), Some(&video)) = (self.user_index.get(user_id), self.video_index.get(video_id)) else {
            return false;
        };
        let out = &mut self.edges[user];
        if out.contains_key(&video) {
            return false;
        }
        out.insert(
            video,
            Edge {
                weight: None,
                recommendation_score: Some(score),
            },
        );
        true
    }

    #[must_use]
    pub fn video(&self, video_id: &str) -> Option<&VideoNode> {
        self.video_index.get(video_id).map(|&i| &self.videos[i])
    }

    #[must_use]
    pub fn user(&self, user_id: &str) -> Option<&UserNode> {
        self.user_index.get(user_id).map(|&i| &self.users[i])
    }

    #[must_use]
    pub fn contains_video(&self, video_id: &str) -> bool {
        self.video_index.contains_key(video_id)
    }

    #[must_use]
    pub fn contains_user(&self, user_id: &str) -> bool {
        self.user_index.contains_key(user_id)
    }

    /// Videos in ingestion order.
    #[must_use]
    pub fn videos(&self) -> &[VideoNode] {
        &self.videos
    }

    /// Users in registration order.
    #[must_use]
    pub fn users(&self) -> &[UserNode] {
        &self.users
    }

    #[must_use]
    pub fn video_count(&self) -> usize {
        self.videos.len()
    }

    #[must_use]
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn edge(&self, user_id: &str, video_id: &str) -> Option<&Edge> {
        let user = *self.user_index.get(user_id)?;
        let video = *self.video_index.get(video_id)?;
        self.edges[user].get(&video)
    }

    /// All edges as `(user id, video id, edge)`, grouped by user.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, &Edge)> + '_ {
        self.users.iter().zip(&self.edges).flat_map(move |(user, out)| {
            out.iter()
                .map(move |(&video, edge)| (user.id.as_str(), self.videos[video].id.as_str(), edge))
        })
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(BTreeMap::len).sum()
    }

    /// Sum of initial scores per genre.
    #[must_use]
    pub fn genre_totals(&self) -> &BTreeMap<String, f64> {
        &self.genre_totals
    }

    pub(crate) fn initial_scores(&self) -> Vec<f64> {
        self.videos.iter().map(|v| v.initial_score).collect()
    }

    pub(crate) fn set_current_scores(&mut self, scores: &[f64]) {
        for (video, &score) in self.videos.iter_mut().zip(scores) {
            video.current_score = Some(score);
        }
    }
}
