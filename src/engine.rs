// src/engine.rs
//! Owns the graph and configuration and runs the feed operations.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use crate::config::{Config, InteractionWeights};
use crate::error::{FeedError, Result};
use crate::graph::{GraphSnapshot, InteractionGraph};
use crate::ranker;
use crate::scoring::{self, RankReport};
use crate::types::{Interaction, Recommendation, VideoRecord};

/// A feed engine instance. Not internally synchronized: callers sharing one
/// across threads must guard it with a single lock.
#[derive(Debug, Clone)]
pub struct FeedEngine {
    config: Config,
    weights: InteractionWeights,
    graph: InteractionGraph,
}

impl FeedEngine {
    /// # Errors
    /// Returns `InvalidInput` if the configuration fails validation.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            weights: config.interaction.weights(),
            config,
            graph: InteractionGraph::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn graph(&self) -> &InteractionGraph {
        &self.graph
    }

    /// Adds one catalog video. Returns false if the id was already ingested.
    pub fn add_video(&mut self, record: VideoRecord) -> bool {
        self.graph.add_video(record, &self.config.scoring)
    }

    /// Adds every record, returning how many were new.
    pub fn ingest<I>(&mut self, records: I) -> usize
    where
        I: IntoIterator<Item = VideoRecord>,
    {
        let mut added = 0;
        for record in records {
            if self.add_video(record) {
                added += 1;
            }
        }
        debug!(added, total = self.graph.video_count(), "catalog ingested");
        added
    }

    /// Registers a user. Returns false if already present.
    pub fn add_user(&mut self, user_id: &str) -> bool {
        self.graph.add_user(user_id)
    }

    /// Records one engagement event and returns the pair's accumulated weight.
    ///
    /// Unknown users are registered on their first interaction.
    ///
    /// # Errors
    /// `VideoNotFound` if the video was never ingested; the graph is unchanged.
    pub fn record_interaction(
        &mut self,
        user_id: &str,
        video_id: &str,
        event: &Interaction,
    ) -> Result<f64> {
        let weight = scoring::interaction_weight(event, &self.weights);
        match self.graph.record_interaction(user_id, video_id, weight) {
            Ok(total) => {
                debug!(user = user_id, video = video_id, weight, total, "interaction recorded");
                Ok(total)
            }
            Err(e) => {
                warn!(user = user_id, video = video_id, "interaction rejected: {e}");
                Err(e)
            }
        }
    }

    /// Recomputes every video's rank score from the current graph.
    pub fn recalculate_scores(&mut self) -> RankReport {
        scoring::recalculate(&mut self.graph, &self.config.rank)
    }

    /// Returns the top `top_k` videos for `user_id`, best first.
    ///
    /// Recalculates first. An unknown user gets an empty list.
    ///
    /// # Errors
    /// `InvalidInput` if `top_k` is zero.
    pub fn for_your_page(&mut self, user_id: &str, top_k: usize) -> Result<Vec<Recommendation>> {
        if top_k == 0 {
            return Err(FeedError::invalid("top_k must be at least 1"));
        }
        let mut ranked = self.rank_for(user_id);
        ranked.truncate(top_k);
        Ok(ranked)
    }

    /// `for_your_page` with the configured default length.
    ///
    /// # Errors
    /// Same as [`FeedEngine::for_your_page`].
    pub fn default_page(&mut self, user_id: &str) -> Result<Vec<Recommendation>> {
        self.for_your_page(user_id, self.config.ranker.default_top_k)
    }

    /// Picks the next video to show, weighted by the full ranking.
    ///
    /// Unknown users, or a ranking with nothing to weigh, fall back to a
    /// uniform pick over the catalog. `None` only for an empty catalog.
    pub fn next_video<R: Rng + ?Sized>(&mut self, user_id: &str, rng: &mut R) -> Option<String> {
        let ranked = self.rank_for(user_id);
        if let Some(pick) = ranker::pick_weighted(&ranked, rng) {
            return Some(pick.video_id.clone());
        }
        self.graph
            .videos()
            .choose(rng)
            .map(|video| video.id().to_string())
    }

    #[must_use]
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot::capture(&self.graph)
    }

    fn rank_for(&mut self, user_id: &str) -> Vec<Recommendation> {
        if !self.graph.contains_user(user_id) {
            debug!(user = user_id, "unknown user, empty feed");
            return Vec::new();
        }

        self.recalculate_scores();

        let settings = &self.config.ranker;
        let ranked = match self.graph.user(user_id) {
            Some(user) => ranker::rank_all(&self.graph, user, settings),
            None => return Vec::new(),
        };

        if settings.annotate_recommendations {
            for rec in &ranked {
                self.graph.annotate_recommendation(user_id, &rec.video_id, rec.score);
            }
        }
        ranked
    }
}
