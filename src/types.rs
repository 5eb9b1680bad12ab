// src/types.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{FeedError, Result};

/// Raw engagement counters carried by a catalog row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counters {
    pub viewers: u64,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub saves: u64,
}

/// One catalog row as supplied by a loader.
///
/// `extra` holds descriptive fields (title, creator, ...) that ride along for
/// display and are never read by scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub id: String,
    pub genre: String,
    pub counters: Counters,
    #[serde(default)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl VideoRecord {
    #[must_use]
    pub fn new(id: impl Into<String>, genre: impl Into<String>, counters: Counters) -> Self {
        Self {
            id: id.into(),
            genre: genre.into(),
            counters,
            extra: BTreeMap::new(),
        }
    }

    /// Attaches a pass-through display field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Returns the `title` display field when it is a string.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.extra.get("title").and_then(serde_json::Value::as_str)
    }
}

/// How much of a video the user watched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Watch {
    #[default]
    Skip,
    #[value(alias = "half")]
    Partial,
    Full,
}

impl Watch {
    /// The `full_watch` term of the interaction weight: 0, 0.5 or 1.
    #[must_use]
    pub fn fraction(self) -> f64 {
        match self {
            Self::Skip => 0.0,
            Self::Partial => 0.5,
            Self::Full => 1.0,
        }
    }

    /// Parses the numeric encoding used by event feeds.
    ///
    /// # Errors
    /// Returns `InvalidInput` for anything other than 0, 0.5 or 1.
    #[allow(clippy::float_cmp)]
    pub fn from_fraction(value: f64) -> Result<Self> {
        if value == 0.0 {
            Ok(Self::Skip)
        } else if value == 0.5 {
            Ok(Self::Partial)
        } else if value == 1.0 {
            Ok(Self::Full)
        } else {
            Err(FeedError::invalid(format!(
                "full_watch must be 0, 0.5 or 1 (got {value})"
            )))
        }
    }
}

/// A single engagement event between a user and a video.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    pub like: bool,
    pub comment: bool,
    pub share: bool,
    pub save: bool,
    pub watch: Watch,
}

impl Interaction {
    #[must_use]
    pub fn watched(watch: Watch) -> Self {
        Self { watch, ..Self::default() }
    }

    #[must_use]
    pub fn liked(mut self) -> Self {
        self.like = true;
        self
    }

    #[must_use]
    pub fn commented(mut self) -> Self {
        self.comment = true;
        self
    }

    #[must_use]
    pub fn shared(mut self) -> Self {
        self.share = true;
        self
    }

    #[must_use]
    pub fn saved(mut self) -> Self {
        self.save = true;
        self
    }

    /// Builds an interaction from 0/1 flags and a numeric watch level.
    ///
    /// # Errors
    /// Returns `InvalidInput` if a flag is not 0 or 1, or the watch level is
    /// not one of 0, 0.5, 1.
    pub fn from_raw(like: i64, comment: i64, share: i64, save: i64, full_watch: f64) -> Result<Self> {
        Ok(Self {
            like: flag("like", like)?,
            comment: flag("comment", comment)?,
            share: flag("share", share)?,
            save: flag("save", save)?,
            watch: Watch::from_fraction(full_watch)?,
        })
    }
}

fn flag(name: &str, value: i64) -> Result<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(FeedError::invalid(format!("{name} must be 0 or 1 (got {other})"))),
    }
}

/// Node type tag exposed to inspection consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    User,
    Video,
}

/// A ranked feed entry. `score` is non-negative and usable as a sampling weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub video_id: String,
    pub score: f64,
}
