// src/catalog.rs
//! JSON catalog and event-log loading.
//!
//! Catalog files are an array of flat objects:
//! `{"id": 1, "genre": "comedy", "viewers": 100, "likes": 50, ..., "title": "..."}`.
//! Keys other than the id, genre and counters are carried as display fields.
//! Event logs are an array of `{"user", "video", "like", "comment", "share",
//! "save", "full_watch"}` objects with 0/1 flags.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{FeedError, Result};
use crate::types::{Counters, Interaction, VideoRecord};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    id: RawId,
    genre: String,
    #[serde(default)]
    viewers: i64,
    #[serde(default)]
    likes: i64,
    #[serde(default)]
    comments: i64,
    #[serde(default)]
    shares: i64,
    #[serde(default)]
    saves: i64,
    #[serde(flatten)]
    extra: BTreeMap<String, serde_json::Value>,
}

impl TryFrom<RawRecord> for VideoRecord {
    type Error = FeedError;

    fn try_from(raw: RawRecord) -> Result<Self> {
        let id = raw.id.into_string();
        let count = |name: &str, value: i64| {
            u64::try_from(value).map_err(|_| {
                FeedError::invalid(format!("video {id}: {name} must be non-negative (got {value})"))
            })
        };
        let counters = Counters {
            viewers: count("viewers", raw.viewers)?,
            likes: count("likes", raw.likes)?,
            comments: count("comments", raw.comments)?,
            shares: count("shares", raw.shares)?,
            saves: count("saves", raw.saves)?,
        };
        Ok(Self {
            id,
            genre: raw.genre,
            counters,
            extra: raw.extra,
        })
    }
}

/// A recorded engagement event bound for `FeedEngine::record_interaction`.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord {
    pub user: String,
    pub video: String,
    pub interaction: Interaction,
}

#[derive(Debug, Deserialize)]
struct RawEvent {
    user: RawId,
    video: RawId,
    #[serde(default)]
    like: i64,
    #[serde(default)]
    comment: i64,
    #[serde(default)]
    share: i64,
    #[serde(default)]
    save: i64,
    #[serde(default)]
    full_watch: f64,
}

impl TryFrom<RawEvent> for EventRecord {
    type Error = FeedError;

    fn try_from(raw: RawEvent) -> Result<Self> {
        Ok(Self {
            interaction: Interaction::from_raw(raw.like, raw.comment, raw.share, raw.save, raw.full_watch)?,
            user: raw.user.into_string(),
            video: raw.video.into_string(),
        })
    }
}

/// Parses catalog JSON, rejecting rows with negative counters.
///
/// # Errors
/// Returns `Json` on malformed input and `InvalidInput` on bad counters.
pub fn parse_catalog(content: &str) -> Result<Vec<VideoRecord>> {
    let raw: Vec<RawRecord> = serde_json::from_str(content)?;
    raw.into_iter().map(VideoRecord::try_from).collect()
}

/// # Errors
/// Returns error if the file cannot be read or parsed.
pub fn load_catalog(path: &Path) -> Result<Vec<VideoRecord>> {
    parse_catalog(&read(path)?)
}

/// Parses an event log, rejecting out-of-range flags.
///
/// # Errors
/// Returns `Json` on malformed input and `InvalidInput` on bad flags.
pub fn parse_events(content: &str) -> Result<Vec<EventRecord>> {
    let raw: Vec<RawEvent> = serde_json::from_str(content)?;
    raw.into_iter().map(EventRecord::try_from).collect()
}

/// # Errors
/// Returns error if the file cannot be read or parsed.
pub fn load_events(path: &Path) -> Result<Vec<EventRecord>> {
    parse_events(&read(path)?)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| FeedError::Io {
        source,
        path: path.to_path_buf(),
    })
}
