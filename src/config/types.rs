use serde::{Deserialize, Serialize};

/// Coefficients of the initial popularity score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default = "default_viewers")]
    pub viewers: f64,
    #[serde(default = "default_half")]
    pub likes: f64,
    #[serde(default = "default_quarter")]
    pub comments: f64,
    #[serde(default = "default_half")]
    pub shares: f64,
    #[serde(default = "default_quarter")]
    pub saves: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            viewers: default_viewers(),
            likes: default_half(),
            comments: default_quarter(),
            shares: default_half(),
            saves: default_quarter(),
        }
    }
}

const fn default_viewers() -> f64 { 0.125 }
const fn default_half() -> f64 { 0.5 }
const fn default_quarter() -> f64 { 0.25 }

/// Per-event coefficients of the interaction weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractionWeights {
    #[serde(default = "default_like")]
    pub like: f64,
    #[serde(default = "default_one")]
    pub comment: f64,
    #[serde(default = "default_share")]
    pub share: f64,
    #[serde(default = "default_like")]
    pub save: f64,
    #[serde(default = "default_one")]
    pub full_watch: f64,
}

impl InteractionWeights {
    /// Coefficients used together with the genre affinity boost.
    pub const GENRE_AWARE: Self = Self {
        like: 1.5,
        comment: 1.0,
        share: 1.25,
        save: 1.5,
        full_watch: 1.0,
    };

    /// Coefficients of the plain variant without genre personalization.
    pub const SIMPLE: Self = Self {
        like: 1.5,
        comment: 2.0,
        share: 3.0,
        save: 2.5,
        full_watch: 1.25,
    };
}

impl Default for InteractionWeights {
    fn default() -> Self {
        Self::GENRE_AWARE
    }
}

const fn default_like() -> f64 { 1.5 }
const fn default_one() -> f64 { 1.0 }
const fn default_share() -> f64 { 1.25 }

/// Named coefficient table selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightProfile {
    #[default]
    GenreAware,
    Simple,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractionConfig {
    #[serde(default)]
    pub profile: WeightProfile,
    /// Only read when `profile = "custom"`.
    #[serde(default)]
    pub custom: InteractionWeights,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            profile: WeightProfile::GenreAware,
            custom: InteractionWeights::GENRE_AWARE,
        }
    }
}

impl InteractionConfig {
    /// Resolves the active coefficient table.
    #[must_use]
    pub fn weights(&self) -> InteractionWeights {
        match self.profile {
            WeightProfile::GenreAware => InteractionWeights::GENRE_AWARE,
            WeightProfile::Simple => InteractionWeights::SIMPLE,
            WeightProfile::Custom => self.custom,
        }
    }
}

/// Power iteration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
    #[serde(default = "default_damping")]
    pub damping: f64,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
        }
    }
}

const fn default_damping() -> f64 { 0.85 }
const fn default_tolerance() -> f64 { 1.0e-6 }
const fn default_max_iterations() -> usize { 100 }

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankerConfig {
    /// Accumulated genre affinity is divided by this before boosting.
    #[serde(default = "default_boost_divisor")]
    pub genre_boost_divisor: f64,
    /// When false the key is the bare rank score.
    #[serde(default = "default_true")]
    pub genre_boost: bool,
    #[serde(default = "default_top_k")]
    pub default_top_k: usize,
    /// Adds recommendation edges for visualization.
    #[serde(default = "default_true")]
    pub annotate_recommendations: bool,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            genre_boost_divisor: default_boost_divisor(),
            genre_boost: true,
            default_top_k: default_top_k(),
            annotate_recommendations: true,
        }
    }
}

const fn default_true() -> bool { true }
const fn default_boost_divisor() -> f64 { 10.0 }
const fn default_top_k() -> usize { 5 }

/// On-disk layout of `fypgraph.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub interaction: InteractionConfig,
    #[serde(default)]
    pub rank: RankConfig,
    #[serde(default)]
    pub ranker: RankerConfig,
}
