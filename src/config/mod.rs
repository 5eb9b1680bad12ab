// src/config/mod.rs
pub mod types;

pub use self::types::{
    Config, InteractionConfig, InteractionWeights, RankConfig, RankerConfig, ScoringConfig,
    WeightProfile,
};

use crate::error::{FeedError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Name of the local configuration file.
pub const CONFIG_FILE: &str = "fypgraph.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Genre-aware coefficients with the affinity boost enabled.
    #[must_use]
    pub fn genre_aware() -> Self {
        Self::default()
    }

    /// Plain coefficients; ranking ignores genre affinity.
    #[must_use]
    pub fn simple() -> Self {
        let mut config = Self::default();
        config.interaction.profile = WeightProfile::Simple;
        config.ranker.genre_boost = false;
        config
    }

    /// Loads `fypgraph.toml` from the working directory, or defaults when absent.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read, parsed or validated.
    pub fn load() -> Result<Self> {
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            Self::load_from(path)
        } else {
            debug!("no {CONFIG_FILE} found, using defaults");
            Ok(Self::default())
        }
    }

    /// Loads and validates a configuration file.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed or validated.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| FeedError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        let config = Self::parse_toml(&content)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parses and validates TOML text.
    ///
    /// # Errors
    /// Returns error on malformed TOML or out-of-range values.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Renders the configuration as TOML.
    ///
    /// # Errors
    /// Returns error if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| FeedError::invalid(e.to_string()))
    }

    /// Saves the configuration to `fypgraph.toml` in the working directory.
    ///
    /// # Errors
    /// Returns error if serialization or the file write fails.
    pub fn save(&self) -> Result<()> {
        self.save_to(Path::new(CONFIG_FILE))
    }

    /// # Errors
    /// Returns error if serialization or the file write fails.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = self.to_toml_string()?;
        fs::write(path, content).map_err(|source| FeedError::Io {
            source,
            path: path.to_path_buf(),
        })
    }

    /// Validates numeric ranges.
    ///
    /// # Errors
    /// Returns `InvalidInput` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let rank = &self.rank;
        if !(rank.damping > 0.0 && rank.damping < 1.0) {
            return Err(FeedError::invalid(format!(
                "rank.damping must be in (0, 1) (got {})",
                rank.damping
            )));
        }
        if !(rank.tolerance > 0.0) || !rank.tolerance.is_finite() {
            return Err(FeedError::invalid("rank.tolerance must be positive"));
        }
        if rank.max_iterations == 0 {
            return Err(FeedError::invalid("rank.max_iterations must be at least 1"));
        }
        if !(self.ranker.genre_boost_divisor > 0.0) || !self.ranker.genre_boost_divisor.is_finite() {
            return Err(FeedError::invalid("ranker.genre_boost_divisor must be positive"));
        }
        if self.ranker.default_top_k == 0 {
            return Err(FeedError::invalid("ranker.default_top_k must be at least 1"));
        }

        let s = &self.scoring;
        check_coefficients("scoring", &[s.viewers, s.likes, s.comments, s.shares, s.saves])?;
        let w = self.interaction.weights();
        check_coefficients("interaction", &[w.like, w.comment, w.share, w.save, w.full_watch])
    }
}

fn check_coefficients(section: &str, values: &[f64]) -> Result<()> {
    if values.iter().all(|v| v.is_finite() && *v >= 0.0) {
        Ok(())
    } else {
        Err(FeedError::invalid(format!(
            "{section} coefficients must be finite and non-negative"
        )))
    }
}
