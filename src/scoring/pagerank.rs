// src/scoring/pagerank.rs
//! Personalized, weight-aware `PageRank` by power iteration.
//!
//! Nodes are dense indices `0..n`, each carrying its weighted out-edges. A
//! node whose positive out-weight sums to zero is dangling: its mass is handed
//! back through the personalization vector so the total stays at 1.

use serde::Serialize;

use crate::config::RankConfig;

/// How the personalization vector was formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Personalization {
    /// Proportional to initial scores.
    Weighted,
    /// Every seed scored zero, so each seed got an equal share.
    Uniform,
}

/// Output of one power iteration run.
#[derive(Debug, Clone)]
pub struct Stationary {
    pub scores: Vec<f64>,
    pub iterations: usize,
    pub converged: bool,
    /// L1 change of the final pass.
    pub delta: f64,
}

/// Summary of a recalculation pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankReport {
    pub iterations: usize,
    pub converged: bool,
    pub delta: f64,
    pub personalization: Personalization,
    pub video_mass: f64,
    pub user_mass: f64,
}

/// Builds a personalization vector over `n` nodes where the first
/// `seeds.len()` nodes receive their normalized seed and the rest receive zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn build_personalization(seeds: &[f64], n: usize) -> (Vec<f64>, Personalization) {
    let mut vector = vec![0.0; n];
    if seeds.is_empty() || n == 0 {
        if n > 0 {
            vector.fill(1.0 / n as f64);
        }
        return (vector, Personalization::Uniform);
    }

    let clean = |s: f64| if s.is_finite() && s > 0.0 { s } else { 0.0 };
    let total: f64 = seeds.iter().copied().map(clean).sum();

    if total > 0.0 {
        for (slot, seed) in vector.iter_mut().zip(seeds) {
            *slot = clean(*seed) / total;
        }
        (vector, Personalization::Weighted)
    } else {
        let share = 1.0 / seeds.len() as f64;
        for slot in vector.iter_mut().take(seeds.len()) {
            *slot = share;
        }
        (vector, Personalization::Uniform)
    }
}

/// Runs power iteration until the L1 change drops below `n * tolerance` or the
/// iteration cap is hit. The last estimate is returned either way.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn compute(
    adjacency: &[Vec<(usize, f64)>],
    personalization: &[f64],
    config: &RankConfig,
) -> Stationary {
    let n = personalization.len();
    debug_assert_eq!(adjacency.len(), n);
    if n == 0 {
        return Stationary {
            scores: Vec::new(),
            iterations: 0,
            converged: true,
            delta: 0.0,
        };
    }

    let out_weights = out_weight_sums(adjacency);
    let threshold = n as f64 * config.tolerance;
    let mut ranks = initialize_ranks(n);
    let mut delta = f64::INFINITY;

    for iteration in 1..=config.max_iterations {
        let next = iterate_once(&ranks, adjacency, &out_weights, personalization, config.damping);
        delta = l1_distance(&next, &ranks);
        ranks = next;
        if delta < threshold {
            return Stationary {
                scores: ranks,
                iterations: iteration,
                converged: true,
                delta,
            };
        }
    }

    Stationary {
        scores: ranks,
        iterations: config.max_iterations,
        converged: false,
        delta,
    }
}

#[allow(clippy::cast_precision_loss)]
fn initialize_ranks(n: usize) -> Vec<f64> {
    vec![1.0 / n as f64; n]
}

fn out_weight_sums(adjacency: &[Vec<(usize, f64)>]) -> Vec<f64> {
    adjacency
        .iter()
        .map(|edges| edges.iter().map(|&(_, w)| positive(w)).sum())
        .collect()
}

fn iterate_once(
    ranks: &[f64],
    adjacency: &[Vec<(usize, f64)>],
    out_weights: &[f64],
    personalization: &[f64],
    damping: f64,
) -> Vec<f64> {
    let dangling: f64 = ranks
        .iter()
        .zip(out_weights)
        .filter(|(_, &out)| out <= 0.0)
        .map(|(rank, _)| rank)
        .sum();
    let redistributed = damping * dangling + (1.0 - damping);

    let mut next: Vec<f64> = personalization.iter().map(|p| redistributed * p).collect();

    for ((edges, &out), &rank) in adjacency.iter().zip(out_weights).zip(ranks) {
        if out <= 0.0 {
            continue;
        }
        let flow = damping * rank / out;
        for &(target, weight) in edges {
            if let Some(slot) = next.get_mut(target) {
                *slot += flow * positive(weight);
            }
        }
    }

    next
}

fn positive(w: f64) -> f64 {
    if w.is_finite() && w > 0.0 {
        w
    } else {
        0.0
    }
}

fn l1_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn config() -> RankConfig {
        RankConfig::default()
    }

    #[test]
    fn empty_graph_converges_trivially() {
        let result = compute(&[], &[], &config());
        assert!(result.converged);
        assert!(result.scores.is_empty());
    }

    #[test]
    fn zero_seeds_fall_back_to_uniform() {
        let (vector, kind) = build_personalization(&[0.0, 0.0], 3);
        assert_eq!(kind, Personalization::Uniform);
        assert!((vector[0] - 0.5).abs() < EPS);
        assert!((vector[1] - 0.5).abs() < EPS);
        assert!(vector[2].abs() < EPS);
    }

    #[test]
    fn seeds_are_normalized() {
        let (vector, kind) = build_personalization(&[3.0, 1.0], 3);
        assert_eq!(kind, Personalization::Weighted);
        assert!((vector[0] - 0.75).abs() < EPS);
        assert!((vector[1] - 0.25).abs() < EPS);
        assert!(vector[2].abs() < EPS);
    }

    #[test]
    fn all_dangling_returns_personalization() {
        let adjacency = vec![Vec::new(), Vec::new()];
        let result = compute(&adjacency, &[0.8, 0.2], &config());
        assert!(result.converged);
        assert!((result.scores[0] - 0.8).abs() < 1e-6);
        assert!((result.scores[1] - 0.2).abs() < 1e-6);
    }

    #[test]
    fn mass_is_conserved_with_dangling_nodes() {
        // node 2 links to both videos, videos are dangling
        let adjacency = vec![Vec::new(), Vec::new(), vec![(0, 3.0), (1, 1.0)]];
        let result = compute(&adjacency, &[0.4, 0.4, 0.2], &config());
        let total: f64 = result.scores.iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert!(result.scores[0] > result.scores[1]);
    }

    #[test]
    fn zero_weight_edges_count_as_dangling() {
        let adjacency = vec![Vec::new(), vec![(0, 0.0)]];
        let result = compute(&adjacency, &[1.0, 0.0], &config());
        let total: f64 = result.scores.iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn iteration_cap_returns_best_effort() {
        let capped = RankConfig {
            max_iterations: 1,
            tolerance: 1e-15,
            ..RankConfig::default()
        };
        let adjacency = vec![vec![(1, 1.0)], vec![(0, 1.0)], vec![(0, 1.0)]];
        let result = compute(&adjacency, &[0.9, 0.1, 0.0], &capped);
        assert!(!result.converged);
        assert_eq!(result.iterations, 1);
        let total: f64 = result.scores.iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
    }
}
