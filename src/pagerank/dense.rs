//! PageRank power iteration over a dense similarity matrix.
//!
//! The similarity graph is always complete, so the transition matrix is
//! derived directly from matrix rows: node i distributes its score across
//! row i in proportion to edge weight, including the diagonal self-weight
//! (matching a graph built from a matrix with 1.0 on the diagonal). No
//! sparse graph abstraction is needed.

use super::PageRankResult;
use crate::graph::similarity::SimilarityMatrix;

/// Dense PageRank implementation
#[derive(Debug, Clone)]
pub struct DensePageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold (L1 delta between iterations)
    pub threshold: f64,
}

impl Default for DensePageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-6,
        }
    }
}

impl DensePageRank {
    /// Create a ranker with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Run PageRank over the similarity matrix.
    ///
    /// Returns the result even if convergence wasn't achieved, with
    /// `converged = false`. Scores are normalized to sum to 1 and every
    /// score is finite and non-negative; a single-sentence document
    /// trivially scores 1.0.
    pub fn run(&self, matrix: &SimilarityMatrix) -> PageRankResult {
        let n = matrix.len();
        if n == 0 {
            return PageRankResult::new(vec![], 0, 0.0, true);
        }

        let row_sums: Vec<f64> = (0..n).map(|i| matrix.row_sum(i)).collect();

        let initial_score = 1.0 / n as f64;
        let mut scores = vec![initial_score; n];
        let mut new_scores = vec![0.0; n];

        let teleport = (1.0 - self.damping) / n as f64;
        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta > self.threshold {
            iterations += 1;

            new_scores.fill(teleport);

            // No dangling nodes: edge weights are clamped to [0, 1] and
            // every row carries its diagonal self-weight of 1.0, so row
            // sums are always >= 1.
            for (i, &score) in scores.iter().enumerate() {
                let outflow = self.damping * score / row_sums[i];
                for (j, &weight) in matrix.row(i).iter().enumerate() {
                    if weight != 0.0 {
                        new_scores[j] += outflow * weight;
                    }
                }
            }

            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut new_scores);
        }

        // Normalize for numerical stability; the sum is already ~1.
        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            for score in &mut scores {
                *score /= sum;
            }
        }

        PageRankResult::new(scores, iterations, delta, delta <= self.threshold)
    }
}
