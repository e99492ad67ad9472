//! Dense pairwise cosine-similarity matrix.
//!
//! Entry (i, j) holds the cosine similarity of sentence vectors i and j
//! for i ≠ j; the diagonal is fixed at 1.0 (each sentence is identical to
//! itself), which becomes a self-loop in the ranking walk. The matrix is
//! symmetric by construction and fully connected, which keeps the
//! centrality computation meaningful even for very short documents.

use rayon::prelude::*;

/// A dense, symmetric similarity matrix over `n` sentence vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    n: usize,
    /// Row-major `n × n` weights
    weights: Vec<f64>,
}

impl SimilarityMatrix {
    /// Build the matrix from sentence vectors.
    ///
    /// Rows are computed in parallel; the result is identical to the
    /// sequential form. Zero-norm vectors (empty cleaned sentences, or an
    /// empty embedding table) get similarity 0.0 to everything else, a
    /// deliberate convention that avoids division by zero. Negative
    /// cosines are clamped to 0.0: a dissimilar sentence carries no
    /// endorsement, and the clamp keeps every edge weight in [0, 1] so
    /// row sums stay positive for the ranking walk.
    pub fn from_vectors(vectors: &[Vec<f32>]) -> Self {
        let n = vectors.len();
        let norms: Vec<f64> = vectors.iter().map(|v| norm(v)).collect();

        let mut weights = vec![0.0f64; n * n];
        weights
            .par_chunks_mut(n.max(1))
            .enumerate()
            .for_each(|(i, row)| {
                for (j, cell) in row.iter_mut().enumerate() {
                    *cell = if i == j {
                        1.0
                    } else if norms[i] == 0.0 || norms[j] == 0.0 {
                        0.0
                    } else {
                        (dot(&vectors[i], &vectors[j]) / (norms[i] * norms[j])).max(0.0)
                    };
                }
            });

        Self { n, weights }
    }

    /// Number of sentences (matrix side length).
    pub fn len(&self) -> usize {
        self.n
    }

    /// Whether the matrix covers zero sentences.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// The weight between sentences `i` and `j`.
    pub fn weight(&self, i: usize, j: usize) -> f64 {
        self.weights[i * self.n + j]
    }

    /// One full row of weights (including the diagonal self-weight).
    pub fn row(&self, i: usize) -> &[f64] {
        &self.weights[i * self.n..(i + 1) * self.n]
    }

    /// Sum of row `i`, the node's total outgoing weight in the walk.
    pub fn row_sum(&self, i: usize) -> f64 {
        self.row(i).iter().sum()
    }

    /// Total similarity of sentence `i` to all other sentences
    /// (row sum excluding the diagonal).
    pub fn total_similarity(&self, i: usize) -> f64 {
        self.row_sum(i) - self.weight(i, i)
    }
}

fn dot(a: &[f32], b: &[f32]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(&x, &y)| f64::from(x) * f64::from(y))
        .sum()
}

fn norm(v: &[f32]) -> f64 {
    dot(v, v).sqrt()
}
