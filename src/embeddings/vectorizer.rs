//! Sentence vectorization
//!
//! Maps a cleaned sentence to a fixed-dimension vector: the sum of the
//! embedding vectors of its tokens that appear in the table, divided by
//! the total cleaned-token count. Tokens absent from the table contribute
//! zero, so out-of-vocabulary words dilute the mean rather than skewing it.

use crate::embeddings::table::EmbeddingTable;
use crate::types::CleanedSentence;

/// Vectorizes cleaned sentences against a shared embedding table.
#[derive(Debug, Clone, Copy)]
pub struct SentenceVectorizer<'a> {
    table: &'a EmbeddingTable,
}

impl<'a> SentenceVectorizer<'a> {
    /// Create a vectorizer borrowing the given table.
    pub fn new(table: &'a EmbeddingTable) -> Self {
        Self { table }
    }

    /// Compute the sentence vector.
    ///
    /// A sentence with zero cleaned tokens yields the zero vector rather
    /// than a divide-by-zero fault; it stays in the similarity graph with
    /// similarity 0 to every other sentence. An empty table likewise
    /// yields zero vectors for everything.
    pub fn vectorize(&self, sentence: &CleanedSentence) -> Vec<f32> {
        let dim = self.table.dimension();
        let mut sum = vec![0.0f32; dim];

        if sentence.tokens.is_empty() || dim == 0 {
            return sum;
        }

        for token in &sentence.tokens {
            if let Some(vec) = self.table.get(token) {
                for (acc, &component) in sum.iter_mut().zip(vec) {
                    *acc += component;
                }
            }
        }

        // Divide by the cleaned-token count, not the count found in the
        // table: unknown words pull the mean toward zero.
        let count = sentence.tokens.len() as f32;
        for component in &mut sum {
            *component /= count;
        }
        sum
    }

    /// Vectorize a batch of cleaned sentences, preserving order.
    pub fn vectorize_all(&self, sentences: &[CleanedSentence]) -> Vec<Vec<f32>> {
        sentences.iter().map(|s| self.vectorize(s)).collect()
    }
}
