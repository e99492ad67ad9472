//! Core types shared across pipeline stages.

use serde::{Deserialize, Serialize};

/// A sentence as segmented from the original text.
///
/// `index` is the sentence's 0-based position in the document and is the
/// only identity carried across pipeline stages: every ranked score must
/// be mappable back to this position.
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    /// The original, unmodified sentence text
    pub text: String,
    /// Byte offset of the sentence start in the source text
    pub start: usize,
    /// Byte offset one past the sentence end
    pub end: usize,
    /// 0-based position in the document
    pub index: usize,
}

/// A sentence after cleaning: lowercased, stripped of non-alphabetic
/// characters, stopwords removed.
///
/// May be empty when every token was a stopword or punctuation. Empty
/// cleaned sentences stay in the pipeline (they vectorize to the zero
/// vector) so that indices stay aligned with the original sentence list.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanedSentence {
    /// Remaining lowercase alphabetic tokens
    pub tokens: Vec<String>,
    /// Position of the originating [`Sentence`]
    pub index: usize,
}

impl CleanedSentence {
    /// Whether cleaning removed every token.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Configuration for the summarization pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Stopword language passed to the stopword filter (e.g. `"en"`)
    pub language: String,
    /// PageRank damping factor
    pub damping: f64,
    /// Maximum PageRank iterations
    pub max_iterations: usize,
    /// PageRank convergence threshold (L1 delta)
    pub threshold: f64,
    /// Fail-fast bound on input sentence count; `None` disables the guard
    pub max_input_sentences: Option<usize>,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-6,
            max_input_sentences: None,
        }
    }
}

impl SummarizerConfig {
    /// Set the stopword language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the PageRank damping factor.
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the input-size guard.
    pub fn with_max_input_sentences(mut self, max: usize) -> Self {
        self.max_input_sentences = Some(max);
        self
    }
}
