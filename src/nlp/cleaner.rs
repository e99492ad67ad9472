//! Sentence cleaning
//!
//! Normalizes a segmented sentence for vectorization: lowercase, every
//! maximal run of non-alphabetic characters collapsed to a single space,
//! tokenized on whitespace, stopwords dropped. Cleaning is a pure function
//! of the sentence and the stopword set.

use crate::nlp::stopwords::StopwordFilter;
use crate::types::{CleanedSentence, Sentence};

/// Cleans sentences for embedding lookup.
#[derive(Debug, Clone)]
pub struct SentenceCleaner {
    stopwords: StopwordFilter,
}

impl Default for SentenceCleaner {
    fn default() -> Self {
        Self::new(StopwordFilter::default())
    }
}

impl SentenceCleaner {
    /// Create a cleaner using the given stopword filter.
    pub fn new(stopwords: StopwordFilter) -> Self {
        Self { stopwords }
    }

    /// Clean one sentence, preserving its document position.
    ///
    /// The result may have zero tokens (a sentence of only stopwords and
    /// punctuation); such sentences stay in the pipeline so downstream
    /// indices keep matching the original sentence list.
    pub fn clean(&self, sentence: &Sentence) -> CleanedSentence {
        let mut normalized = String::with_capacity(sentence.text.len());
        let mut last_was_space = true;
        for ch in sentence.text.chars() {
            if ch.is_alphabetic() {
                normalized.extend(ch.to_lowercase());
                last_was_space = false;
            } else if !last_was_space {
                normalized.push(' ');
                last_was_space = true;
            }
        }

        let tokens = normalized
            .split_whitespace()
            .filter(|token| !self.stopwords.is_stopword(token))
            .map(str::to_string)
            .collect();

        CleanedSentence {
            tokens,
            index: sentence.index,
        }
    }

    /// Clean a batch of sentences, preserving order.
    pub fn clean_all(&self, sentences: &[Sentence]) -> Vec<CleanedSentence> {
        sentences.iter().map(|s| self.clean(s)).collect()
    }
}
