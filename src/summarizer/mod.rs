//! Extractive summarization
//!
//! The [`Summarizer`] facade wires the pipeline stages together:
//! segmentation → cleaning → vectorization → similarity matrix →
//! PageRank → assembly. Every stage is pure; the embedding table is the
//! only shared state and is read-only, so one `Summarizer` can serve
//! concurrent callers.

pub mod assembler;

use tracing::debug;

use crate::embeddings::table::EmbeddingTable;
use crate::embeddings::vectorizer::SentenceVectorizer;
use crate::errors::{Result, SumRankError};
use crate::graph::similarity::SimilarityMatrix;
use crate::nlp::cleaner::SentenceCleaner;
use crate::nlp::segmenter::SentenceSegmenter;
use crate::nlp::stopwords::StopwordFilter;
use crate::pagerank::dense::DensePageRank;
use crate::types::SummarizerConfig;

pub use assembler::{RankedSentence, SummaryResult};

/// Default summary length in sentences.
pub const DEFAULT_SUMMARY_SENTENCES: usize = 5;

/// Extractive summarizer over a shared embedding table.
#[derive(Debug)]
pub struct Summarizer {
    table: EmbeddingTable,
    segmenter: SentenceSegmenter,
    cleaner: SentenceCleaner,
    ranker: DensePageRank,
    max_input_sentences: Option<usize>,
}

impl Summarizer {
    /// Create a summarizer with the default configuration.
    pub fn new(table: EmbeddingTable) -> Self {
        Self::with_config(table, SummarizerConfig::default())
    }

    /// Create a summarizer with an explicit configuration.
    pub fn with_config(table: EmbeddingTable, config: SummarizerConfig) -> Self {
        let cleaner = SentenceCleaner::new(StopwordFilter::new(&config.language));
        let ranker = DensePageRank::new()
            .with_damping(config.damping)
            .with_max_iterations(config.max_iterations)
            .with_threshold(config.threshold);
        Self {
            table,
            segmenter: SentenceSegmenter::new(),
            cleaner,
            ranker,
            max_input_sentences: config.max_input_sentences,
        }
    }

    /// Replace the stopword filter (e.g. with a custom list for tests).
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.cleaner = SentenceCleaner::new(stopwords);
        self
    }

    /// Replace the sentence segmenter.
    pub fn with_segmenter(mut self, segmenter: SentenceSegmenter) -> Self {
        self.segmenter = segmenter;
        self
    }

    /// Summarize with the default summary length.
    pub fn summarize_default(&self, text: &str) -> Result<SummaryResult> {
        self.summarize(text, DEFAULT_SUMMARY_SENTENCES)
    }

    /// Summarize `text` into at most `n_of_sentences` sentences.
    ///
    /// The summary holds `min(n_of_sentences, N)` sentences in original
    /// document order, where N is the document's sentence count.
    /// Degenerate inputs are well-defined: empty text yields an empty
    /// summary, a single sentence is returned as-is for any
    /// `n_of_sentences >= 1`, and all-stopword sentences participate with
    /// zero similarity instead of faulting.
    pub fn summarize(&self, text: &str, n_of_sentences: usize) -> Result<SummaryResult> {
        let sentences = self.segmenter.segment(text);
        if let Some(max) = self.max_input_sentences {
            if sentences.len() > max {
                return Err(SumRankError::TooManySentences {
                    count: sentences.len(),
                    max,
                });
            }
        }
        if sentences.is_empty() {
            return Ok(SummaryResult::empty());
        }

        let cleaned = self.cleaner.clean_all(&sentences);
        let vectors = SentenceVectorizer::new(&self.table).vectorize_all(&cleaned);
        let matrix = SimilarityMatrix::from_vectors(&vectors);
        let ranking = self.ranker.run(&matrix);

        debug!(
            sentences = sentences.len(),
            iterations = ranking.iterations,
            converged = ranking.converged,
            "ranked sentences"
        );

        Ok(assembler::assemble(&sentences, &ranking, n_of_sentences))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animal_finance_table() -> EmbeddingTable {
        // Two topical clusters: animals near [1, 0], finance near [0, 1].
        EmbeddingTable::from_pairs([
            ("cats", vec![1.0, 0.0]),
            ("dogs", vec![0.95, 0.05]),
            ("mammals", vec![0.9, 0.0]),
            ("stock", vec![0.0, 1.0]),
            ("market", vec![0.05, 0.95]),
            ("fell", vec![0.0, 0.8]),
            ("investors", vec![0.0, 0.9]),
            ("worried", vec![0.1, 0.85]),
            ("economy", vec![0.0, 1.0]),
        ])
    }

    fn summarizer() -> Summarizer {
        Summarizer::new(animal_finance_table())
            .with_stopwords(StopwordFilter::from_list(&["the", "are", "too", "about", "today"]))
    }

    #[test]
    fn test_summary_length_is_min_of_k_and_n() {
        let s = summarizer();
        let text = "Cats are mammals. Dogs are mammals too. The stock market fell today.";
        assert_eq!(s.summarize(text, 2).unwrap().len(), 2);
        assert_eq!(s.summarize(text, 10).unwrap().len(), 3);
        assert_eq!(s.summarize(text, 0).unwrap().len(), 0);
    }

    #[test]
    fn test_single_sentence_identity() {
        let s = summarizer();
        for k in [1, 3, 100] {
            let result = s.summarize("Cats are mammals.", k).unwrap();
            assert_eq!(result.text, "Cats are mammals.");
        }
    }

    #[test]
    fn test_empty_text() {
        let s = summarizer();
        let result = s.summarize("", 3).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_input_size_guard() {
        let config = SummarizerConfig::default().with_max_input_sentences(2);
        let s = Summarizer::with_config(animal_finance_table(), config);
        let err = s
            .summarize("One here. Two here. Three here.", 2)
            .unwrap_err();
        match err {
            SumRankError::TooManySentences { count, max } => {
                assert_eq!(count, 3);
                assert_eq!(max, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_all_stopword_sentence_does_not_fault() {
        let s = summarizer();
        let text = "Cats are mammals. The, are; too. Dogs are mammals too.";
        let result = s.summarize(text, 3).unwrap();
        assert_eq!(result.len(), 3);
        for ranked in &result.sentences {
            assert!(ranked.score.is_finite());
        }
    }

    #[test]
    fn test_empty_table_falls_back_to_document_order() {
        let s = Summarizer::new(EmbeddingTable::empty());
        let text = "Alpha is first. Beta is second. Gamma is third. Delta is fourth.";
        let result = s.summarize(text, 2).unwrap();
        // Uniform scores; position tie-break selects the earliest sentences.
        assert_eq!(result.text, "Alpha is first. Beta is second.");
    }

    #[test]
    fn test_determinism() {
        let s = summarizer();
        let text = "Cats are mammals. Dogs are mammals too. The stock market fell today. \
                    Investors are worried about the economy.";
        let a = s.summarize(text, 2).unwrap();
        let b = s.summarize(text, 2).unwrap();
        assert_eq!(a.text, b.text);
    }

    #[test]
    fn test_custom_segmenter_abbreviations() {
        let s = summarizer().with_segmenter(SentenceSegmenter::new().with_abbreviations(&["ca"]));
        let result = s
            .summarize("Built ca. 1900 by masons. Cats are mammals.", 10)
            .unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result.sentences[0].sentence.text, "Built ca. 1900 by masons.");
    }

    #[test]
    fn test_default_summary_length() {
        let s = summarizer();
        let text = "Cats are mammals. Dogs are mammals too. The stock market fell today. \
                    Investors are worried about the economy. Cats purr loudly. Dogs bark loudly.";
        let result = s.summarize_default(text).unwrap();
        assert_eq!(result.len(), DEFAULT_SUMMARY_SENTENCES);
    }
}
