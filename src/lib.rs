//! # sumrank
//!
//! Extractive text summarization using PageRank over an
//! embedding-similarity graph.
//!
//! Given a block of natural-language text, the summarizer selects the most
//! central sentences and reassembles them in original document order:
//!
//! 1. Segment the text into sentences.
//! 2. Clean each sentence (lowercase, strip non-alphabetic characters,
//!    remove stopwords).
//! 3. Embed each cleaned sentence as the mean of its word vectors.
//! 4. Build a dense pairwise cosine-similarity matrix.
//! 5. Rank sentences with PageRank power iteration over that matrix.
//! 6. Emit the top-K sentences, verbatim, in original order.
//!
//! ## Example
//!
//! ```no_run
//! use sumrank::{EmbeddingTable, Summarizer};
//!
//! let table = EmbeddingTable::load_from_path("glove.6B.100d.txt")?;
//! let summarizer = Summarizer::new(table);
//! let result = summarizer.summarize("Some long article text...", 3)?;
//! println!("{}", result.text);
//! # Ok::<(), sumrank::SumRankError>(())
//! ```
//!
//! The embedding table is constructed explicitly and shared read-only, so
//! tests can substitute small synthetic tables. A missing embedding
//! resource degrades to an empty table (uniform ranking), never a crash.

pub mod embeddings;
pub mod errors;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod summarizer;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, SumRankError};
pub use types::{CleanedSentence, Sentence, SummarizerConfig};

// Re-export main functionality
pub use embeddings::{table::EmbeddingTable, vectorizer::SentenceVectorizer};
pub use graph::similarity::SimilarityMatrix;
pub use nlp::{cleaner::SentenceCleaner, segmenter::SentenceSegmenter, stopwords::StopwordFilter};
pub use pagerank::{dense::DensePageRank, PageRankResult};
pub use summarizer::{SummaryResult, Summarizer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
