//! Summary assembly
//!
//! Selects the top-K ranked sentence indices and reassembles them in
//! original document order, using the verbatim (uncleaned) sentence text.

use crate::pagerank::PageRankResult;
use crate::types::Sentence;

/// A selected sentence with its centrality score.
#[derive(Debug, Clone)]
pub struct RankedSentence {
    /// The original sentence
    pub sentence: Sentence,
    /// PageRank score
    pub score: f64,
}

/// The assembled summary.
#[derive(Debug, Clone)]
pub struct SummaryResult {
    /// Selected sentences in ascending original-position order
    pub sentences: Vec<RankedSentence>,
    /// Selected sentences joined with single spaces
    pub text: String,
}

impl SummaryResult {
    /// An empty summary.
    pub fn empty() -> Self {
        Self {
            sentences: Vec::new(),
            text: String::new(),
        }
    }

    /// Number of sentences in the summary.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Whether the summary contains no sentences.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Assemble a summary from ranked sentences.
///
/// `k` is clamped to `[0, sentences.len()]`: `k = 0` yields an empty
/// summary and `k >= N` yields every sentence. Selection takes the `k`
/// highest scores with ties broken toward the lower original position;
/// the selected indices are then re-sorted ascending so the output reads
/// in document order. Pure function, no I/O.
pub fn assemble(sentences: &[Sentence], ranking: &PageRankResult, k: usize) -> SummaryResult {
    let k = k.min(sentences.len());
    if k == 0 {
        return SummaryResult::empty();
    }

    let mut selected = ranking.top_n(k);
    selected.sort_by_key(|(index, _)| *index);

    let ranked: Vec<RankedSentence> = selected
        .into_iter()
        .map(|(index, score)| RankedSentence {
            sentence: sentences[index].clone(),
            score,
        })
        .collect();

    let text = ranked
        .iter()
        .map(|r| r.sentence.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    SummaryResult {
        sentences: ranked,
        text,
    }
}
