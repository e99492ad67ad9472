//! Sentence boundary detection
//!
//! Rule-based segmentation of raw text into [`Sentence`]s. A naive split
//! on `.` would break on abbreviations, initials, decimal numbers, and
//! ellipses, so the segmenter only treats a terminator as a boundary when
//! the surrounding context supports it:
//!
//! - the terminator must be followed by whitespace (rules out `3.14`,
//!   `e.g.`'s internal dot, URLs),
//! - the next non-whitespace character must not be lowercase,
//! - a lone `.` is suppressed when the preceding word is a known
//!   abbreviation (`Mr.`, `Dr.`, `etc.`) or a single-letter initial,
//! - runs of terminators (`...`, `?!`) are consumed as one boundary, as
//!   are trailing closing quotes and brackets.

use rustc_hash::FxHashSet;

use crate::types::Sentence;

/// Abbreviations whose trailing period does not end a sentence.
/// Stored lowercase, without the final period.
const DEFAULT_ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "e.g", "i.e", "cf", "fig",
    "al", "inc", "ltd", "co", "corp", "no", "dept", "est", "approx", "min", "max", "mt", "gen",
    "rep", "sen", "gov", "capt", "col", "lt", "sgt", "ave", "blvd", "rd", "jan", "feb", "mar",
    "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "a.m", "p.m", "u.s", "u.k",
    "ph.d",
];

/// Characters that may close a sentence after its terminator.
const CLOSERS: &[char] = &['"', '\'', ')', ']', '\u{2019}', '\u{201d}'];

/// Rule-based sentence segmenter.
#[derive(Debug, Clone)]
pub struct SentenceSegmenter {
    abbreviations: FxHashSet<String>,
}

impl Default for SentenceSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceSegmenter {
    /// Create a segmenter with the default abbreviation set.
    pub fn new() -> Self {
        Self {
            abbreviations: DEFAULT_ABBREVIATIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Add custom abbreviations (lowercase, without the trailing period).
    pub fn with_abbreviations(mut self, extra: &[&str]) -> Self {
        for abbr in extra {
            self.abbreviations.insert(abbr.to_lowercase());
        }
        self
    }

    /// Split text into sentences with byte offsets and document positions.
    ///
    /// Whitespace-only spans are never emitted; offsets refer to the
    /// trimmed sentence text within the original input.
    pub fn segment(&self, text: &str) -> Vec<Sentence> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut sentences = Vec::new();
        let mut span_start = 0usize;

        let mut i = 0;
        while i < chars.len() {
            let (byte_idx, ch) = chars[i];
            if !is_terminator(ch) {
                i += 1;
                continue;
            }

            // Consume the full terminator run ("...", "?!", "!!!").
            let run_start = i;
            while i + 1 < chars.len() && is_terminator(chars[i + 1].1) {
                i += 1;
            }
            let single_period = i == run_start && ch == '.';

            // Trailing quotes/brackets belong to the closing sentence.
            while i + 1 < chars.len() && CLOSERS.contains(&chars[i + 1].1) {
                i += 1;
            }

            let end_byte = chars[i].0 + chars[i].1.len_utf8();

            if self.is_boundary(text, &chars, i, byte_idx, single_period) {
                push_trimmed(&mut sentences, text, span_start, end_byte);
                span_start = end_byte;
            }
            i += 1;
        }

        push_trimmed(&mut sentences, text, span_start, text.len());
        sentences
    }

    /// Decide whether the terminator run ending at `chars[last]` closes a
    /// sentence. `period_byte` is the byte index of the run's first char.
    fn is_boundary(
        &self,
        text: &str,
        chars: &[(usize, char)],
        last: usize,
        period_byte: usize,
        single_period: bool,
    ) -> bool {
        // End of input always closes.
        let Some(&(_, next)) = chars.get(last + 1) else {
            return true;
        };

        // Mid-token punctuation (decimals, e.g.'s inner dot, URLs).
        if !next.is_whitespace() {
            return false;
        }

        // A continuation that starts lowercase keeps the sentence open.
        if let Some(follow) = chars[last + 1..].iter().find(|(_, c)| !c.is_whitespace()) {
            if follow.1.is_lowercase() {
                return false;
            }
        }

        if single_period {
            let word = preceding_word(text, period_byte);
            if !word.is_empty() {
                let lower = word.to_lowercase();
                if self.abbreviations.contains(lower.trim_matches('.')) {
                    return false;
                }
                // Single-letter initials: "J. Smith"
                let mut letters = word.chars().filter(|c| *c != '.');
                if let (Some(first), None) = (letters.next(), letters.next()) {
                    if first.is_uppercase() {
                        return false;
                    }
                }
            }
        }

        true
    }
}

/// Check for a sentence-terminating character.
fn is_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

/// The word immediately before byte index `end`, including internal
/// periods ("e.g" before the final dot of "e.g.").
fn preceding_word(text: &str, end: usize) -> &str {
    let before = &text[..end];
    let start = before
        .rfind(|c: char| !c.is_alphabetic() && c != '.')
        .map(|p| p + before[p..].chars().next().map_or(1, char::len_utf8))
        .unwrap_or(0);
    before[start..].trim_start_matches('.')
}

/// Push the trimmed span `[start, end)` as a sentence, if non-empty.
fn push_trimmed(sentences: &mut Vec<Sentence>, text: &str, start: usize, end: usize) {
    let raw = &text[start..end];
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return;
    }
    let lead = raw.len() - raw.trim_start().len();
    let trail = raw.len() - raw.trim_end().len();
    sentences.push(Sentence {
        text: trimmed.to_string(),
        start: start + lead,
        end: end - trail,
        index: sentences.len(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(sentences: &[Sentence]) -> Vec<&str> {
        sentences.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_simple_split() {
        let seg = SentenceSegmenter::new();
        let out = seg.segment("Cats are mammals. Dogs are mammals too.");
        assert_eq!(
            texts(&out),
            vec!["Cats are mammals.", "Dogs are mammals too."]
        );
        assert_eq!(out[0].index, 0);
        assert_eq!(out[1].index, 1);
    }

    #[test]
    fn test_abbreviations_do_not_split() {
        let seg = SentenceSegmenter::new();
        let out = seg.segment("Dr. Smith arrived early. Mr. Jones did not.");
        assert_eq!(
            texts(&out),
            vec!["Dr. Smith arrived early.", "Mr. Jones did not."]
        );
    }

    #[test]
    fn test_latin_abbreviations() {
        let seg = SentenceSegmenter::new();
        let out = seg.segment("Use embeddings, e.g. GloVe vectors. They work well.");
        assert_eq!(out.len(), 2);
        assert!(out[0].text.contains("e.g. GloVe"));
    }

    #[test]
    fn test_initials_do_not_split() {
        let seg = SentenceSegmenter::new();
        let out = seg.segment("The paper by J. Smith was cited. It remains influential.");
        assert_eq!(out.len(), 2);
        assert!(out[0].text.contains("J. Smith"));
    }

    #[test]
    fn test_decimal_numbers_do_not_split() {
        let seg = SentenceSegmenter::new();
        let out = seg.segment("The index rose 3.5 percent today. Analysts were surprised.");
        assert_eq!(out.len(), 2);
        assert!(out[0].text.contains("3.5 percent"));
    }

    #[test]
    fn test_ellipsis_before_capital_splits() {
        let seg = SentenceSegmenter::new();
        let out = seg.segment("He paused... Then he left.");
        assert_eq!(texts(&out), vec!["He paused...", "Then he left."]);
    }

    #[test]
    fn test_ellipsis_before_lowercase_does_not_split() {
        let seg = SentenceSegmenter::new();
        let out = seg.segment("He paused... and then he left.");
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_question_and_exclamation() {
        let seg = SentenceSegmenter::new();
        let out = seg.segment("Really?! Yes. Amazing!");
        assert_eq!(texts(&out), vec!["Really?!", "Yes.", "Amazing!"]);
    }

    #[test]
    fn test_closing_quote_stays_with_sentence() {
        let seg = SentenceSegmenter::new();
        let out = seg.segment("She said \"stop.\" He stopped.");
        assert_eq!(texts(&out), vec!["She said \"stop.\"", "He stopped."]);
    }

    #[test]
    fn test_no_trailing_terminator() {
        let seg = SentenceSegmenter::new();
        let out = seg.segment("First sentence. Second without a period");
        assert_eq!(
            texts(&out),
            vec!["First sentence.", "Second without a period"]
        );
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        let seg = SentenceSegmenter::new();
        assert!(seg.segment("").is_empty());
        assert!(seg.segment("   \n\t ").is_empty());
    }

    #[test]
    fn test_byte_offsets_roundtrip() {
        let seg = SentenceSegmenter::new();
        let text = "One here.  Two there.";
        let out = seg.segment(text);
        for sentence in &out {
            assert_eq!(&text[sentence.start..sentence.end], sentence.text);
        }
    }

    #[test]
    fn test_custom_abbreviation() {
        let seg = SentenceSegmenter::new().with_abbreviations(&["ca"]);
        let out = seg.segment("Built ca. 1900 by masons. It still stands.");
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_indices_are_sequential() {
        let seg = SentenceSegmenter::new();
        let out = seg.segment("A first one. A second one. A third one.");
        let indices: Vec<usize> = out.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }
}
