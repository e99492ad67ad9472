//! Word-vector table loaded from a plain-text embedding resource.
//!
//! The resource format is one token per line: the token followed by its
//! vector components, whitespace-separated (the GloVe text format). An
//! absent resource is a recoverable condition — the loader returns an
//! empty table and logs a notice, and downstream stages degrade to
//! uniform ranking rather than failing.

use std::io::{BufRead, BufReader};
use std::path::Path;

use rustc_hash::FxHashMap;
use tracing::warn;

use crate::errors::{Result, SumRankError};

/// An immutable word → vector mapping.
///
/// Constructed once and passed by reference into the vectorizer; never
/// mutated after load, so it is safe to share across concurrent
/// summarizations.
#[derive(Debug, Clone, Default)]
pub struct EmbeddingTable {
    vectors: FxHashMap<String, Vec<f32>>,
    dimension: usize,
}

impl EmbeddingTable {
    /// Create an empty table (no semantic signal).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a table from `(token, vector)` pairs.
    ///
    /// Intended for tests with small synthetic tables. Pairs whose vector
    /// length disagrees with the first pair's are skipped.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<f32>)>,
        S: Into<String>,
    {
        let mut vectors = FxHashMap::default();
        let mut dimension = 0;
        for (token, vec) in pairs {
            if dimension == 0 {
                dimension = vec.len();
            }
            if vec.len() == dimension {
                vectors.insert(token.into(), vec);
            }
        }
        Self { vectors, dimension }
    }

    /// Load a table from a plain-text embedding resource.
    ///
    /// Each line is `<token> <components...>`. The dimension is taken from
    /// the first well-formed line; lines that fail to parse or disagree on
    /// dimension are skipped and reported in a single warning. A missing
    /// file yields an empty table, not an error.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = match std::fs::File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(
                    path = %path.display(),
                    "embedding resource not found; continuing with an empty table \
                     (ranking degenerates to original-order selection)"
                );
                return Ok(Self::empty());
            }
            Err(e) => {
                return Err(SumRankError::EmbeddingResource {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };

        let reader = BufReader::new(file);
        let mut vectors = FxHashMap::default();
        let mut dimension = 0;
        let mut skipped = 0usize;

        for line in reader.lines() {
            let line = line.map_err(|e| SumRankError::EmbeddingResource {
                path: path.to_path_buf(),
                source: e,
            })?;
            match parse_line(&line) {
                Some((token, vec)) => {
                    if dimension == 0 {
                        dimension = vec.len();
                    }
                    if vec.len() == dimension {
                        vectors.insert(token, vec);
                    } else {
                        skipped += 1;
                    }
                }
                None => {
                    if !line.trim().is_empty() {
                        skipped += 1;
                    }
                }
            }
        }

        if skipped > 0 {
            warn!(
                path = %path.display(),
                skipped,
                "skipped malformed or dimension-mismatched embedding lines"
            );
        }

        Ok(Self { vectors, dimension })
    }

    /// Look up the vector for a token.
    pub fn get(&self, token: &str) -> Option<&[f32]> {
        self.vectors.get(token).map(Vec::as_slice)
    }

    /// Vector dimension, or 0 for an empty table.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of tokens in the table.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Whether the table holds no vectors.
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

/// Parse one `token c1 c2 ... cD` line. Returns `None` for lines without
/// at least one token and one component, or with unparseable components.
fn parse_line(line: &str) -> Option<(String, Vec<f32>)> {
    let mut parts = line.split_whitespace();
    let token = parts.next()?;
    let vec: Vec<f32> = parts
        .map(str::parse)
        .collect::<std::result::Result<_, _>>()
        .ok()?;
    if vec.is_empty() {
        return None;
    }
    Some((token.to_string(), vec))
}
