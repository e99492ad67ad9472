//! Sentence similarity graph
//!
//! The graph over sentence vectors is always complete, so it is stored as
//! a dense matrix rather than an adjacency structure.

pub mod similarity;
