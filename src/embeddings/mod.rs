//! Word embeddings
//!
//! This module provides the word-vector table and the sentence vectorizer
//! built on top of it.

pub mod table;
pub mod vectorizer;
