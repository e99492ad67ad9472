//! Natural Language Processing components
//!
//! This module provides sentence segmentation, sentence cleaning, and
//! stopword filtering.

pub mod cleaner;
pub mod segmenter;
pub mod stopwords;
