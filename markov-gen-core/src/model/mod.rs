//! Top-level module for the Markov chain generation system.
//!
//! This module provides a second-order (word-bigram) Markov text
//! generator, including:
//! - The chain model built from source text (`ChainModel`)
//! - The bigram key type (`Bigram`)
//! - A random-walk generator over the model (`Generator`)

/// Word-bigram chain model built from raw text.
///
/// Handles whitespace tokenization, the single linear pass that records
/// every observed bigram/successor triple, and read-only lookups.
pub mod chain;

/// Random-walk text generation over a `ChainModel`.
///
/// Exposes seed pre-filtering, the walk itself, and a one-shot
/// convenience function combining both.
pub mod generator;
