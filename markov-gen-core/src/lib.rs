//! Second-order Markov text generation library.
//!
//! This crate builds a word-bigram Markov chain from a body of text and
//! generates new, statistically similar text from it:
//! - Chain construction from raw text (`ChainModel`)
//! - Random-walk text generation with injectable randomness (`Generator`)
//! - Typed errors for every failure mode (`ChainError`)
//!
//! The library performs no I/O: the caller supplies one text string and
//! receives one generated string. Reading files and printing output belong
//! to the surrounding driver.

/// Core chain model and generation logic.
///
/// This module exposes the chain builder and the generator while keeping
/// internal representation details private.
pub mod model;

/// Error taxonomy shared by the builder and the generator.
pub mod error;

pub use error::{ChainError, ChainResult};
pub use model::chain::{Bigram, ChainModel};
pub use model::generator::{Generator, generate_text};
