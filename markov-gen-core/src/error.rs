//! Error types for chain building and text generation.

use thiserror::Error;

/// Result type alias for chain operations.
pub type ChainResult<T> = Result<T, ChainError>;

/// Errors that can occur while building a chain model or generating text.
///
/// None of these conditions is recovered from internally: the core never
/// degrades to partial or placeholder output, it reports the failure to
/// the caller and stops.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChainError {
	/// The source text holds fewer than 3 whitespace-separated tokens,
	/// so no bigram/successor triple can be formed.
	#[error("insufficient input: {tokens} token(s), at least 3 are needed to form a chain")]
	InsufficientInput { tokens: usize },

	/// Generation was requested on a model with no entries.
	#[error("chain model is empty, no seed can be selected")]
	EmptyChain,

	/// No bigram in the model starts with an uppercase alphabetic word,
	/// so no valid seed exists.
	#[error("no bigram starts with an uppercase alphabetic word")]
	NoValidSeed,
}
