use std::collections::HashMap;

use tracing::debug;

use crate::error::{ChainError, ChainResult};

/// An ordered pair of two consecutive tokens from the source text,
/// used as a chain key.
///
/// Equality and hashing are by exact string content of both positions:
/// two bigrams are the same key iff both words match exactly, casing
/// and attached punctuation included.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Bigram {
	first: String,
	second: String,
}

impl Bigram {
	/// Creates a bigram from two tokens.
	pub fn new(first: &str, second: &str) -> Self {
		Self {
			first: first.to_owned(),
			second: second.to_owned(),
		}
	}

	/// First word of the pair.
	pub fn first(&self) -> &str {
		&self.first
	}

	/// Second word of the pair.
	pub fn second(&self) -> &str {
		&self.second
	}

	/// Advances the pair by one word: `(a, b)` shifted by `next`
	/// becomes `(b, next)`. Used by the generator to move its cursor.
	pub fn shift(&self, next: &str) -> Self {
		Self::new(&self.second, next)
	}
}

/// A second-order Markov chain model over whitespace-separated tokens.
///
/// Maps every bigram observed in the source text (except the one formed
/// from the final two tokens, which has no following word) to the list
/// of words that followed it, in discovery order, duplicates retained.
/// Repetition in a successor list is what biases random choice toward
/// frequent continuations.
///
/// # Invariants
/// - Every key corresponds to a position `i <= n-3` in the token
///   sequence with key = `(tokens[i], tokens[i+1])`
/// - Every successor list holds at least one word
/// - The model is never mutated after `build` returns
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ChainModel {
	/// Outgoing words indexed by the bigram they were observed after.
	chains: HashMap<Bigram, Vec<String>>,
}

impl ChainModel {
	/// Builds a chain model from raw text.
	///
	/// Tokenizes on runs of whitespace (empty tokens discarded), then
	/// performs a single linear pass: for each triple of consecutive
	/// tokens, the first two form the key and the third is appended to
	/// its successor list. O(n) time and auxiliary space in the token
	/// count.
	///
	/// Pure function of its input: same text, same model.
	///
	/// # Errors
	/// Returns `ChainError::InsufficientInput` if the text holds fewer
	/// than 3 tokens, since no triple can be formed.
	pub fn build(text: &str) -> ChainResult<Self> {
		let words: Vec<&str> = text.split_whitespace().collect();
		if words.len() < 3 {
			return Err(ChainError::InsufficientInput { tokens: words.len() });
		}

		let mut chains: HashMap<Bigram, Vec<String>> = HashMap::new();
		for triple in words.windows(3) {
			let key = Bigram::new(triple[0], triple[1]);
			chains.entry(key).or_default().push(triple[2].to_owned());
		}

		debug!("built chain model: {} bigrams from {} tokens", chains.len(), words.len());
		Ok(Self { chains })
	}

	/// Returns the successor list recorded for `key`, or `None` if the
	/// bigram was never observed with a following word. Absence is the
	/// generator's normal termination condition, not an error.
	pub fn successors(&self, key: &Bigram) -> Option<&[String]> {
		self.chains.get(key).map(Vec::as_slice)
	}

	/// Iterates over all bigram keys in the model.
	pub fn bigrams(&self) -> impl Iterator<Item = &Bigram> {
		self.chains.keys()
	}

	/// Number of distinct bigram keys.
	pub fn len(&self) -> usize {
		self.chains.len()
	}

	/// Whether the model holds no entries at all.
	pub fn is_empty(&self) -> bool {
		self.chains.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn build_records_every_bigram_except_the_final_one() {
		let model = ChainModel::build("Hi there mary hi there juanita").unwrap();

		let mut keys: Vec<(&str, &str)> = model.bigrams().map(|b| (b.first(), b.second())).collect();
		keys.sort();
		assert_eq!(
			keys,
			vec![("Hi", "there"), ("hi", "there"), ("mary", "hi"), ("there", "mary")]
		);

		// The final bigram has no following word and is never a key.
		assert_eq!(model.successors(&Bigram::new("there", "juanita")), None);
	}

	#[test]
	fn keys_are_case_sensitive() {
		let model = ChainModel::build("Hi there mary hi there juanita").unwrap();

		assert_eq!(
			model.successors(&Bigram::new("Hi", "there")),
			Some(&["mary".to_owned()][..])
		);
		assert_eq!(
			model.successors(&Bigram::new("hi", "there")),
			Some(&["juanita".to_owned()][..])
		);
	}

	#[test]
	fn successor_lists_retain_duplicates() {
		let model = ChainModel::build("a b c a b c a b d").unwrap();

		assert_eq!(
			model.successors(&Bigram::new("a", "b")),
			Some(&["c".to_owned(), "c".to_owned(), "d".to_owned()][..])
		);
	}

	#[test]
	fn tokenization_splits_on_whitespace_runs() {
		let model = ChainModel::build("one\t two \n\n three   four").unwrap();

		assert_eq!(model.len(), 2);
		assert_eq!(
			model.successors(&Bigram::new("one", "two")),
			Some(&["three".to_owned()][..])
		);
	}

	#[test]
	fn fewer_than_three_tokens_is_an_error() {
		assert_eq!(
			ChainModel::build("hi there"),
			Err(ChainError::InsufficientInput { tokens: 2 })
		);
		assert_eq!(ChainModel::build(""), Err(ChainError::InsufficientInput { tokens: 0 }));
		assert_eq!(
			ChainModel::build(" \t \n "),
			Err(ChainError::InsufficientInput { tokens: 0 })
		);
	}

	#[test]
	fn build_is_idempotent() {
		let text = "Would you could you in a house? I would not could not with a mouse.";
		assert_eq!(ChainModel::build(text).unwrap(), ChainModel::build(text).unwrap());
	}
}
