use rand::Rng;

use tracing::debug;

use crate::error::{ChainError, ChainResult};
use crate::model::chain::{Bigram, ChainModel};

/// Random-walk text generator over a `ChainModel`.
///
/// # Responsibilities
/// - Pre-filter the model's bigrams into a candidate seed set (first
///   word uppercase and alphabetic)
/// - Walk the chain from a random seed, choosing successors uniformly,
///   until a bigram with no recorded successor is reached
/// - Join the accumulated words into the output string
///
/// Randomness is injected through `rand::Rng` so callers can supply a
/// seeded generator and reproduce runs exactly.
///
/// # Invariants
/// - `seeds` is non-empty and every entry is a key of `model`
#[derive(Debug)]
pub struct Generator<'a> {
	model: &'a ChainModel,
	/// Bigrams whose first word can open a sentence. Filtered once at
	/// construction so seed selection never loops.
	seeds: Vec<&'a Bigram>,
}

impl<'a> Generator<'a> {
	/// Creates a generator over `model`, collecting the candidate seeds.
	///
	/// A bigram qualifies as a seed when its first word starts with an
	/// alphabetic, uppercase character. Filtering happens once here;
	/// each `generate` call samples uniformly from the resulting set,
	/// which guarantees seed selection terminates.
	///
	/// # Errors
	/// - `ChainError::EmptyChain` if the model has no entries.
	/// - `ChainError::NoValidSeed` if no bigram qualifies as a seed.
	pub fn new(model: &'a ChainModel) -> ChainResult<Self> {
		if model.is_empty() {
			return Err(ChainError::EmptyChain);
		}

		let mut seeds: Vec<&Bigram> = model
			.bigrams()
			.filter(|bigram| starts_sentence(bigram.first()))
			.collect();
		if seeds.is_empty() {
			return Err(ChainError::NoValidSeed);
		}
		// Key iteration order differs per map instance, so sort the
		// candidates to keep seed choice a function of the injected RNG
		// alone.
		seeds.sort_by(|a, b| (a.first(), a.second()).cmp(&(b.first(), b.second())));

		Ok(Self { model, seeds })
	}

	/// Generates one text by random walk.
	///
	/// Starts from a uniformly chosen seed bigram, then repeatedly
	/// looks up the current bigram's successor list: a missing entry
	/// ends the walk (the normal termination, checked explicitly before
	/// every step), otherwise one successor is chosen uniformly and the
	/// cursor advances to `(previous second word, chosen word)`.
	///
	/// The walk takes at most one step per distinct bigram in the
	/// model. A text whose final bigram value also occurs earlier
	/// leaves every reachable bigram with successors, and without that
	/// cap the walk would never stop.
	///
	/// The output is the accumulated words joined with single spaces.
	pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
		let seed = self.seeds[rng.random_range(0..self.seeds.len())];

		let mut words: Vec<String> = vec![seed.first().to_owned(), seed.second().to_owned()];
		let mut link = seed.clone();

		let mut remaining = self.model.len();
		while remaining > 0 {
			let Some(successors) = self.model.successors(&link) else {
				break;
			};
			let next = &successors[rng.random_range(0..successors.len())];
			words.push(next.clone());
			link = link.shift(next);
			remaining -= 1;
		}

		debug!("generated {} words from seed ({}, {})", words.len(), seed.first(), seed.second());
		words.join(" ")
	}
}

/// Whether `word` can open a generated text: its first character must
/// be alphabetic and uppercase.
fn starts_sentence(word: &str) -> bool {
	word.chars().next().is_some_and(|c| c.is_alphabetic() && c.is_uppercase())
}

/// One-shot convenience: builds a `Generator` over `model` and produces
/// a single text with it.
///
/// # Errors
/// Propagates `ChainError::EmptyChain` and `ChainError::NoValidSeed`
/// from `Generator::new`.
pub fn generate_text<R: Rng + ?Sized>(model: &ChainModel, rng: &mut R) -> ChainResult<String> {
	Ok(Generator::new(model)?.generate(rng))
}
