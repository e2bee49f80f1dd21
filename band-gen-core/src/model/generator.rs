use std::path::Path;

use log::debug;

use crate::error::GenerationError;
use crate::io;
use crate::model::entry::GeneratedName;
use crate::model::grammar::{GrammarWalker, TransitionTable};
use crate::model::lexicon::{LexiconResolver, WordBanks};
use crate::model::random::{RandomSource, RngSource};
use crate::model::render::render;
use crate::model::settings::GenerationSettings;

/// High-level band-name generator.
///
/// # Responsibilities
/// - Own the word banks (through a `LexiconResolver`) and the grammar
///   (through a `GrammarWalker`)
/// - Self-check both at construction so broken static data fails at startup
/// - Generate single names or batches, from any random source
///
/// Holds no mutable state: one instance can serve concurrent callers as long
/// as each brings its own random source.
#[derive(Debug, Clone)]
pub struct Generator {
	lexicon: LexiconResolver,
	walker: GrammarWalker,
}

impl Generator {
	/// Creates a generator over `banks` with the standard grammar.
	///
	/// # Errors
	/// - `EmptyBank` if any bank is empty
	/// - `InvalidWeights` / `UnterminatedGrammar` if the grammar is broken
	pub fn new(banks: WordBanks) -> Result<Self, GenerationError> {
		Self::with_grammar(banks, GrammarWalker::default())
	}

	/// Creates a generator with a custom grammar walker.
	pub fn with_grammar(banks: WordBanks, walker: GrammarWalker) -> Result<Self, GenerationError> {
		banks.validate()?;
		walker.table().validate()?;
		Ok(Self { lexicon: LexiconResolver::new(banks), walker })
	}

	/// Creates a generator from the banks compiled into the crate.
	pub fn embedded() -> Result<Self, GenerationError> {
		Self::new(WordBanks::embedded()?)
	}

	/// Creates a generator from a word-bank JSON file.
	pub fn from_file<P: AsRef<Path>>(filepath: P) -> Result<Self, GenerationError> {
		Self::new(io::load_banks(filepath)?)
	}

	pub fn table(&self) -> &TransitionTable {
		self.walker.table()
	}

	/// Walks the grammar once and returns the unrendered tokens.
	pub fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<GeneratedName, GenerationError> {
		self.walker.walk(&self.lexicon, rng)
	}

	/// Generates one rendered name.
	///
	/// Nothing partial is ever returned: any error aborts the whole name.
	pub fn generate_name<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<String, GenerationError> {
		let name = render(self.generate(rng)?);
		debug!("generated name {:?}", name);
		Ok(name)
	}

	/// Generates `settings.count()` names from a single random source.
	///
	/// # Behavior
	/// - Seeded settings always produce the same batch for the same banks.
	/// - Unseeded settings draw from the thread RNG.
	/// - `settings.max_tokens()` replaces the walker's safety cap.
	pub fn generate_batch(&self, settings: &GenerationSettings) -> Result<Vec<String>, GenerationError> {
		match settings.seed {
			Some(seed) => self.batch_from(settings, &mut RngSource::seeded(seed)),
			None => self.batch_from(settings, &mut RngSource::thread()),
		}
	}

	fn batch_from<R: RandomSource>(
		&self,
		settings: &GenerationSettings,
		rng: &mut R,
	) -> Result<Vec<String>, GenerationError> {
		(0..settings.count())
			.map(|_| {
				let name = self.walker.walk_capped(&self.lexicon, rng, settings.max_tokens())?;
				Ok(render(name))
			})
			.collect()
	}
}
