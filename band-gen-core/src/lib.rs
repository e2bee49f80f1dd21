//! Procedural band-name generation library.
//!
//! This crate provides a grammar-driven name generator including:
//! - A weighted Markov chain over parts of speech
//! - Curated word banks with derived and synthesized fallbacks
//! - Surface-form rendering with article allomorphy and capitalization
//! - Injectable randomness for reproducible output

use std::sync::OnceLock;

/// Core generation components and the high-level `Generator`.
pub mod model;

/// Error types shared by every component.
pub mod error;

/// Word-bank file loading.
pub mod io;

pub use error::{GenerationError, InvalidWeights};
pub use model::generator::Generator;

/// Generates one band name from the embedded word banks and the thread RNG.
///
/// The default generator is built, and self-checked, on first use.
pub fn generate_name() -> Result<String, GenerationError> {
	static DEFAULT: OnceLock<Generator> = OnceLock::new();

	let generator = match DEFAULT.get() {
		Some(generator) => generator,
		None => {
			let generator = Generator::embedded()?;
			DEFAULT.get_or_init(|| generator)
		}
	};

	generator.generate_name(&mut model::random::RngSource::thread())
}
