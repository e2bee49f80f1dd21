use crate::error::GenerationError;
use crate::model::grammar::DEFAULT_MAX_TOKENS;

/// Input parameters for a batch of generated names.
///
/// # Responsibilities
/// - How many names to produce (`count`)
/// - Whether to use a reproducible random source (`seed`)
/// - The walk safety cap (`max_tokens`)
///
/// # Invariants
/// - `count >= 1`
/// - `max_tokens >= 1`
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
	count: usize,

	/// Seed for a reproducible batch. `None` draws from the thread RNG.
	pub seed: Option<u64>,

	max_tokens: usize,
}

impl Default for GenerationSettings {
	fn default() -> Self {
		Self { count: 1, seed: None, max_tokens: DEFAULT_MAX_TOKENS }
	}
}

impl GenerationSettings {
	pub fn count(&self) -> usize {
		self.count
	}

	pub fn max_tokens(&self) -> usize {
		self.max_tokens
	}

	/// Sets the number of names per batch.
	///
	/// # Errors
	/// Returns an error if `count` is zero.
	pub fn set_count(&mut self, count: usize) -> Result<(), GenerationError> {
		if count == 0 {
			return Err(GenerationError::InvalidSettings("count must be at least 1".to_owned()));
		}
		self.count = count;
		Ok(())
	}

	/// Sets the maximum number of words a single walk may produce.
	///
	/// # Errors
	/// Returns an error if `max_tokens` is zero.
	pub fn set_max_tokens(&mut self, max_tokens: usize) -> Result<(), GenerationError> {
		if max_tokens == 0 {
			return Err(GenerationError::InvalidSettings("max_tokens must be at least 1".to_owned()));
		}
		self.max_tokens = max_tokens;
		Ok(())
	}
}
