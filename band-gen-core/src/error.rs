use thiserror::Error;

use crate::model::grammar::GrammarState;

/// A weight table rejected by `weighted_index` / `validate_weights`.
///
/// Each variant names the check that failed. Weight tables in this crate are
/// static, so any of these indicates a programming error in a table.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidWeights {
	#[error("weight table is empty")]
	Empty,
	#[error("weight {index} is not a finite number")]
	NotFinite { index: usize },
	#[error("weight {index} is negative ({value})")]
	Negative { index: usize, value: f64 },
	#[error("weights sum to {sum}, expected a positive total")]
	NonPositiveSum { sum: f64 },
}

/// Everything that can go wrong while generating a name.
///
/// None of these are transient: they all point at broken static data or
/// configuration, so retrying with fresh randomness will not help.
#[derive(Debug, Error)]
pub enum GenerationError {
	#[error("invalid weights: {0}")]
	InvalidWeights(#[from] InvalidWeights),

	/// The walk visited more than `cap` content states without reaching `End`.
	#[error("grammar walk did not terminate within {cap} tokens")]
	WalkDidNotTerminate { cap: usize },

	/// Found by the startup self-check: some state has no path to `End`.
	#[error("no path from {state:?} to End in the transition table")]
	UnterminatedGrammar { state: GrammarState },

	#[error("word bank '{bank}' is empty")]
	EmptyBank { bank: &'static str },

	#[error("malformed word banks: {0}")]
	Banks(#[from] serde_json::Error),

	#[error("failed to read word banks: {0}")]
	Io(#[from] std::io::Error),

	#[error("invalid settings: {0}")]
	InvalidSettings(String),
}
