use crate::error::InvalidWeights;
use crate::model::random::RandomSource;

/// Checks a weight table without consuming any randomness.
///
/// Returns the total weight on success.
///
/// # Errors
/// - `Empty` if there are no weights
/// - `NotFinite` for NaN or infinite weights
/// - `Negative` for weights below zero
/// - `NonPositiveSum` if the total is not strictly positive
pub fn validate_weights(weights: &[f64]) -> Result<f64, InvalidWeights> {
	if weights.is_empty() {
		return Err(InvalidWeights::Empty);
	}

	for (index, &value) in weights.iter().enumerate() {
		if !value.is_finite() {
			return Err(InvalidWeights::NotFinite { index });
		}
		if value < 0.0 {
			return Err(InvalidWeights::Negative { index, value });
		}
	}

	let sum: f64 = weights.iter().sum();
	if sum <= 0.0 {
		return Err(InvalidWeights::NonPositiveSum { sum });
	}

	Ok(sum)
}

/// Picks an index with probability proportional to its weight.
///
/// Weights are normalized by their sum, then accumulated in order; the first
/// index whose cumulative probability is `>=` the draw wins. A draw landing
/// exactly on a boundary therefore resolves to the lower index. Zero-weight
/// entries are skipped, even for a draw of 0.0.
///
/// Consumes exactly one draw, and only after the table has been validated.
pub fn weighted_index<R: RandomSource + ?Sized>(weights: &[f64], rng: &mut R) -> Result<usize, InvalidWeights> {
	let sum = validate_weights(weights)?;
	let draw = rng.next_f64();

	let mut cumulative = 0.0;
	for (index, weight) in weights.iter().enumerate() {
		cumulative += weight / sum;
		if *weight > 0.0 && draw <= cumulative {
			return Ok(index);
		}
	}

	// Rounding can leave the final cumulative sum a hair under 1.0.
	Ok(weights.iter().rposition(|&w| w > 0.0).unwrap_or(weights.len() - 1))
}
