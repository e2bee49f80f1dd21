use std::fs;
use std::path::Path;

use crate::error::GenerationError;
use crate::model::lexicon::WordBanks;

/// Reads word banks from a JSON file.
///
/// - Reads the entire file into memory
/// - Does not validate bank contents; see `WordBanks::validate`
pub fn load_banks<P: AsRef<Path>>(filename: P) -> Result<WordBanks, GenerationError> {
	let contents = fs::read_to_string(filename)?;
	WordBanks::from_json(&contents)
}
