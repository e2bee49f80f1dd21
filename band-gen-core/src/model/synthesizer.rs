use crate::model::random::RandomSource;

/// Consonants and blends that can open a syllable.
const ONSETS: &[&str] = &[
	"b", "bl", "br", "c", "ch", "cl", "cr", "d", "dr", "f", "fl", "fr", "g", "gl", "gr", "h", "j", "k", "l", "m", "n",
	"p", "pl", "pr", "qu", "r", "s", "sc", "sh", "sk", "sl", "sm", "sn", "sp", "squ", "st", "sw", "t", "th", "tw", "v",
	"w", "wh", "x", "y", "z",
];

/// Vowels and vowel clusters; every syllable has exactly one.
const NUCLEI: &[&str] = &[
	"a", "ae", "ai", "e", "ea", "ee", "ei", "i", "ie", "o", "oa", "oi", "oo", "ou", "u", "y",
];

/// Consonants and blends that can close a syllable.
const CODAS: &[&str] = &[
	"b", "bb", "ble", "bre", "c", "ch", "ct", "d", "dd", "dge", "f", "ff", "g", "gg", "h", "j", "k", "ck", "l", "ll",
	"m", "mm", "n", "nn", "p", "ph", "r", "rr", "s", "sh", "sm", "sp", "ss", "st", "t", "th", "tt", "v", "w", "x", "y",
	"z",
];

/// Words shorter than this get their continuation chance boosted.
const MIN_COMFORTABLE_LEN: usize = 3;
/// Words longer than this get their continuation chance damped.
const MAX_COMFORTABLE_LEN: usize = 8;
const SHORT_WORD_BOOST: f64 = 1.3;
const LONG_WORD_DAMPING: f64 = 0.7;

/// Onset probability when the word so far is empty or ends in a vowel.
const ONSET_AFTER_VOWEL: f64 = 0.8;
/// Onset probability when the word so far ends in a consonant.
const ONSET_AFTER_CONSONANT: f64 = 0.2;
/// A coda is appended when a draw exceeds this.
const CODA_THRESHOLD: f64 = 0.66;

/// Builds pronounceable nonsense words from onset/nucleus/coda inventories.
///
/// Syllable count is open-ended: a continuation chance starts at 1.0 and is
/// multiplied by a fresh draw after every syllable, so most words have one to
/// three syllables. The multiplier is nudged up for words under three
/// characters and down for words over eight, without hard-clamping.
#[derive(Debug, Clone)]
pub struct WordSynthesizer {
	onsets: &'static [&'static str],
	nuclei: &'static [&'static str],
	codas: &'static [&'static str],
}

impl Default for WordSynthesizer {
	fn default() -> Self {
		Self { onsets: ONSETS, nuclei: NUCLEI, codas: CODAS }
	}
}

impl WordSynthesizer {
	/// Generates one lowercase nonsense word. Never returns an empty string.
	pub fn synthesize<R: RandomSource + ?Sized>(&self, rng: &mut R) -> String {
		let mut word = String::new();
		let mut continuation = 1.0;

		// The first check always passes since draws are < 1.0.
		while rng.next_f64() < continuation {
			let onset_chance = if word.is_empty() || ends_in_vowel(&word) {
				ONSET_AFTER_VOWEL
			} else {
				ONSET_AFTER_CONSONANT
			};

			if rng.next_f64() <= onset_chance {
				word.push_str(pick(self.onsets, rng));
			}

			word.push_str(pick(self.nuclei, rng));

			if rng.next_f64() > CODA_THRESHOLD {
				word.push_str(pick(self.codas, rng));
			}

			let len = word.chars().count();
			let bias = if len < MIN_COMFORTABLE_LEN {
				SHORT_WORD_BOOST
			} else if len > MAX_COMFORTABLE_LEN {
				LONG_WORD_DAMPING
			} else {
				1.0
			};
			continuation *= rng.next_f64() * bias;
		}

		word
	}
}

fn ends_in_vowel(word: &str) -> bool {
	matches!(word.chars().last(), Some('a' | 'e' | 'i' | 'o' | 'u' | 'y'))
}

fn pick<'a, R: RandomSource + ?Sized>(inventory: &[&'a str], rng: &mut R) -> &'a str {
	inventory[rng.next_index(inventory.len())]
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::random::{RngSource, ScriptedSource};

	#[test]
	fn words_are_nonempty_lowercase_ascii() {
		let synthesizer = WordSynthesizer::default();
		let mut rng = RngSource::seeded(11);
		for _ in 0..5_000 {
			let word = synthesizer.synthesize(&mut rng);
			assert!(!word.is_empty());
			assert!(word.chars().all(|c| c.is_ascii_lowercase()), "unexpected word {word}");
		}
	}

	#[test]
	fn most_words_are_comfortable_length() {
		let synthesizer = WordSynthesizer::default();
		let mut rng = RngSource::seeded(12);
		let n = 20_000;
		let comfortable = (0..n)
			.map(|_| synthesizer.synthesize(&mut rng).chars().count())
			.filter(|len| (2..=10).contains(len))
			.count();
		assert!(comfortable as f64 / n as f64 > 0.8, "only {comfortable} of {n} words in range");
	}

	#[test]
	fn scripted_single_syllable() {
		// continue, onset (0.0 <= 0.8) "b", nucleus "a", no coda (0.5), stop.
		let mut rng = ScriptedSource::new(vec![0.0, 0.0, 0.0, 0.0, 0.5, 0.0, 0.9]);
		let word = WordSynthesizer::default().synthesize(&mut rng);
		assert_eq!(word, "ba");
	}

	#[test]
	fn scripted_coda_is_appended() {
		// continue, no onset (0.9 > 0.8), nucleus "a", coda draw 0.7 > 0.66 then "b", stop.
		let mut rng = ScriptedSource::new(vec![0.0, 0.9, 0.0, 0.7, 0.0, 0.0, 0.5]);
		let word = WordSynthesizer::default().synthesize(&mut rng);
		assert_eq!(word, "ab");
	}

	#[test]
	fn short_words_get_a_continuation_boost() {
		let draws = vec![
			0.0, 0.0, 0.0, 0.0, 0.5, // "ba", no coda
			0.7, // 0.7 * 1.3 = 0.91
			0.9, // continues only thanks to the boost
			0.9, 0.0, 0.5, // no onset after a vowel, "a", no coda
			0.0, 0.5, // stop
		];
		let mut rng = ScriptedSource::new(draws);
		assert_eq!(WordSynthesizer::default().synthesize(&mut rng), "baa");
		assert_eq!(rng.consumed(), 12);
	}

	#[test]
	fn long_words_are_damped() {
		let draws = vec![
			0.0, 0.0, 0.75, // onset "squ"
			0.1,  // nucleus "ae"
			0.9, 0.06, // coda "ble"
			0.99, // "squaeble" is 8 chars, no bias
			0.0,  // continue
			0.9, 0.0, 0.5, // no onset after a vowel, "a", no coda
			0.9,  // 9 chars: 0.99 * 0.9 * 0.7 = 0.6237
			0.64, // stops; undamped would be 0.891
		];
		let mut rng = ScriptedSource::new(draws);
		assert_eq!(WordSynthesizer::default().synthesize(&mut rng), "squaeblea");
		assert_eq!(rng.consumed(), 13);
	}

	#[test]
	fn onset_is_rare_after_a_consonant() {
		let draws = vec![
			0.0, 0.9, 0.0, 0.7, 0.0, // "ab"
			0.5, // 0.5 * 1.3 = 0.65
			0.0, // continue
			0.5, // above 0.2: no onset after "b"
			0.0, 0.5, // "a", no coda
			0.0, 0.5, // stop
		];
		let mut rng = ScriptedSource::new(draws);
		assert_eq!(WordSynthesizer::default().synthesize(&mut rng), "aba");
		assert_eq!(rng.consumed(), 12);
	}

	#[test]
	fn onset_after_a_consonant_at_its_boundary() {
		let draws = vec![
			0.0, 0.9, 0.0, 0.7, 0.0, // "ab"
			0.5, 0.0, // continue
			0.2, 0.0, // onset "b"
			0.0, 0.5, // "a", no coda
			0.0, 0.5, // stop
		];
		let mut rng = ScriptedSource::new(draws);
		assert_eq!(WordSynthesizer::default().synthesize(&mut rng), "abba");
		assert_eq!(rng.consumed(), 13);
	}

	#[test]
	fn ends_in_vowel_counts_y() {
		assert!(ends_in_vowel("sky"));
		assert!(ends_in_vowel("bra"));
		assert!(!ends_in_vowel("brat"));
	}
}
