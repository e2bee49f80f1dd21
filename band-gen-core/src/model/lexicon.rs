use serde::{Deserialize, Serialize};

use crate::error::GenerationError;
use crate::model::entry::{LexicalEntry, NounForms, Transitivity, VerbForms};
use crate::model::grammar::GrammarState;
use crate::model::random::RandomSource;
use crate::model::synthesizer::WordSynthesizer;
use crate::model::weighted::weighted_index;

/// Noun sources: derive from an adjective, synthesize, pick from the bank.
const NOUN_SOURCES: [f64; 3] = [3.0, 3.0, 94.0];
/// Adjective sources: synthesize, pick from the bank.
const ADJECTIVE_SOURCES: [f64; 2] = [3.0, 97.0];
/// Name sources: derive from a noun, pick from the bank.
const NAME_SOURCES: [f64; 2] = [3.0, 97.0];
/// Which form of a noun a derived name takes: singular, plural.
const DERIVED_NAME_FORM: [f64; 2] = [0.9, 0.1];
/// Articles: definite, indefinite.
const ARTICLE_KINDS: [f64; 2] = [95.0, 5.0];
/// Conjunctions: "and", "or".
const CONJUNCTIONS: [f64; 2] = [90.0, 10.0];
/// Numbers are drawn from `[0, NUMBER_LIMIT)`.
const NUMBER_LIMIT: usize = 100;

/// Curated word lists, one per bank-backed role.
///
/// Articles and conjunctions are not banks: they are fixed weighted choices
/// inside the resolver.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct WordBanks {
	pub nouns: Vec<NounForms>,
	pub adjectives: Vec<String>,
	pub first_names: Vec<String>,
	pub last_names: Vec<String>,
	pub transitive_verbs: Vec<VerbForms>,
	pub intransitive_verbs: Vec<VerbForms>,
	pub adverbs: Vec<String>,
	pub places: Vec<String>,
	pub prepositions: Vec<String>,
	pub collective_nouns: Vec<String>,
}

impl WordBanks {
	/// Parses banks from their JSON representation.
	pub fn from_json(json: &str) -> Result<Self, GenerationError> {
		Ok(serde_json::from_str(json)?)
	}

	/// The default banks compiled into the crate.
	pub fn embedded() -> Result<Self, GenerationError> {
		Self::from_json(include_str!("../../data/word_banks.json"))
	}

	/// Fails with `EmptyBank` naming the first empty list.
	pub fn validate(&self) -> Result<(), GenerationError> {
		let sizes = [
			("nouns", self.nouns.len()),
			("adjectives", self.adjectives.len()),
			("firstNames", self.first_names.len()),
			("lastNames", self.last_names.len()),
			("transitiveVerbs", self.transitive_verbs.len()),
			("intransitiveVerbs", self.intransitive_verbs.len()),
			("adverbs", self.adverbs.len()),
			("places", self.places.len()),
			("prepositions", self.prepositions.len()),
			("collectiveNouns", self.collective_nouns.len()),
		];
		match sizes.iter().find(|(_, len)| *len == 0) {
			Some(&(bank, _)) => Err(GenerationError::EmptyBank { bank }),
			None => Ok(()),
		}
	}
}

/// Turns a grammatical role into a concrete lexical entry.
///
/// Each accessor weighs its sources (bank pick, derivation from another
/// accessor, synthesized word) and builds a fresh entry on every call.
#[derive(Debug, Clone)]
pub struct LexiconResolver {
	banks: WordBanks,
	synthesizer: WordSynthesizer,
}

impl LexiconResolver {
	pub fn new(banks: WordBanks) -> Self {
		Self { banks, synthesizer: WordSynthesizer::default() }
	}

	/// Resolves the entry for a visited role.
	///
	/// Returns `None` for `Start` and `End`, which carry no content.
	pub fn resolve<R: RandomSource + ?Sized>(
		&self,
		role: GrammarState,
		rng: &mut R,
	) -> Result<Option<LexicalEntry>, GenerationError> {
		use GrammarState as S;
		let entry = match role {
			S::Start | S::End => return Ok(None),
			S::Subject | S::Object => self.noun(rng)?,
			S::Article => self.article(rng)?,
			S::Adjective => self.adjective(rng)?,
			S::TransitiveVerb => self.transitive_verb(rng)?,
			S::IntransitiveVerb => self.intransitive_verb(rng)?,
			S::Conjunction => self.conjunction(rng)?,
			S::Adverb => self.adverb(rng)?,
			S::Number => self.number(rng),
			S::FirstName => self.first_name(rng)?,
			S::LastName => self.last_name(rng)?,
			S::Place => self.place(rng)?,
			S::Preposition => self.preposition(rng)?,
			S::CollectiveNoun => self.collective_noun(rng)?,
		};
		Ok(Some(entry))
	}

	/// A noun: 3% an adjective used as a noun (uninflected), 3% a synthesized
	/// word with a naive "s" plural, otherwise a bank entry.
	pub fn noun<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<LexicalEntry, GenerationError> {
		Ok(LexicalEntry::Noun(self.noun_forms(rng)?))
	}

	fn noun_forms<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<NounForms, GenerationError> {
		let forms = match weighted_index(&NOUN_SOURCES, rng)? {
			0 => {
				let adjective = self.adjective_text(rng)?;
				NounForms { singular: adjective.clone(), plural: adjective }
			}
			1 => {
				let word = self.synthesizer.synthesize(rng);
				let plural = format!("{word}s");
				NounForms { singular: word, plural }
			}
			_ => pick(&self.banks.nouns, "nouns", rng)?.clone(),
		};
		Ok(forms)
	}

	/// An adjective: 3% synthesized, otherwise from the bank.
	pub fn adjective<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<LexicalEntry, GenerationError> {
		Ok(LexicalEntry::Adjective(self.adjective_text(rng)?))
	}

	fn adjective_text<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<String, GenerationError> {
		match weighted_index(&ADJECTIVE_SOURCES, rng)? {
			0 => Ok(self.synthesizer.synthesize(rng)),
			_ => Ok(pick(&self.banks.adjectives, "adjectives", rng)?.clone()),
		}
	}

	pub fn first_name<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<LexicalEntry, GenerationError> {
		Ok(LexicalEntry::FirstName(self.name_text(&self.banks.first_names, "firstNames", rng)?))
	}

	pub fn last_name<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<LexicalEntry, GenerationError> {
		Ok(LexicalEntry::LastName(self.name_text(&self.banks.last_names, "lastNames", rng)?))
	}

	/// 3% of names are a noun (plural one time in ten), the rest come from `bank`.
	fn name_text<R: RandomSource + ?Sized>(
		&self,
		bank: &[String],
		bank_name: &'static str,
		rng: &mut R,
	) -> Result<String, GenerationError> {
		if weighted_index(&NAME_SOURCES, rng)? == 1 {
			return Ok(pick(bank, bank_name, rng)?.clone());
		}

		let forms = self.noun_forms(rng)?;
		match weighted_index(&DERIVED_NAME_FORM, rng)? {
			1 => Ok(forms.plural),
			_ => Ok(forms.singular),
		}
	}

	/// "the" 95% of the time, otherwise "a"/"an".
	pub fn article<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<LexicalEntry, GenerationError> {
		let (consonant_form, vowel_form) = match weighted_index(&ARTICLE_KINDS, rng)? {
			0 => ("the", "the"),
			_ => ("a", "an"),
		};
		Ok(LexicalEntry::Article {
			consonant_form: consonant_form.to_owned(),
			vowel_form: vowel_form.to_owned(),
		})
	}

	/// "and" 90% of the time, otherwise "or".
	pub fn conjunction<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<LexicalEntry, GenerationError> {
		let conjunction = match weighted_index(&CONJUNCTIONS, rng)? {
			0 => "and",
			_ => "or",
		};
		Ok(LexicalEntry::Conjunction(conjunction.to_owned()))
	}

	pub fn transitive_verb<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<LexicalEntry, GenerationError> {
		let forms = pick(&self.banks.transitive_verbs, "transitiveVerbs", rng)?.clone();
		Ok(LexicalEntry::Verb { transitivity: Transitivity::Transitive, forms })
	}

	pub fn intransitive_verb<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<LexicalEntry, GenerationError> {
		let forms = pick(&self.banks.intransitive_verbs, "intransitiveVerbs", rng)?.clone();
		Ok(LexicalEntry::Verb { transitivity: Transitivity::Intransitive, forms })
	}

	pub fn adverb<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<LexicalEntry, GenerationError> {
		Ok(LexicalEntry::Adverb(pick(&self.banks.adverbs, "adverbs", rng)?.clone()))
	}

	pub fn place<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<LexicalEntry, GenerationError> {
		Ok(LexicalEntry::Place(pick(&self.banks.places, "places", rng)?.clone()))
	}

	pub fn preposition<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<LexicalEntry, GenerationError> {
		Ok(LexicalEntry::Preposition(pick(&self.banks.prepositions, "prepositions", rng)?.clone()))
	}

	pub fn collective_noun<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<LexicalEntry, GenerationError> {
		Ok(LexicalEntry::CollectiveNoun(
			pick(&self.banks.collective_nouns, "collectiveNouns", rng)?.clone(),
		))
	}

	/// A whole number in `[0, 100)`, stored as decimal text.
	pub fn number<R: RandomSource + ?Sized>(&self, rng: &mut R) -> LexicalEntry {
		LexicalEntry::Number(rng.next_index(NUMBER_LIMIT).to_string())
	}
}

/// Uniform pick from a bank, consuming one draw.
fn pick<'a, T, R: RandomSource + ?Sized>(
	bank: &'a [T],
	bank_name: &'static str,
	rng: &mut R,
) -> Result<&'a T, GenerationError> {
	if bank.is_empty() {
		return Err(GenerationError::EmptyBank { bank: bank_name });
	}
	Ok(&bank[rng.next_index(bank.len())])
}
