use serde::{Deserialize, Serialize};

use crate::model::grammar::GrammarState;

/// Singular and plural surface forms of a noun.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NounForms {
	pub singular: String,
	pub plural: String,
}

/// The four stored forms of a verb.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VerbForms {
	pub present: String,
	pub past: String,
	/// Participle / gerund ("-ing") form.
	pub participle: String,
	pub third_person: String,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transitivity {
	Transitive,
	Intransitive,
}

/// A concrete word or phrase with its surface-form variants.
///
/// Each variant belongs to one or more grammatical roles; see `fits`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LexicalEntry {
	Noun(NounForms),
	Adjective(String),
	/// Allomorph pair: the form used before a consonant sound and before a vowel sound.
	Article { consonant_form: String, vowel_form: String },
	Verb { transitivity: Transitivity, forms: VerbForms },
	Conjunction(String),
	Adverb(String),
	Number(String),
	FirstName(String),
	LastName(String),
	Place(String),
	Preposition(String),
	/// Rendered as-is: collective nouns have no singular/plural split.
	CollectiveNoun(String),
}

impl LexicalEntry {
	/// Whether this entry may fill the given grammar slot.
	///
	/// `Subject` and `Object` both take nouns; the two verb slots only accept
	/// verbs of the matching transitivity. `Start` and `End` carry no content.
	pub fn fits(&self, role: GrammarState) -> bool {
		use GrammarState as S;
		match self {
			LexicalEntry::Noun(_) => matches!(role, S::Subject | S::Object),
			LexicalEntry::Adjective(_) => role == S::Adjective,
			LexicalEntry::Article { .. } => role == S::Article,
			LexicalEntry::Verb { transitivity: Transitivity::Transitive, .. } => role == S::TransitiveVerb,
			LexicalEntry::Verb { transitivity: Transitivity::Intransitive, .. } => role == S::IntransitiveVerb,
			LexicalEntry::Conjunction(_) => role == S::Conjunction,
			LexicalEntry::Adverb(_) => role == S::Adverb,
			LexicalEntry::Number(_) => role == S::Number,
			LexicalEntry::FirstName(_) => role == S::FirstName,
			LexicalEntry::LastName(_) => role == S::LastName,
			LexicalEntry::Place(_) => role == S::Place,
			LexicalEntry::Preposition(_) => role == S::Preposition,
			LexicalEntry::CollectiveNoun(_) => role == S::CollectiveNoun,
		}
	}
}

/// One visited grammar slot and the entry resolved for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
	pub role: GrammarState,
	pub entry: LexicalEntry,
}

/// The ordered tokens of one name, as produced by a single grammar walk.
///
/// The `End` sentinel is never stored. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedName {
	tokens: Vec<Token>,
}

impl GeneratedName {
	pub(crate) fn new(tokens: Vec<Token>) -> Self {
		Self { tokens }
	}

	pub fn tokens(&self) -> &[Token] {
		&self.tokens
	}

	/// The sequence of visited roles, in walk order.
	pub fn roles(&self) -> impl Iterator<Item = GrammarState> + '_ {
		self.tokens.iter().map(|t| t.role)
	}

	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}
}
