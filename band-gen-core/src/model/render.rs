use crate::model::entry::{GeneratedName, LexicalEntry};

/// Renders a walked name into its display string.
///
/// Nouns use their singular and verbs their present form. An article uses
/// its vowel allomorph ("an") when the following word starts with a vowel
/// letter, its consonant allomorph ("a") otherwise. The joined words are then
/// passed through `capitalize`.
pub fn render(name: GeneratedName) -> String {
	let tokens = name.tokens();
	let words: Vec<&str> = tokens
		.iter()
		.enumerate()
		.map(|(i, token)| match &token.entry {
			LexicalEntry::Article { consonant_form, vowel_form } => {
				let next = tokens.get(i + 1).map(|t| default_surface(&t.entry));
				if next.is_some_and(starts_with_vowel) {
					vowel_form.as_str()
				} else {
					consonant_form.as_str()
				}
			}
			entry => default_surface(entry),
		})
		.collect();

	capitalize(&words.join(" "))
}

/// The form a word takes when context does not ask for another one.
///
/// Tense and number agreement are not applied: verbs always use the present
/// form and nouns the singular.
fn default_surface(entry: &LexicalEntry) -> &str {
	match entry {
		LexicalEntry::Noun(forms) => &forms.singular,
		LexicalEntry::Verb { forms, .. } => &forms.present,
		LexicalEntry::Article { consonant_form, .. } => consonant_form,
		LexicalEntry::Adjective(text)
		| LexicalEntry::Conjunction(text)
		| LexicalEntry::Adverb(text)
		| LexicalEntry::Number(text)
		| LexicalEntry::FirstName(text)
		| LexicalEntry::LastName(text)
		| LexicalEntry::Place(text)
		| LexicalEntry::Preposition(text)
		| LexicalEntry::CollectiveNoun(text) => text,
	}
}

fn starts_with_vowel(word: &str) -> bool {
	matches!(word.chars().next().map(|c| c.to_ascii_lowercase()), Some('a' | 'e' | 'i' | 'o' | 'u'))
}

/// Uppercases the first letter of every whitespace-separated word and
/// lowercases the rest. Whitespace runs are kept exactly as they are.
///
/// Case mapping is Unicode-aware: `capitalize("γεια σου") == "Γεια Σου"`.
pub fn capitalize(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	let mut rest = text;

	while !rest.is_empty() {
		let word_start = rest.find(|c: char| !c.is_whitespace()).unwrap_or(rest.len());
		out.push_str(&rest[..word_start]);
		rest = &rest[word_start..];

		let word_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
		let mut chars = rest[..word_end].chars();
		if let Some(first) = chars.next() {
			out.extend(first.to_uppercase());
			out.push_str(&chars.as_str().to_lowercase());
		}
		rest = &rest[word_end..];
	}

	out
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::entry::{NounForms, Token, Transitivity, VerbForms};
	use crate::model::grammar::GrammarState;

	fn name(tokens: Vec<(GrammarState, LexicalEntry)>) -> GeneratedName {
		GeneratedName::new(tokens.into_iter().map(|(role, entry)| Token { role, entry }).collect())
	}

	fn noun(singular: &str, plural: &str) -> LexicalEntry {
		LexicalEntry::Noun(NounForms { singular: singular.into(), plural: plural.into() })
	}

	fn indefinite() -> LexicalEntry {
		LexicalEntry::Article { consonant_form: "a".into(), vowel_form: "an".into() }
	}

	#[test]
	fn capitalize_examples() {
		assert_eq!(capitalize("depeche mode"), "Depeche Mode");
		assert_eq!(capitalize("THIS IS SPARTA"), "This Is Sparta");
		assert_eq!(capitalize("   bAnAnA   pUdDiNg   "), "   Banana   Pudding   ");
		assert_eq!(capitalize("γεια σου φιλε"), "Γεια Σου Φιλε");
	}

	#[test]
	fn capitalize_edge_cases() {
		assert_eq!(capitalize(""), "");
		assert_eq!(capitalize("   "), "   ");
		assert_eq!(capitalize("a\tb\nc"), "A\tB\nC");
		assert_eq!(capitalize("blink-182"), "Blink-182");
	}

	#[test]
	fn nouns_render_singular() {
		let rendered = render(name(vec![(GrammarState::Object, noun("foot", "feet"))]));
		assert_eq!(rendered, "Foot");
	}

	#[test]
	fn verbs_render_present() {
		let forms = VerbForms {
			present: "explode".into(),
			past: "exploded".into(),
			participle: "exploding".into(),
			third_person: "explodes".into(),
		};
		let rendered = render(name(vec![
			(GrammarState::Subject, noun("goat", "goats")),
			(GrammarState::IntransitiveVerb, LexicalEntry::Verb { transitivity: Transitivity::Intransitive, forms }),
		]));
		assert_eq!(rendered, "Goat Explode");
	}

	#[test]
	fn indefinite_article_before_vowel() {
		let rendered = render(name(vec![
			(GrammarState::Article, indefinite()),
			(GrammarState::Adjective, LexicalEntry::Adjective("orange".into())),
			(GrammarState::Object, noun("clam", "clams")),
		]));
		assert_eq!(rendered, "An Orange Clam");
	}

	#[test]
	fn indefinite_article_before_consonant() {
		let rendered = render(name(vec![(GrammarState::Article, indefinite()), (GrammarState::Object, noun("goat", "goats"))]));
		assert_eq!(rendered, "A Goat");
	}

	#[test]
	fn collective_nouns_render_as_is() {
		let rendered = render(name(vec![
			(GrammarState::FirstName, LexicalEntry::FirstName("Willa".into())),
			(GrammarState::CollectiveNoun, LexicalEntry::CollectiveNoun("gang".into())),
		]));
		assert_eq!(rendered, "Willa Gang");
	}

	#[test]
	fn multi_word_entries_are_capitalized_per_word() {
		let rendered = render(name(vec![(GrammarState::Object, noun("jam jar", "jam jars"))]));
		assert_eq!(rendered, "Jam Jar");
	}
}
