use std::collections::{HashMap, HashSet, VecDeque};

use log::{trace, warn};
use serde::Serialize;

use crate::error::GenerationError;
use crate::model::entry::{GeneratedName, Token};
use crate::model::lexicon::LexiconResolver;
use crate::model::random::RandomSource;
use crate::model::weighted::{validate_weights, weighted_index};

/// Default safety cap on content tokens per walk.
pub const DEFAULT_MAX_TOKENS: usize = 200;

/// A grammatical role, used as a state of the name grammar.
///
/// `Start` is the entry point and `End` is absorbing; neither carries words.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GrammarState {
	Start,
	Article,
	Subject,
	Object,
	Adjective,
	TransitiveVerb,
	IntransitiveVerb,
	Conjunction,
	Adverb,
	Number,
	FirstName,
	LastName,
	Place,
	Preposition,
	CollectiveNoun,
	End,
}

impl GrammarState {
	pub const ALL: [GrammarState; 16] = [
		GrammarState::Start,
		GrammarState::Article,
		GrammarState::Subject,
		GrammarState::Object,
		GrammarState::Adjective,
		GrammarState::TransitiveVerb,
		GrammarState::IntransitiveVerb,
		GrammarState::Conjunction,
		GrammarState::Adverb,
		GrammarState::Number,
		GrammarState::FirstName,
		GrammarState::LastName,
		GrammarState::Place,
		GrammarState::Preposition,
		GrammarState::CollectiveNoun,
		GrammarState::End,
	];
}

/// One weighted outgoing edge.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct Transition {
	pub to: GrammarState,
	/// Relative weight; rows are normalized when sampled.
	pub weight: f64,
}

/// Successor distribution for every grammar state.
///
/// Conceptually a Markov chain over roles: each row lists the legal next
/// roles and how often each should follow.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct TransitionTable {
	rows: HashMap<GrammarState, Vec<Transition>>,
}

impl TransitionTable {
	/// Builds a table from `(state, [(successor, weight)])` rows.
	pub fn from_rows<I>(rows: I) -> Self
	where
		I: IntoIterator<Item = (GrammarState, Vec<(GrammarState, f64)>)>,
	{
		let rows = rows
			.into_iter()
			.map(|(from, edges)| {
				let edges = edges.into_iter().map(|(to, weight)| Transition { to, weight }).collect();
				(from, edges)
			})
			.collect();
		Self { rows }
	}

	/// The hand-tuned band-name grammar.
	pub fn standard() -> Self {
		use GrammarState::*;
		Self::from_rows([
			(
				Start,
				vec![
					(Article, 30.0),
					(Subject, 1.0),
					(Object, 32.0),
					(Adjective, 33.0),
					(TransitiveVerb, 1.0),
					(IntransitiveVerb, 1.0),
					(Adverb, 2.0),
					(Number, 1.0),
					(FirstName, 20.0),
					(LastName, 6.0),
					(Place, 14.0),
					(Preposition, 2.0),
				],
			),
			(
				Article,
				vec![
					(Subject, 1.0),
					(Object, 30.0),
					(Adjective, 6.0),
					(Adverb, 1.0),
					(FirstName, 2.0),
					(LastName, 1.0),
					(Place, 1.0),
					(CollectiveNoun, 2.0),
				],
			),
			(Subject, vec![(TransitiveVerb, 2.0), (IntransitiveVerb, 1.0)]),
			(
				Object,
				vec![
					(Object, 6.0),
					(Conjunction, 4.0),
					(Number, 3.0),
					(Preposition, 8.0),
					(CollectiveNoun, 5.0),
					(End, 134.0),
				],
			),
			(
				Adjective,
				vec![(Object, 35.0), (Adjective, 3.0), (Conjunction, 1.0), (CollectiveNoun, 2.0), (End, 6.0)],
			),
			(TransitiveVerb, vec![(Article, 1.0), (Object, 2.0)]),
			(IntransitiveVerb, vec![(Adverb, 1.0), (Preposition, 5.0), (End, 1.0)]),
			(Conjunction, vec![(Article, 10.0), (Object, 3.0), (Adjective, 1.0), (FirstName, 1.0)]),
			(Adverb, vec![(Adjective, 2.0), (Preposition, 1.0)]),
			(Number, vec![(Object, 1.0), (End, 4.0)]),
			(
				FirstName,
				vec![
					(Object, 4.0),
					(Adjective, 1.0),
					(TransitiveVerb, 1.0),
					(IntransitiveVerb, 1.0),
					(Conjunction, 6.0),
					(LastName, 9.0),
					(CollectiveNoun, 1.0),
					(End, 4.0),
				],
			),
			(
				LastName,
				vec![(Object, 2.0), (Conjunction, 5.0), (LastName, 1.0), (CollectiveNoun, 2.0), (End, 6.0)],
			),
			(
				Place,
				vec![(Object, 8.0), (TransitiveVerb, 1.0), (Number, 1.0), (FirstName, 2.0), (End, 22.0)],
			),
			(Preposition, vec![(Article, 3.0), (Object, 10.0), (Place, 1.0)]),
			(
				CollectiveNoun,
				vec![(TransitiveVerb, 1.0), (IntransitiveVerb, 1.0), (Preposition, 3.0), (End, 27.0)],
			),
			(End, vec![(End, 1.0)]),
		])
	}

	/// Outgoing edges of `state`, empty if the table has no row for it.
	pub fn successors(&self, state: GrammarState) -> &[Transition] {
		self.rows.get(&state).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Startup self-check.
	///
	/// Every state needs a valid weight row, and every state must be able to
	/// reach `End` through positive-weight edges.
	pub fn validate(&self) -> Result<(), GenerationError> {
		for state in GrammarState::ALL {
			let weights: Vec<f64> = self.successors(state).iter().map(|t| t.weight).collect();
			validate_weights(&weights)?;
		}

		for state in GrammarState::ALL {
			if !self.reaches_end(state) {
				return Err(GenerationError::UnterminatedGrammar { state });
			}
		}

		Ok(())
	}

	fn reaches_end(&self, from: GrammarState) -> bool {
		let mut seen = HashSet::from([from]);
		let mut queue = VecDeque::from([from]);
		while let Some(state) = queue.pop_front() {
			if state == GrammarState::End {
				return true;
			}
			for transition in self.successors(state) {
				if transition.weight > 0.0 && seen.insert(transition.to) {
					queue.push_back(transition.to);
				}
			}
		}
		false
	}
}

/// Walks the grammar from `Start` to `End`, one weighted step at a time.
#[derive(Debug, Clone)]
pub struct GrammarWalker {
	table: TransitionTable,
	max_tokens: usize,
}

impl Default for GrammarWalker {
	fn default() -> Self {
		Self::new(TransitionTable::standard())
	}
}

impl GrammarWalker {
	pub fn new(table: TransitionTable) -> Self {
		Self { table, max_tokens: DEFAULT_MAX_TOKENS }
	}

	/// Overrides the safety cap on content tokens per walk.
	pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
		self.max_tokens = max_tokens;
		self
	}

	pub fn table(&self) -> &TransitionTable {
		&self.table
	}

	pub fn max_tokens(&self) -> usize {
		self.max_tokens
	}

	/// Samples the successor of `state` from its weight row.
	pub fn advance<R: RandomSource + ?Sized>(
		&self,
		state: GrammarState,
		rng: &mut R,
	) -> Result<GrammarState, GenerationError> {
		let row = self.table.successors(state);
		let weights: Vec<f64> = row.iter().map(|t| t.weight).collect();
		let index = weighted_index(&weights, rng)?;
		Ok(row[index].to)
	}

	/// Walks from `Start` until `End`, calling `visit` for every state in between.
	///
	/// `End` itself is never visited. Each state is handed to `visit` before
	/// the next step is sampled, so lexical draws interleave with walk draws.
	///
	/// # Errors
	/// `WalkDidNotTerminate` once more than `max_tokens` states would be visited.
	pub fn walk_with<R, F>(&self, rng: &mut R, visit: F) -> Result<(), GenerationError>
	where
		R: RandomSource + ?Sized,
		F: FnMut(GrammarState, &mut R) -> Result<(), GenerationError>,
	{
		self.walk_with_cap(self.max_tokens, rng, visit)
	}

	fn walk_with_cap<R, F>(&self, cap: usize, rng: &mut R, mut visit: F) -> Result<(), GenerationError>
	where
		R: RandomSource + ?Sized,
		F: FnMut(GrammarState, &mut R) -> Result<(), GenerationError>,
	{
		let mut state = GrammarState::Start;
		let mut visited = 0;

		loop {
			state = self.advance(state, rng)?;
			if state == GrammarState::End {
				return Ok(());
			}

			if visited == cap {
				warn!("grammar walk exceeded {} tokens, last state {:?}", cap, state);
				return Err(GenerationError::WalkDidNotTerminate { cap });
			}
			visited += 1;

			trace!("visiting {:?}", state);
			visit(state, &mut *rng)?;
		}
	}

	/// The role sequence of one walk, without resolving any words.
	pub fn walk_roles<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<Vec<GrammarState>, GenerationError> {
		let mut roles = Vec::new();
		self.walk_with(rng, |state, _| {
			roles.push(state);
			Ok(())
		})?;
		Ok(roles)
	}

	/// One full walk, resolving each visited role through `lexicon`.
	pub fn walk<R: RandomSource + ?Sized>(
		&self,
		lexicon: &LexiconResolver,
		rng: &mut R,
	) -> Result<GeneratedName, GenerationError> {
		self.walk_capped(lexicon, rng, self.max_tokens)
	}

	/// Like `walk`, with a per-call safety cap instead of the walker's own.
	pub fn walk_capped<R: RandomSource + ?Sized>(
		&self,
		lexicon: &LexiconResolver,
		rng: &mut R,
		cap: usize,
	) -> Result<GeneratedName, GenerationError> {
		let mut tokens = Vec::new();
		self.walk_with_cap(cap, rng, |role, rng| {
			if let Some(entry) = lexicon.resolve(role, rng)? {
				tokens.push(Token { role, entry });
			}
			Ok(())
		})?;
		Ok(GeneratedName::new(tokens))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::lexicon::WordBanks;
	use crate::model::random::{RngSource, ScriptedSource};

	fn row_total(table: &TransitionTable, state: GrammarState) -> f64 {
		table.successors(state).iter().map(|t| t.weight).sum()
	}

	#[test]
	fn standard_table_is_valid() {
		TransitionTable::standard().validate().unwrap();
	}

	#[test]
	fn standard_row_totals() {
		let table = TransitionTable::standard();
		assert_eq!(row_total(&table, GrammarState::Start), 143.0);
		assert_eq!(row_total(&table, GrammarState::Article), 44.0);
		assert_eq!(row_total(&table, GrammarState::Object), 160.0);
		assert_eq!(row_total(&table, GrammarState::Adjective), 47.0);
		assert_eq!(row_total(&table, GrammarState::FirstName), 27.0);
		assert_eq!(row_total(&table, GrammarState::LastName), 16.0);
		assert_eq!(row_total(&table, GrammarState::Place), 34.0);
		assert_eq!(row_total(&table, GrammarState::CollectiveNoun), 32.0);
	}

	#[test]
	fn end_is_absorbing() {
		let walker = GrammarWalker::default();
		let mut rng = RngSource::seeded(1);
		for _ in 0..100 {
			assert_eq!(walker.advance(GrammarState::End, &mut rng).unwrap(), GrammarState::End);
		}
	}

	#[test]
	fn start_frequencies_follow_table() {
		let walker = GrammarWalker::default();
		let mut rng = RngSource::seeded(17);
		let n = 100_000;
		let articles = (0..n)
			.filter(|_| walker.advance(GrammarState::Start, &mut rng).unwrap() == GrammarState::Article)
			.count();
		let expected = n as f64 * 30.0 / 143.0;
		assert!((articles as f64 - expected).abs() < 800.0, "got {articles}, expected ~{expected:.0}");
	}

	#[test]
	fn walks_terminate_well_under_cap() {
		let walker = GrammarWalker::default();
		let mut rng = RngSource::seeded(23);
		for _ in 0..10_000 {
			let roles = walker.walk_roles(&mut rng).unwrap();
			assert!(!roles.is_empty());
			assert!(roles.len() <= DEFAULT_MAX_TOKENS);
			assert!(!roles.contains(&GrammarState::Start));
			assert!(!roles.contains(&GrammarState::End));
		}
	}

	#[test]
	fn subjects_are_followed_by_verbs() {
		let walker = GrammarWalker::default();
		let mut rng = RngSource::seeded(29);
		for _ in 0..5_000 {
			let roles = walker.walk_roles(&mut rng).unwrap();
			for pair in roles.windows(2) {
				if pair[0] == GrammarState::Subject {
					assert!(matches!(pair[1], GrammarState::TransitiveVerb | GrammarState::IntransitiveVerb));
				}
			}
		}
	}

	#[test]
	fn scripted_walk_is_exact() {
		// Start -> Object (0.3), Object -> End (0.9)
		let walker = GrammarWalker::default();
		let mut rng = ScriptedSource::new(vec![0.3, 0.9]);
		assert_eq!(walker.walk_roles(&mut rng).unwrap(), vec![GrammarState::Object]);
	}

	fn looping_table() -> TransitionTable {
		let mut rows: Vec<_> = GrammarState::ALL.iter().map(|&s| (s, vec![(GrammarState::End, 1.0)])).collect();
		rows[0] = (GrammarState::Start, vec![(GrammarState::Object, 1.0)]);
		rows[3] = (GrammarState::Object, vec![(GrammarState::Object, 1.0)]);
		TransitionTable::from_rows(rows)
	}

	#[test]
	fn missing_end_edge_is_caught_by_validate() {
		assert!(matches!(
			looping_table().validate(),
			Err(GenerationError::UnterminatedGrammar { .. })
		));
	}

	#[test]
	fn missing_end_edge_hits_the_cap() {
		let walker = GrammarWalker::new(looping_table());
		assert_eq!(walker.max_tokens(), DEFAULT_MAX_TOKENS);
		let walker = walker.with_max_tokens(50);
		assert_eq!(walker.max_tokens(), 50);
		let mut rng = RngSource::seeded(31);
		assert!(matches!(
			walker.walk_roles(&mut rng),
			Err(GenerationError::WalkDidNotTerminate { cap: 50 })
		));
	}

	#[test]
	fn missing_row_is_invalid_weights() {
		let table = TransitionTable::from_rows([(GrammarState::Start, vec![(GrammarState::End, 1.0)])]);
		assert!(matches!(table.validate(), Err(GenerationError::InvalidWeights(_))));
	}

	#[test]
	fn walked_entries_match_their_roles() {
		let walker = GrammarWalker::default();
		let lexicon = LexiconResolver::new(WordBanks::embedded().unwrap());
		let mut rng = RngSource::seeded(37);
		for _ in 0..2_000 {
			let name = walker.walk(&lexicon, &mut rng).unwrap();
			for token in name.tokens() {
				assert!(token.entry.fits(token.role), "{:?} in slot {:?}", token.entry, token.role);
			}
		}
	}

	#[test]
	fn table_serializes_to_json() {
		let json = serde_json::to_string(&TransitionTable::standard()).unwrap();
		assert!(json.contains("\"CollectiveNoun\""));
	}
}
