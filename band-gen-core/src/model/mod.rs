//! Top-level module for the band-name generation system.
//!
//! Components, leaf-first:
//! - Weighted index selection (`weighted`) and pluggable randomness (`random`)
//! - Nonsense-word synthesis (`synthesizer`)
//! - Lexical entries and word banks (`entry`, `lexicon`)
//! - The role grammar and its walker (`grammar`)
//! - Surface rendering and capitalization (`render`)
//! - A high-level generation interface (`generator`, `settings`)

/// High-level interface: owns banks and grammar, generates names and batches.
pub mod generator;

/// Grammar states, the weighted transition table, and the walker.
pub mod grammar;

/// Tagged lexical entries and the token sequence of one name.
pub mod entry;

/// Word banks and the per-role lexical accessors.
pub mod lexicon;

/// Random-source trait plus `rand`-backed and scripted implementations.
pub mod random;

/// Role-to-surface mapping and Unicode-aware word capitalization.
pub mod render;

/// Batch size, seed and walk cap for `Generator::generate_batch`.
pub mod settings;

/// Phonotactic nonsense-word generator.
pub mod synthesizer;

/// Weighted random index selection.
pub mod weighted;
