//! # verse-solver
//!
//! A library for identifying Bhagavad Gita verses from garbled Sanskrit
//! transliterations.
//!
//! Sanskrit quoted in lecture transcripts and subtitles rarely survives
//! intact: diacritics are dropped, words are split or fused, and phonetic
//! spelling drifts ("mad-bhākto" for "madbhakto"). `verse-solver` matches
//! such fragments against a corpus of canonical transliterations, and parses
//! loosely-formatted citations like "bg 2:47" into validated chapter/verse
//! keys.
//!
//! ## Features
//!
//! - **Normalization**: folds IAST diacritics to ASCII and strips
//!   punctuation, digits and verse markers before comparison
//! - **Fuzzy matching**: combines a diff-style character-alignment ratio
//!   with keyword overlap, weighted 60/40
//! - **Reference parsing**: accepts `.`, `:` or `-` separators and several
//!   scripture-name prefixes, validating against the fixed per-chapter
//!   verse-count table
//!
//! All operations are pure and deterministic: no I/O, no shared mutable
//! state, safe to call concurrently from any number of threads.
//!
//! ## Example
//!
//! ```rust
//! use verse_solver::{MatchEngine, VerseCatalog, VerseRecord};
//! use verse_solver::parsing::parse_reference;
//!
//! let catalog = VerseCatalog::from_records(vec![
//!     VerseRecord::new("BG 2.47", "karmaṇyevādhikāraste mā phaleṣu kadācana"),
//!     VerseRecord::new("BG 9.34", "manmanā bhava madbhakto madyājī māṁ namaskuru"),
//! ]);
//!
//! // Match a garbled transcript fragment
//! let engine = MatchEngine::new(&catalog);
//! let matches = engine.find_matches("man manā bhava mad-bhākto mad-yajī", 3);
//! assert_eq!(matches[0].verse.id.as_str(), "BG 9.34");
//!
//! // Parse a human-typed citation into the canonical key
//! let key = parse_reference("bg 2:47").unwrap();
//! assert_eq!(key.to_string(), "BG 2.47");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Canonical text, verse records and keys
//! - [`catalog`]: Verse corpus storage
//! - [`matching`]: Matching engine and scoring algorithms
//! - [`parsing`]: Verse reference parser

pub mod catalog;
pub mod core;
pub mod matching;
pub mod parsing;

// Re-export commonly used types for convenience
pub use catalog::store::VerseCatalog;
pub use core::canonical::CanonicalText;
pub use core::types::{Confidence, VerseId};
pub use core::verse::{VerseKey, VerseRecord};
pub use matching::engine::{MatchConfig, MatchEngine, MatchResult};
pub use matching::scoring::{score_match, MatchScore, ScoringWeights};
pub use parsing::reference::{parse_reference, ReferenceError};
