//! Fuzzy matching engine and scoring algorithms.
//!
//! This module matches garbled, phonetically-transcribed Sanskrit against a
//! catalog of canonical transliterations:
//!
//! - [`MatchEngine`]: Main entry point for finding verse matches
//! - [`MatchScore`]: Detailed similarity scores between a query and a verse
//! - [`ScoringWeights`]: Configurable component weights
//!
//! ## Scoring
//!
//! Both sides are reduced to canonical form first, then two components are
//! combined:
//!
//! - **Sequence ratio** (weight 0.6): character-alignment ratio in the
//!   classic diff/ratio family, `2·M / T` over the canonical strings
//! - **Keyword overlap** (weight 0.4): fraction of the query's words of
//!   three or more letters that appear in the candidate. Asymmetric, so a
//!   short fragment can still fully overlap a long verse
//!
//! ## Example
//!
//! ```rust
//! use verse_solver::{MatchEngine, VerseCatalog, VerseRecord};
//!
//! let catalog = VerseCatalog::from_records(vec![
//!     VerseRecord::new("BG 9.34", "manmanā bhava madbhakto madyājī māṁ namaskuru"),
//! ]);
//!
//! let engine = MatchEngine::new(&catalog);
//! let matches = engine.find_matches("man manā bhava mad-bhākto", 3);
//!
//! assert_eq!(matches[0].verse.id.as_str(), "BG 9.34");
//! ```

pub mod engine;
pub mod scoring;

pub use engine::{MatchConfig, MatchEngine, MatchResult};
pub use scoring::{score_match, MatchScore, ScoringWeights};
