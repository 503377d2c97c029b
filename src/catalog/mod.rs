//! Verse corpus storage.
//!
//! The catalog holds every known (identifier, transliteration) pair available
//! for matching. Iteration order is insertion order, and the matching engine
//! relies on it: candidates with equal scores are returned in catalog order.
//!
//! ## Example
//!
//! ```rust
//! use verse_solver::{VerseCatalog, VerseRecord};
//! use verse_solver::core::VerseId;
//!
//! let catalog = VerseCatalog::from_records(vec![
//!     VerseRecord::new("BG 2.47", "karmaṇyevādhikāraste mā phaleṣu kadācana"),
//!     VerseRecord::new("BG 9.34", "manmanā bhava madbhakto madyājī māṁ namaskuru"),
//! ]);
//!
//! assert_eq!(catalog.len(), 2);
//! assert!(catalog.get(&VerseId::new("BG 9.34")).is_some());
//! ```
//!
//! Catalogs can also be loaded from a JSON document of the form
//! `{"verses": [{"id": "...", "transliteration": "..."}, ...]}` via
//! [`VerseCatalog::from_json`].

pub mod store;

pub use store::{CatalogError, VerseCatalog};
