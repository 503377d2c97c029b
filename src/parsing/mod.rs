//! Verse reference parsing.
//!
//! Turns loosely-formatted human citations into validated [`VerseKey`]s:
//!
//! | Input | Key |
//! |-------|-----|
//! | `BG 2.47` | chapter 2, verse 47 |
//! | `2:47` | chapter 2, verse 47 |
//! | `bg 15-7` | chapter 15, verse 7 |
//! | `Bhagavad-Gita 9.34` | chapter 9, verse 34 |
//!
//! Chapter and verse are validated against the fixed per-chapter verse-count
//! table; failures are typed and carry the offending input. The canonical
//! rendering is `VerseKey`'s `Display` (`"BG 2.47"`), which `parse_reference`
//! inverts for every valid key.
//!
//! [`VerseKey`]: crate::core::verse::VerseKey

pub mod reference;

pub use reference::{parse_reference, ReferenceError};
