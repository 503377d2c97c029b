use serde::{Deserialize, Serialize};

use crate::core::canonical::CanonicalText;
use crate::core::types::VerseId;

/// Canonical two-letter scripture abbreviation used in reference strings
pub const SCRIPTURE_ABBREV: &str = "BG";

/// Number of chapters in the Bhagavad Gita
pub const CHAPTER_COUNT: u32 = 18;

/// Verse counts per chapter, indexed by `chapter - 1`
///
/// Fixed at compile time; this table is the single source of truth for
/// reference validation.
pub const CHAPTER_VERSE_COUNTS: [u32; CHAPTER_COUNT as usize] = [
    47, 72, 43, 42, 29, 47, 30, 28, 34, 42, 55, 20, 35, 27, 20, 24, 28, 78,
];

/// Number of verses in the given chapter, or `None` for chapters outside
/// 1-18.
#[must_use]
pub fn verse_count(chapter: u32) -> Option<u32> {
    if (1..=CHAPTER_COUNT).contains(&chapter) {
        Some(CHAPTER_VERSE_COUNTS[(chapter - 1) as usize])
    } else {
        None
    }
}

/// A validated chapter/verse pair
///
/// The canonical rendering via [`Display`](std::fmt::Display) is
/// `"BG <chapter>.<verse>"`: a space after the abbreviation and a period
/// between the numbers. This exact form is stable and intended for use as a
/// lookup key; [`parse_reference`](crate::parsing::reference::parse_reference)
/// inverts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerseKey {
    pub chapter: u32,
    pub verse: u32,
}

impl VerseKey {
    pub fn new(chapter: u32, verse: u32) -> Self {
        Self { chapter, verse }
    }
}

impl std::fmt::Display for VerseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{SCRIPTURE_ABBREV} {}.{}", self.chapter, self.verse)
    }
}

/// A corpus entry: verse identifier plus its canonical transliteration
///
/// The transliteration may be empty when the source had none; the matching
/// engine skips such records. The canonical form used for scoring is
/// precomputed once and rebuilt after deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerseRecord {
    /// Stable identifier, e.g. the canonical reference "BG 2.47"
    pub id: VerseId,

    /// IAST transliteration as published
    #[serde(default)]
    pub transliteration: String,

    // === Precomputed for matching ===
    #[serde(skip)]
    canonical: CanonicalText,
}

impl VerseRecord {
    pub fn new(id: impl Into<String>, transliteration: impl Into<String>) -> Self {
        let mut record = Self {
            id: VerseId::new(id),
            transliteration: transliteration.into(),
            canonical: CanonicalText::default(),
        };
        record.rebuild_index();
        record
    }

    /// Recompute the canonical form after the transliteration changes or
    /// after deserialization.
    pub fn rebuild_index(&mut self) {
        self.canonical = CanonicalText::normalize(&self.transliteration);
    }

    /// The precomputed canonical form of the transliteration
    #[must_use]
    pub fn canonical(&self) -> &CanonicalText {
        &self.canonical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chapter_table_shape() {
        assert_eq!(CHAPTER_VERSE_COUNTS.len(), 18);
        assert_eq!(CHAPTER_VERSE_COUNTS[0], 47);
        assert_eq!(CHAPTER_VERSE_COUNTS[17], 78);
        assert_eq!(CHAPTER_VERSE_COUNTS.iter().sum::<u32>(), 701);
    }

    #[test]
    fn test_verse_count_bounds() {
        assert_eq!(verse_count(1), Some(47));
        assert_eq!(verse_count(18), Some(78));
        assert_eq!(verse_count(0), None);
        assert_eq!(verse_count(19), None);
    }

    #[test]
    fn test_verse_key_display() {
        assert_eq!(VerseKey::new(2, 47).to_string(), "BG 2.47");
        assert_eq!(VerseKey::new(18, 78).to_string(), "BG 18.78");
    }

    #[test]
    fn test_record_precomputes_canonical() {
        let record = VerseRecord::new("BG 9.34", "manmanā bhava madbhakto");
        assert_eq!(record.canonical().as_str(), "manmana bhava madbhakto");
    }

    #[test]
    fn test_record_rebuild_after_deserialize() {
        let json = r#"{"id": "BG 9.34", "transliteration": "manmanā bhava"}"#;
        let mut record: VerseRecord = serde_json::from_str(json).unwrap();
        assert!(record.canonical().is_empty());
        record.rebuild_index();
        assert_eq!(record.canonical().as_str(), "manmana bhava");
    }

    #[test]
    fn test_record_empty_transliteration() {
        let record = VerseRecord::new("BG 1.1", "");
        assert!(record.canonical().is_empty());
    }
}
