use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::core::verse::{verse_count, VerseKey, CHAPTER_COUNT};

/// Optional scripture-name prefix: "bg", "gita", "bhagavad gita" or
/// "bhagavad-gita", case-insensitive, with trailing whitespace
static PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:bhagavad[\s-]*gita|gita|bg)\s*").expect("prefix pattern is valid")
});

/// `<digits> <separator> <digits>` with `.`, `:` or `-` as separator and
/// whitespace tolerated around both numbers
static CHAPTER_VERSE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+)\s*[.:-]\s*([0-9]+)").expect("reference pattern is valid"));

#[derive(Error, Debug)]
pub enum ReferenceError {
    #[error("Invalid verse reference: {input:?}")]
    InvalidFormat { input: String },

    #[error("Chapter must be 1-18, got {chapter} in {input:?}")]
    ChapterOutOfRange { input: String, chapter: u32 },

    #[error("Chapter {chapter} has {max} verses, got verse {verse} in {input:?}")]
    VerseOutOfRange {
        input: String,
        chapter: u32,
        verse: u32,
        max: u32,
    },
}

/// Parse a free-form verse reference into a validated [`VerseKey`].
///
/// Accepts forms like `"BG 2.47"`, `"2.47"`, `"2:47"`, `"bg 15-7"`,
/// `"Bhagavad Gita 9.34"` and `"Bhagavad-Gita 9.34"`. Text after the
/// chapter/verse pair is ignored.
///
/// # Errors
///
/// Returns `ReferenceError::InvalidFormat` if no chapter/verse pattern is
/// found, `ReferenceError::ChapterOutOfRange` for chapters outside 1-18, or
/// `ReferenceError::VerseOutOfRange` when the verse exceeds the chapter's
/// count. Errors carry the offending input verbatim.
pub fn parse_reference(reference: &str) -> Result<VerseKey, ReferenceError> {
    let invalid = || ReferenceError::InvalidFormat {
        input: reference.to_string(),
    };

    let text = reference.trim();
    let text = PREFIX_RE.replace(text, "");

    let caps = CHAPTER_VERSE_RE.captures(&text).ok_or_else(invalid)?;

    // Digit groups of this shape only overflow u32 on absurd inputs like a
    // 40-digit chapter; those are malformed references, not range errors.
    let chapter: u32 = caps[1].parse().map_err(|_| invalid())?;
    let verse: u32 = caps[2].parse().map_err(|_| invalid())?;

    if !(1..=CHAPTER_COUNT).contains(&chapter) {
        return Err(ReferenceError::ChapterOutOfRange {
            input: reference.to_string(),
            chapter,
        });
    }

    let max = verse_count(chapter).unwrap_or(0);
    if !(1..=max).contains(&verse) {
        return Err(ReferenceError::VerseOutOfRange {
            input: reference.to_string(),
            chapter,
            verse,
            max,
        });
    }

    Ok(VerseKey { chapter, verse })
}
