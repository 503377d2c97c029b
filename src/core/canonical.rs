use std::collections::HashSet;

use serde::Serialize;

/// Minimum length for a word to count as a keyword
pub const MIN_KEYWORD_LEN: usize = 3;

/// Fold a single lowercased IAST diacritic into its ASCII spelling.
///
/// The table is fixed and deliberately small: long vowels collapse to their
/// short form, retroflex/nasal consonants lose their dots, sibilants become
/// "sh", anusvara becomes "m" and visarga becomes "h". Anything outside the
/// table falls through to the ASCII filter in [`CanonicalText::normalize`].
fn fold_diacritic(c: char) -> Option<&'static str> {
    match c {
        'ā' => Some("a"),
        'ī' => Some("i"),
        'ū' => Some("u"),
        'ṛ' | 'ṝ' => Some("ri"),
        'ṭ' => Some("t"),
        'ḍ' => Some("d"),
        'ṁ' | 'ṃ' => Some("m"),
        'ḥ' => Some("h"),
        'ṣ' | 'ś' => Some("sh"),
        'ṇ' | 'ṅ' | 'ñ' => Some("n"),
        _ => None,
    }
}

/// A transliteration reduced to its comparable form
///
/// Canonical text is lowercase ASCII letters and single spaces only, with no
/// leading or trailing whitespace. It is produced exclusively by
/// [`CanonicalText::normalize`]; there is no other constructor, so any value
/// of this type already satisfies the invariant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct CanonicalText(String);

impl CanonicalText {
    /// Normalize arbitrary transliterated text for fuzzy comparison.
    ///
    /// Steps, in order: lowercase, fold IAST diacritics to ASCII, drop every
    /// character that is not a lowercase ASCII letter or whitespace (this
    /// removes digits, verse markers like `||2-47||`, hyphens and other
    /// punctuation), then collapse whitespace runs and trim.
    ///
    /// Total over all inputs, and idempotent: normalizing canonical text
    /// returns it unchanged.
    #[must_use]
    pub fn normalize(text: &str) -> Self {
        let mut folded = String::with_capacity(text.len());
        for c in text.to_lowercase().chars() {
            if let Some(ascii) = fold_diacritic(c) {
                folded.push_str(ascii);
            } else if c.is_ascii_lowercase() || c.is_whitespace() {
                folded.push(c);
            }
        }

        let mut canonical = String::with_capacity(folded.len());
        for word in folded.split_whitespace() {
            if !canonical.is_empty() {
                canonical.push(' ');
            }
            canonical.push_str(word);
        }

        Self(canonical)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length in bytes; canonical text is ASCII so this is also the
    /// character count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Words of at least [`MIN_KEYWORD_LEN`] characters.
    ///
    /// Short connectives like "te" or "ma" carry no signal for matching and
    /// are excluded.
    #[must_use]
    pub fn keywords(&self) -> HashSet<&str> {
        self.0
            .split(' ')
            .filter(|w| w.len() >= MIN_KEYWORD_LEN)
            .collect()
    }
}

impl AsRef<str> for CanonicalText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CanonicalText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
