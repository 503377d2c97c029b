use serde::{Deserialize, Serialize};

/// Unique identifier for a verse in the corpus
///
/// Opaque to the matching engine; callers typically use the canonical
/// reference rendering (e.g. "BG 2.47") but any stable string works.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerseId(pub String);

impl VerseId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VerseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Confidence level for a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Low,
    Medium,
    High,
    Exact,
}

impl Confidence {
    /// Derive a confidence level from a composite score in `[0, 1]`.
    ///
    /// A score of 1.0 means the canonical forms were identical. Garbled
    /// transcriptions of the right verse usually land in the 0.5-0.9 band.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 1.0 {
            Self::Exact
        } else if score >= 0.75 {
            Self::High
        } else if score >= 0.50 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_from_score() {
        assert_eq!(Confidence::from_score(1.0), Confidence::Exact);
        assert_eq!(Confidence::from_score(0.99), Confidence::High);
        assert_eq!(Confidence::from_score(0.75), Confidence::High);
        assert_eq!(Confidence::from_score(0.6), Confidence::Medium);
        assert_eq!(Confidence::from_score(0.49), Confidence::Low);
        assert_eq!(Confidence::from_score(0.0), Confidence::Low);
    }

    #[test]
    fn test_verse_id_display() {
        let id = VerseId::new("BG 2.47");
        assert_eq!(id.to_string(), "BG 2.47");
        assert_eq!(id.as_str(), "BG 2.47");
    }
}
