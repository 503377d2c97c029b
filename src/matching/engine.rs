use tracing::debug;

use crate::catalog::store::VerseCatalog;
use crate::core::canonical::CanonicalText;
use crate::core::verse::VerseRecord;
use crate::matching::scoring::{MatchScore, ScoringWeights};

/// Default minimum score threshold for matches
pub const DEFAULT_MIN_SCORE: f64 = 0.25;

/// Upper bound callers should clamp `top_n` to
pub const MAX_RESULTS: usize = 5;

/// Clamp a caller-supplied result count into the sane 1..=5 range
#[must_use]
pub fn clamp_top_n(top_n: usize) -> usize {
    top_n.clamp(1, MAX_RESULTS)
}

/// Configuration for the matching engine
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Minimum composite score for including a candidate in results
    pub min_score: f64,
    /// Scoring weights
    pub weights: ScoringWeights,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
            weights: ScoringWeights::default(),
        }
    }
}

/// Result of matching a query against the catalog
#[derive(Debug, Clone)]
pub struct MatchResult {
    /// The matched verse
    pub verse: VerseRecord,

    /// Match score details
    pub score: MatchScore,
}

/// The fuzzy matching engine
///
/// Scores a garbled query against every verse in the catalog and returns the
/// best candidates. Stateless apart from its configuration; a single engine
/// may be shared across threads.
pub struct MatchEngine<'a> {
    catalog: &'a VerseCatalog,
    config: MatchConfig,
}

impl<'a> MatchEngine<'a> {
    /// Create a new engine with default configuration
    pub fn new(catalog: &'a VerseCatalog) -> Self {
        Self {
            catalog,
            config: MatchConfig::default(),
        }
    }

    /// Create a new engine with custom configuration
    pub fn with_config(catalog: &'a VerseCatalog, config: MatchConfig) -> Self {
        Self { catalog, config }
    }

    /// Find the best matching verses for a garbled transliteration.
    ///
    /// Every verse with a non-empty transliteration is scored; candidates
    /// below the threshold are discarded, the rest are sorted by composite
    /// score descending and truncated to `limit`. The sort is stable, so
    /// equal scores keep catalog order.
    ///
    /// An empty result is a successful "nothing matched", never a failure.
    pub fn find_matches(&self, garbled: &str, limit: usize) -> Vec<MatchResult> {
        let query = CanonicalText::normalize(garbled);

        let mut results: Vec<MatchResult> = Vec::new();
        for record in self.catalog.verses() {
            if record.transliteration.is_empty() {
                continue;
            }

            let score = MatchScore::calculate_with_weights(
                &query,
                record.canonical(),
                &self.config.weights,
            );
            if score.composite >= self.config.min_score {
                results.push(MatchResult {
                    verse: record.clone(),
                    score,
                });
            }
        }

        debug!(
            "fuzzy match: {} of {} candidates cleared threshold {}",
            results.len(),
            self.catalog.len(),
            self.config.min_score
        );

        // Stable sort: ties keep catalog order
        results.sort_by(|a, b| {
            b.score
                .composite
                .partial_cmp(&a.score.composite)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        results.truncate(limit);
        results
    }

    /// Find the single best match
    pub fn find_best_match(&self, garbled: &str) -> Option<MatchResult> {
        self.find_matches(garbled, 1).into_iter().next()
    }
}
