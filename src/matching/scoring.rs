use crate::core::canonical::CanonicalText;
use crate::core::types::Confidence;

/// Safely convert usize to f64 for ratio calculations
///
/// Canonical verse texts are far inside the f64 mantissa range, so the
/// precision loss allowed here can never be observed.
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Configurable weights for the two scoring components
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ScoringWeights {
    /// Weight for the character-alignment sequence ratio
    pub sequence: f64,
    /// Weight for the query keyword overlap
    pub keyword: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            sequence: 0.6, // 60%
            keyword: 0.4,  // 40%
        }
    }
}

impl ScoringWeights {
    /// Normalize weights to sum to 1.0
    #[must_use]
    pub fn normalized(&self) -> Self {
        let total = self.sequence + self.keyword;

        if total <= 0.0 {
            return Self::default();
        }

        Self {
            sequence: self.sequence / total,
            keyword: self.keyword / total,
        }
    }
}

/// Detailed similarity scores between a query and a candidate verse
#[derive(Debug, Clone)]
pub struct MatchScore {
    /// Character-alignment ratio over the canonical forms: `2·M / T` where
    /// `M` is the matched character count and `T` the combined length
    pub sequence: f64,

    /// Fraction of the query's keywords present in the candidate.
    /// Asymmetric on purpose: a short garbled fragment should score well
    /// against a full verse containing it.
    pub keyword: f64,

    /// Weighted composite score in `[0, 1]`
    pub composite: f64,

    /// Confidence level derived from the composite
    pub confidence: Confidence,
}

impl MatchScore {
    /// Calculate the match score between two canonical forms
    #[must_use]
    pub fn calculate(query: &CanonicalText, candidate: &CanonicalText) -> Self {
        Self::calculate_with_weights(query, candidate, &ScoringWeights::default())
    }

    /// Calculate the match score with custom scoring weights
    #[must_use]
    pub fn calculate_with_weights(
        query: &CanonicalText,
        candidate: &CanonicalText,
        weights: &ScoringWeights,
    ) -> Self {
        if query.is_empty() || candidate.is_empty() {
            return Self::zero();
        }

        let sequence = sequence_ratio(query.as_str().as_bytes(), candidate.as_str().as_bytes());
        let keyword = keyword_overlap(query, candidate);

        let normalized = weights.normalized();
        let composite =
            (normalized.sequence * sequence + normalized.keyword * keyword).clamp(0.0, 1.0);

        Self {
            sequence,
            keyword,
            composite,
            confidence: Confidence::from_score(composite),
        }
    }

    fn zero() -> Self {
        Self {
            sequence: 0.0,
            keyword: 0.0,
            composite: 0.0,
            confidence: Confidence::Low,
        }
    }
}

/// Combined similarity between a raw query and a raw candidate.
///
/// Both inputs are normalized first; empty canonical forms score 0.0. Never
/// fails, and the result is always in `[0, 1]`.
#[must_use]
pub fn score_match(query: &str, candidate: &str) -> f64 {
    let query = CanonicalText::normalize(query);
    let candidate = CanonicalText::normalize(candidate);
    MatchScore::calculate(&query, &candidate).composite
}

/// Fraction of the query's keywords that appear in the candidate:
/// `|Q ∩ C| / |Q|`, or 0.0 when the query has no keywords.
fn keyword_overlap(query: &CanonicalText, candidate: &CanonicalText) -> f64 {
    let query_keywords = query.keywords();
    if query_keywords.is_empty() {
        return 0.0;
    }

    let candidate_keywords = candidate.keywords();
    let hits = query_keywords.intersection(&candidate_keywords).count();
    count_to_f64(hits) / count_to_f64(query_keywords.len())
}

/// Character-alignment ratio in the classic diff/ratio family: greedy
/// longest-matching-block decomposition, then `2·M / T`.
///
/// 1.0 iff the inputs are identical; 0.0 when they share nothing.
fn sequence_ratio(a: &[u8], b: &[u8]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * count_to_f64(matching_bytes(a, b)) / count_to_f64(total)
}

/// Total size of the greedy matching-block decomposition.
///
/// Repeatedly takes the longest common block in a range, then recurses into
/// the regions before and after it (iteratively, via an explicit worklist).
fn matching_bytes(a: &[u8], b: &[u8]) -> usize {
    let mut matched = 0;
    let mut ranges = vec![(0, a.len(), 0, b.len())];

    while let Some((a_lo, a_hi, b_lo, b_hi)) = ranges.pop() {
        let (i, j, size) = longest_match(a, b, a_lo, a_hi, b_lo, b_hi);
        if size == 0 {
            continue;
        }
        matched += size;

        if a_lo < i && b_lo < j {
            ranges.push((a_lo, i, b_lo, j));
        }
        if i + size < a_hi && j + size < b_hi {
            ranges.push((i + size, a_hi, j + size, b_hi));
        }
    }

    matched
}

/// Longest common block of `a[a_lo..a_hi]` and `b[b_lo..b_hi]`.
///
/// Returns `(a_start, b_start, size)`; ties go to the earliest start in `a`,
/// then in `b`. `j2len[j]` holds the length of the common run ending at the
/// current `a` row and column `j`.
fn longest_match(
    a: &[u8],
    b: &[u8],
    a_lo: usize,
    a_hi: usize,
    b_lo: usize,
    b_hi: usize,
) -> (usize, usize, usize) {
    let mut best_i = a_lo;
    let mut best_j = b_lo;
    let mut best_size = 0;

    let mut j2len = vec![0usize; b_hi.saturating_sub(b_lo)];

    for i in a_lo..a_hi {
        let mut prev = 0;
        for j in b_lo..b_hi {
            let current = j2len[j - b_lo];
            if a[i] == b[j] {
                let run = prev + 1;
                j2len[j - b_lo] = run;
                if run > best_size {
                    best_i = i + 1 - run;
                    best_j = j + 1 - run;
                    best_size = run;
                }
            } else {
                j2len[j - b_lo] = 0;
            }
            prev = current;
        }
    }

    (best_i, best_j, best_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_ratio_identical() {
        assert!((sequence_ratio(b"karmany", b"karmany") - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sequence_ratio_disjoint() {
        assert!((sequence_ratio(b"abc", b"xyz") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sequence_ratio_partial() {
        // "abcd" vs "bcde": block "bcd" matches, ratio = 2*3/8
        let ratio = sequence_ratio(b"abcd", b"bcde");
        assert!((ratio - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_longest_match_prefers_earliest() {
        // "ab" occurs twice in b; the first occurrence wins
        let (i, j, size) = longest_match(b"ab", b"xabyab", 0, 2, 0, 6);
        assert_eq!((i, j, size), (0, 1, 2));
    }

    #[test]
    fn test_matching_bytes_split_blocks() {
        // "abXcd" vs "abYcd": blocks "ab" and "cd"
        assert_eq!(matching_bytes(b"abXcd", b"abYcd"), 4);
    }

    #[test]
    fn test_score_exact_match() {
        let score = score_match("karmaṇyevādhikāraste", "karmaṇyevādhikāraste");
        assert!((score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_score_empty_inputs() {
        assert!((score_match("", "anything") - 0.0).abs() < f64::EPSILON);
        assert!((score_match("anything", "") - 0.0).abs() < f64::EPSILON);
        assert!((score_match("", "") - 0.0).abs() < f64::EPSILON);
        // Normalizes to empty even though the input is not
        assert!((score_match("||2-47||", "karmaṇy") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_score_garbled_bg_9_34() {
        let garbled = "man manā bhava mad-bhākto mad-yajī mam namāskuru";
        let correct = "manmanā bhava madbhakto madyājī māṁ namaskuru";
        assert!(score_match(garbled, correct) > 0.5);
    }

    #[test]
    fn test_score_garbled_bg_2_47() {
        let garbled = "kārama-ñeva-dhikāra-ste māpaleṣu-dhikāṣṭhana";
        let correct = "karmaṇyevādhikāraste mā phaleṣu kadācana";
        assert!(score_match(garbled, correct) > 0.25);
    }

    #[test]
    fn test_score_is_asymmetric() {
        // Every keyword of the short query appears in the long candidate,
        // but not vice versa, so the direction matters.
        let short = "manmanā bhava";
        let long = "manmanā bhava madbhakto madyājī";
        let forward = score_match(short, long);
        let backward = score_match(long, short);
        assert!(forward > backward);
    }

    #[test]
    fn test_score_bounded() {
        let pairs = [
            ("karmaṇy evādhikāras te", "mā phaleṣu kadācana"),
            ("a", "a very long candidate with many words"),
            ("zzzzz", "karmaṇyevādhikāraste"),
        ];
        for (q, c) in pairs {
            let score = score_match(q, c);
            assert!((0.0..=1.0).contains(&score), "score {score} out of range");
        }
    }

    #[test]
    fn test_keyword_overlap_no_keywords() {
        // Canonical "om" is non-empty but below the keyword length cutoff
        let q = CanonicalText::normalize("om");
        let c = CanonicalText::normalize("om tat sat");
        assert!((keyword_overlap(&q, &c) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_weights_normalized() {
        let weights = ScoringWeights {
            sequence: 3.0,
            keyword: 1.0,
        };
        let normalized = weights.normalized();
        assert!((normalized.sequence - 0.75).abs() < 1e-9);
        assert!((normalized.keyword - 0.25).abs() < 1e-9);

        // Degenerate weights fall back to the defaults
        let zero = ScoringWeights {
            sequence: 0.0,
            keyword: 0.0,
        };
        let normalized = zero.normalized();
        assert!((normalized.sequence - 0.6).abs() < 1e-9);
        assert!((normalized.keyword - 0.4).abs() < 1e-9);
    }
}
