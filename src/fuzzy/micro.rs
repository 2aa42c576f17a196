// File: src/fuzzy/micro.rs

/// Outcome of matching a query against a candidate string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FuzzyResult {
    /// The query was consumed without ever skipping a character.
    Concrete,
    /// The query was consumed as a non-contiguous subsequence.
    Fuzzy { score: f64 },
    NoMatch,
}

impl FuzzyResult {
    pub fn is_match(self) -> bool {
        !matches!(self, FuzzyResult::NoMatch)
    }

    pub fn is_concrete(self) -> bool {
        matches!(self, FuzzyResult::Concrete)
    }

    pub fn is_fuzzy(self) -> bool {
        matches!(self, FuzzyResult::Fuzzy { .. })
    }

    /// Concrete matches always pass; fuzzy ones need a score strictly above
    /// `min_match_score`.
    pub fn accepted(self, min_match_score: f64) -> bool {
        match self {
            FuzzyResult::Concrete => true,
            FuzzyResult::Fuzzy { score } => score > min_match_score,
            FuzzyResult::NoMatch => false,
        }
    }
}

/// Single-pass subsequence matcher.
///
/// Scans `value` once while walking `query`. Every finished run of
/// consecutive hits (a "combo") adds `2^len` to the score, so one long run
/// beats many scattered hits. A fuzzy score is normalized by the character
/// length of `value`. Case-sensitive; callers lower-case beforehand.
pub fn micro_fuzzy(value: &str, query: &str) -> FuzzyResult {
    let query: Vec<char> = query.chars().collect();
    if query.is_empty() {
        return FuzzyResult::Concrete;
    }

    let mut i = 0;
    let mut last_match: Option<usize> = None;
    let mut gapped = false;
    let mut combo: i32 = 0;
    let mut seed = 0.0_f64;

    for (j, c) in value.chars().enumerate() {
        if i < query.len() && c == query[i] {
            if matches!(last_match, Some(prev) if j - prev > 1) {
                gapped = true;
            }
            last_match = Some(j);
            i += 1;
            combo += 1;
        } else if combo > 0 {
            seed += 2f64.powi(combo);
            combo = 0;
        }

        if i == query.len() {
            if !gapped {
                return FuzzyResult::Concrete;
            }
            if combo > 0 {
                seed += 2f64.powi(combo);
            }
            let value_len = value.chars().count();
            return FuzzyResult::Fuzzy { score: seed / value_len as f64 };
        }
    }

    FuzzyResult::NoMatch
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contiguous_prefix_is_concrete() {
        assert_eq!(micro_fuzzy("abcde", "abc"), FuzzyResult::Concrete);
    }

    #[test]
    fn test_contiguous_substring_is_concrete() {
        assert_eq!(micro_fuzzy("abcde", "cd"), FuzzyResult::Concrete);
    }

    #[test]
    fn test_gap_is_fuzzy_with_combo_score() {
        // b (combo 1, ends at c) + d (combo 1, ends at exhaustion) = 2 + 2
        match micro_fuzzy("abcde", "bd") {
            FuzzyResult::Fuzzy { score } => assert!((score - 0.8).abs() < 1e-9),
            other => panic!("expected fuzzy, got {:?}", other),
        }
    }

    #[test]
    fn test_long_combo_outscores_scattered_hits() {
        let long = micro_fuzzy("abcxd", "abcd");
        let scattered = micro_fuzzy("axbxc", "abc");
        match (long, scattered) {
            (FuzzyResult::Fuzzy { score: a }, FuzzyResult::Fuzzy { score: b }) => assert!(a > b),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_not_a_subsequence() {
        assert_eq!(micro_fuzzy("abc", "ca"), FuzzyResult::NoMatch);
        assert_eq!(micro_fuzzy("ab", "abc"), FuzzyResult::NoMatch);
        assert_eq!(micro_fuzzy("", "a"), FuzzyResult::NoMatch);
    }

    #[test]
    fn test_empty_query_matches() {
        assert_eq!(micro_fuzzy("", ""), FuzzyResult::Concrete);
        assert_eq!(micro_fuzzy("abc", ""), FuzzyResult::Concrete);
    }

    #[test]
    fn test_unicode_scalar_positions() {
        assert_eq!(micro_fuzzy("日本語入力", "語入"), FuzzyResult::Concrete);
        assert!(micro_fuzzy("日本語入力", "日語").is_fuzzy());
    }

    #[test]
    fn test_acceptance_threshold() {
        let result = micro_fuzzy("abcde", "bd");
        assert!(result.accepted(0.0));
        assert!(!result.accepted(1.0));
        assert!(FuzzyResult::Concrete.accepted(100.0));
        assert!(!FuzzyResult::NoMatch.accepted(-1.0));
        assert!(result.is_match());
        assert!(!FuzzyResult::NoMatch.is_match());
    }
}
