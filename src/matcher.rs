// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fuzzy ranking of stored paths against a partial query.
//!
//! Paths are scored as fuzzy subsequence matches, the best-scoring few are
//! kept, and among those the heaviest stored weight wins.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use serde::Serialize;

use crate::store::WeightStore;

/// Returned when nothing usable matches: "stay where you are"
pub const SENTINEL: &str = ".";

/// Number of top-scoring candidates considered for weight selection
pub const DEFAULT_CANDIDATE_LIMIT: usize = 10;

/// A stored path that matched the current query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    pub path: String,
    /// Fuzzy alignment score, higher is better
    pub score: i64,
    /// Weight looked up from the store
    pub weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matcher {
    limit: usize,
    case_sensitive: bool,
}

impl Default for Matcher {
    fn default() -> Self {
        Self {
            limit: DEFAULT_CANDIDATE_LIMIT,
            case_sensitive: false,
        }
    }
}

impl Matcher {
    /// `limit` is clamped to at least one candidate.
    pub fn new(limit: usize, case_sensitive: bool) -> Self {
        Self {
            limit: limit.max(1),
            case_sensitive,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    fn engine(&self) -> SkimMatcherV2 {
        let engine = SkimMatcherV2::default();
        if self.case_sensitive {
            engine.respect_case()
        } else {
            engine.ignore_case()
        }
    }

    /// Score every stored path against `query` and keep the best `limit`.
    ///
    /// Equal scores fall back to the shorter path, then lexical order.
    pub fn rank(&self, query: &str, store: &WeightStore) -> Vec<Candidate> {
        if query.trim().is_empty() || store.is_empty() {
            return Vec::new();
        }

        let engine = self.engine();
        let mut candidates: Vec<Candidate> = store
            .iter()
            .filter_map(|(path, weight)| {
                engine.fuzzy_match(path, query).map(|score| Candidate {
                    path: path.to_string(),
                    score,
                    weight,
                })
            })
            .collect();

        candidates.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.path.len().cmp(&b.path.len()))
                .then_with(|| a.path.cmp(&b.path))
        });
        candidates.truncate(self.limit);

        tracing::debug!(query, matched = candidates.len(), "ranked candidates");
        candidates
    }

    /// Best jump target for `query`, or [`SENTINEL`].
    pub fn resolve(&self, query: &str, store: &WeightStore) -> String {
        let candidates = self.rank(query, store);
        match Self::best(&candidates) {
            Some(best) => best.path.clone(),
            None => SENTINEL.to_string(),
        }
    }

    /// First candidate holding the strictly greatest positive weight.
    ///
    /// Candidates whose weight is 0 are never selected, so a set made only of
    /// once-visited paths yields `None`.
    pub fn best(candidates: &[Candidate]) -> Option<&Candidate> {
        let mut best = None;
        let mut max_weight = 0.0;
        for candidate in candidates {
            if candidate.weight > max_weight {
                max_weight = candidate.weight;
                best = Some(candidate);
            }
        }
        best
    }
}
