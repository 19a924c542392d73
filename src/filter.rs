use std::collections::{BTreeSet, HashSet};

use crate::api::Problem;

/// Search controls for the problem list: a tag set and an inclusive
/// difficulty range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterParams {
    pub tags: BTreeSet<String>,
    pub min_difficulty: i64,
    pub max_difficulty: i64,
}

impl Default for FilterParams {
    /// Initial search controls in the problem list screen.
    fn default() -> Self {
        Self {
            tags: BTreeSet::from(["dp".to_string()]),
            min_difficulty: 1500,
            max_difficulty: 2000,
        }
    }
}

/// Narrow the catalog to the displayed subset.
///
/// With an empty tag set the result is the last 50 catalog entries (catalog
/// order) minus solved ones; the difficulty range is ignored on this branch
/// and unrated problems stay eligible. With tags present, a problem is kept
/// when it has a rating, carries every requested tag, the rating falls
/// inside the range, and it is not already solved. Recomputed in full on
/// every call.
pub fn filter_problems(
    catalog: &[Problem],
    params: &FilterParams,
    solved: &HashSet<String>,
) -> Vec<Problem> {
    if params.tags.is_empty() {
        let tail_start = catalog.len().saturating_sub(50);
        return catalog[tail_start..]
            .iter()
            .filter(|p| !solved.contains(&p.id()))
            .cloned()
            .collect();
    }

    catalog
        .iter()
        .filter(|p| {
            let rating = match p.rating {
                Some(r) => r,
                None => return false,
            };
            rating >= params.min_difficulty
                && rating <= params.max_difficulty
                && params.tags.iter().all(|t| p.tags.iter().any(|pt| pt == t))
                && !solved.contains(&p.id())
        })
        .cloned()
        .collect()
}
