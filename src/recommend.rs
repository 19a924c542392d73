use rand::seq::SliceRandom;
use rand::Rng;

use crate::api::Problem;

/// Number of problems sampled per band.
pub const BAND_SIZE: usize = 3;

/// Relative-difficulty band around a user rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Easy,
    Medium,
    Hard,
}

impl Band {
    /// Inclusive difficulty range for this band at the given rating.
    pub fn range(&self, rating: i64) -> (i64, i64) {
        match self {
            Band::Easy => (rating - 300, rating - 200),
            Band::Medium => (rating - 100, rating + 100),
            Band::Hard => (rating + 200, rating + 300),
        }
    }
}

/// The personalized "For You" view: up to three problems per band.
#[derive(Debug, Clone, Default)]
pub struct Recommendations {
    pub easy: Vec<Problem>,
    pub medium: Vec<Problem>,
    pub hard: Vec<Problem>,
}

/// Sample recommendations with the thread-local RNG. Output membership and
/// order vary between calls with identical inputs.
pub fn recommend(catalog: &[Problem], rating: i64) -> Recommendations {
    recommend_with(catalog, rating, &mut rand::rng())
}

/// Sample recommendations with a caller-supplied RNG, so tests can seed one.
/// Each band is a uniform sample without replacement of size
/// `min(3, |band|)` from the rated problems inside the band's range; unrated
/// problems never qualify.
pub fn recommend_with<R: Rng + ?Sized>(
    catalog: &[Problem],
    rating: i64,
    rng: &mut R,
) -> Recommendations {
    Recommendations {
        easy: sample_band(catalog, Band::Easy.range(rating), rng),
        medium: sample_band(catalog, Band::Medium.range(rating), rng),
        hard: sample_band(catalog, Band::Hard.range(rating), rng),
    }
}

fn sample_band<R: Rng + ?Sized>(
    catalog: &[Problem],
    (lo, hi): (i64, i64),
    rng: &mut R,
) -> Vec<Problem> {
    let mut band: Vec<Problem> = catalog
        .iter()
        .filter(|p| p.rating.is_some_and(|r| r >= lo && r <= hi))
        .cloned()
        .collect();
    band.shuffle(rng);
    band.truncate(BAND_SIZE);
    band
}
