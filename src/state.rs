use std::collections::HashSet;

use crate::api::{Contest, Problem};

/// One immutable view of everything the screens render. Fetches and user
/// actions produce [`Event`]s; [`apply`] folds an event into a new snapshot.
/// There is no shared mutable store: the host owns the current snapshot and
/// swaps it wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub catalog: Vec<Problem>,
    pub solved: HashSet<String>,
    pub favorites: HashSet<String>,
    pub handle: Option<String>,
    pub rating: Option<i64>,
    pub contests: Vec<Contest>,
}

/// A completed fetch or explicit user action.
#[derive(Debug, Clone)]
pub enum Event {
    CatalogLoaded(Vec<Problem>),
    SolvedLoaded(HashSet<String>),
    FavoritesLoaded(HashSet<String>),
    HandleLoaded(Option<String>),
    RatingLoaded(i64),
    ContestsLoaded(Vec<Contest>),
    /// Optimistic flip after a remote favorite add/remove.
    FavoriteToggled(String),
    SignedOut,
}

/// Fold one event into a new snapshot. Fetched collections replace their
/// predecessors; they are never merged.
pub fn apply(snapshot: &Snapshot, event: Event) -> Snapshot {
    let mut next = snapshot.clone();
    match event {
        Event::CatalogLoaded(catalog) => next.catalog = catalog,
        Event::SolvedLoaded(solved) => next.solved = solved,
        Event::FavoritesLoaded(favorites) => next.favorites = favorites,
        Event::HandleLoaded(handle) => next.handle = handle,
        Event::RatingLoaded(rating) => next.rating = Some(rating),
        Event::ContestsLoaded(contests) => next.contests = contests,
        Event::FavoriteToggled(id) => {
            if !next.favorites.remove(&id) {
                next.favorites.insert(id);
            }
        }
        Event::SignedOut => next = Snapshot::default(),
    }
    next
}

impl Snapshot {
    pub fn is_favorite(&self, problem_id: &str) -> bool {
        self.favorites.contains(problem_id)
    }

    /// The to-do screen: favorite problems resolved against the catalog, in
    /// catalog order. Favorite ids missing from the catalog are skipped.
    pub fn favorite_problems(&self) -> Vec<Problem> {
        self.catalog
            .iter()
            .filter(|p| self.favorites.contains(&p.id()))
            .cloned()
            .collect()
    }
}
