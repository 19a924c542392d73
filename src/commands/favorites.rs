use std::collections::HashSet;

use crate::auth::AuthSession;
use crate::error::CompanionError;
use crate::state::{Event, Snapshot};

use super::Companion;

/// Fetch the favorite problem ids from the user document. Signed out means
/// an empty set.
pub async fn load_favorites(
    companion: &Companion,
    session: Option<&AuthSession>,
) -> Result<HashSet<String>, CompanionError> {
    let session = match session {
        Some(s) => s,
        None => return Ok(HashSet::new()),
    };
    let document = companion.store.get(&session.uid, &session.id_token).await?;
    Ok(document.favorite_problems.into_iter().collect())
}

/// Flip a problem's favorite status: remote add/remove first, then the
/// optimistic local event. The remote write is last-write-wins; if it fails
/// the snapshot stays as it was.
pub async fn toggle_favorite(
    companion: &Companion,
    session: Option<&AuthSession>,
    snapshot: &Snapshot,
    problem_id: &str,
) -> Result<Event, CompanionError> {
    let session = session.ok_or(CompanionError::NotSignedIn)?;
    if snapshot.is_favorite(problem_id) {
        companion
            .store
            .remove_favorite(&session.uid, problem_id, &session.id_token)
            .await?;
    } else {
        companion
            .store
            .add_favorite(&session.uid, problem_id, &session.id_token)
            .await?;
    }
    Ok(Event::FavoriteToggled(problem_id.to_string()))
}
