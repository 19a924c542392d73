use std::collections::HashSet;

use tracing::info;

use crate::api::Problem;
use crate::auth::AuthSession;
use crate::error::CompanionError;

use super::Companion;

/// Fetch the full catalog for the problem list screen.
pub async fn load_catalog(companion: &Companion) -> Result<Vec<Problem>, CompanionError> {
    companion.api.fetch_problems().await
}

/// Fetch the signed-in user's solved set: document → handle → submission
/// history. Being signed out, or having no handle linked yet, yields an
/// empty set rather than an error — the list simply shows everything.
pub async fn load_solved(
    companion: &Companion,
    session: Option<&AuthSession>,
) -> Result<HashSet<String>, CompanionError> {
    let session = match session {
        Some(s) => s,
        None => {
            info!("Not signed in, solved set is empty");
            return Ok(HashSet::new());
        }
    };
    let document = companion.store.get(&session.uid, &session.id_token).await?;
    if document.codeforces_handle.is_empty() {
        info!("No handle linked for {}, solved set is empty", session.uid);
        return Ok(HashSet::new());
    }
    companion
        .api
        .fetch_solved_ids(&document.codeforces_handle)
        .await
}
