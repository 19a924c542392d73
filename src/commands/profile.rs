use crate::api::UserInfo;
use crate::auth::AuthSession;
use crate::error::CompanionError;

use super::Companion;

/// The profile screen: linked handle → public profile. `None` when signed
/// out or when no handle is linked yet.
pub async fn load_profile(
    companion: &Companion,
    session: Option<&AuthSession>,
) -> Result<Option<UserInfo>, CompanionError> {
    let handle = match linked_handle(companion, session).await? {
        Some(h) => h,
        None => return Ok(None),
    };
    companion.api.fetch_user_info(&handle).await.map(Some)
}

/// Link (or replace) the Codeforces handle on the user document.
pub async fn set_handle(
    companion: &Companion,
    session: Option<&AuthSession>,
    handle: &str,
) -> Result<(), CompanionError> {
    let session = session.ok_or(CompanionError::NotSignedIn)?;
    companion
        .store
        .set_handle(&session.uid, handle, &session.id_token)
        .await
}

/// The handle from the user document, if signed in and non-empty.
pub async fn linked_handle(
    companion: &Companion,
    session: Option<&AuthSession>,
) -> Result<Option<String>, CompanionError> {
    let session = match session {
        Some(s) => s,
        None => return Ok(None),
    };
    let document = companion.store.get(&session.uid, &session.id_token).await?;
    if document.codeforces_handle.is_empty() {
        Ok(None)
    } else {
        Ok(Some(document.codeforces_handle))
    }
}
