use tracing::{info, warn};

use crate::auth::{AuthSession, StoredSession};
use crate::error::CompanionError;

use super::Companion;

/// Create an account, then its user document (empty handle, no favorites),
/// then persist the session. A failed document write does not roll back the
/// account; it is logged and the session still stands, matching the
/// original's fire-and-forget write.
pub async fn register(
    companion: &Companion,
    email: &str,
    password: &str,
) -> Result<AuthSession, CompanionError> {
    let session = companion.auth.register(email, password).await?;
    if let Err(e) = companion
        .store
        .create(&session.uid, &session.email, &session.id_token)
        .await
    {
        warn!("Failed to create user document for {}: {}", session.uid, e);
    }
    companion.session.save(&session)?;
    info!("Registered {}", session.uid);
    Ok(session)
}

pub async fn sign_in(
    companion: &Companion,
    email: &str,
    password: &str,
) -> Result<AuthSession, CompanionError> {
    let session = companion.auth.sign_in(email, password).await?;
    companion.session.save(&session)?;
    info!("Signed in {}", session.uid);
    Ok(session)
}

pub fn sign_out(companion: &Companion) -> Result<(), CompanionError> {
    companion.session.sign_out()
}

/// Who was signed in at last launch, if anyone.
pub fn current_user(companion: &Companion) -> Option<StoredSession> {
    companion.session.current()
}
