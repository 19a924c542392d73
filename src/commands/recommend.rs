use tracing::info;

use crate::auth::AuthSession;
use crate::error::CompanionError;
use crate::recommend::{recommend, Recommendations};

use super::{profile, Companion};

/// The "For You" screen chain: linked handle → profile → rating → bucketed
/// sample over a fresh catalog. Unrated (or absent) profiles recommend
/// around rating 0, as the original did. Signed out, or no handle linked,
/// yields empty bands.
pub async fn load_recommendations(
    companion: &Companion,
    session: Option<&AuthSession>,
) -> Result<Recommendations, CompanionError> {
    let handle = match profile::linked_handle(companion, session).await? {
        Some(h) => h,
        None => return Ok(Recommendations::default()),
    };
    let user = companion.api.fetch_user_info(&handle).await?;
    let rating = user.rating.unwrap_or(0);
    info!("Recommending around rating {} for {}", rating, handle);
    let catalog = companion.api.fetch_problems().await?;
    Ok(recommend(&catalog, rating))
}
