use chrono::Utc;

use crate::api::Contest;
use crate::contests::recent_contests;
use crate::error::CompanionError;

use super::Companion;

/// The contests screen: full list from the API, narrowed to contests
/// starting within the past year (upcoming ones included).
pub async fn load_recent_contests(companion: &Companion) -> Result<Vec<Contest>, CompanionError> {
    let contests = companion.api.fetch_contests().await?;
    Ok(recent_contests(&contests, Utc::now()))
}
