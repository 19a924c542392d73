//! Screen-level operations: thin async fetch chains over the boundary
//! clients. Each function does what one screen's appearance (or one user
//! action) did in the app: fetch, reduce, and hand back either data or an
//! [`crate::state::Event`] for the snapshot.

pub mod auth;
pub mod contests;
pub mod favorites;
pub mod problems;
pub mod profile;
pub mod recommend;

use crate::api::CodeforcesClient;
use crate::auth::{AuthClient, SessionStore};
use crate::config::AppConfig;
use crate::error::CompanionError;
use crate::store::UserDocStore;

/// Everything the screens share: config plus one client per boundary
/// service and the persisted session.
pub struct Companion {
    pub config: AppConfig,
    pub api: CodeforcesClient,
    pub auth: AuthClient,
    pub store: UserDocStore,
    pub session: SessionStore,
}

impl Companion {
    pub fn new(config: AppConfig) -> Result<Self, CompanionError> {
        config.validate()?;
        Ok(Self {
            api: CodeforcesClient::new(&config),
            auth: AuthClient::new(&config),
            store: UserDocStore::new(&config),
            session: SessionStore::open_default()?,
            config,
        })
    }
}
