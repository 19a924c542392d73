//! Signed-out short-circuit behavior of the screen-level commands: every
//! read degrades to an empty/absent result without touching the network,
//! and the one mutation refuses with a not-signed-in error.

use tempfile::TempDir;

use cf_companion::api::CodeforcesClient;
use cf_companion::auth::{AuthClient, SessionStore};
use cf_companion::commands::{self, Companion};
use cf_companion::config::AppConfig;
use cf_companion::error::CompanionError;
use cf_companion::state::Snapshot;
use cf_companion::store::UserDocStore;

fn companion(dir: &TempDir) -> Companion {
    let config = AppConfig::default();
    Companion {
        api: CodeforcesClient::new(&config),
        auth: AuthClient::new(&config),
        store: UserDocStore::new(&config),
        session: SessionStore::new(dir.path().join("session.json"), "cf-companion-test"),
        config,
    }
}

#[tokio::test]
async fn signed_out_solved_set_is_empty() {
    let dir = TempDir::new().unwrap();
    let solved = commands::problems::load_solved(&companion(&dir), None)
        .await
        .unwrap();
    assert!(solved.is_empty());
}

#[tokio::test]
async fn signed_out_favorites_are_empty() {
    let dir = TempDir::new().unwrap();
    let favorites = commands::favorites::load_favorites(&companion(&dir), None)
        .await
        .unwrap();
    assert!(favorites.is_empty());
}

#[tokio::test]
async fn signed_out_profile_is_absent() {
    let dir = TempDir::new().unwrap();
    let profile = commands::profile::load_profile(&companion(&dir), None)
        .await
        .unwrap();
    assert!(profile.is_none());
}

#[tokio::test]
async fn signed_out_recommendations_are_empty() {
    let dir = TempDir::new().unwrap();
    let recs = commands::recommend::load_recommendations(&companion(&dir), None)
        .await
        .unwrap();
    assert!(recs.easy.is_empty() && recs.medium.is_empty() && recs.hard.is_empty());
}

#[tokio::test]
async fn signed_out_toggle_is_rejected() {
    let dir = TempDir::new().unwrap();
    let result =
        commands::favorites::toggle_favorite(&companion(&dir), None, &Snapshot::default(), "1A")
            .await;
    assert!(matches!(result, Err(CompanionError::NotSignedIn)));
}

#[test]
fn no_session_means_no_current_user() {
    let dir = TempDir::new().unwrap();
    assert!(commands::auth::current_user(&companion(&dir)).is_none());
}
