use std::time::Duration;

use serde_json::{json, Value};
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::error::CompanionError;

use super::types::{handle_fields, new_user_fields, UserDocument};

/// REST client for the hosted document store. Each user owns one document
/// under `users/{uid}` holding the linked handle and the favorite problem
/// ids; every call carries the session's bearer token. Writes are
/// last-write-wins, matching the store's semantics.
pub struct UserDocStore {
    client: reqwest::Client,
    base: String,
    project_id: String,
}

impl UserDocStore {
    pub fn new(config: &AppConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("Failed to build reqwest client");

        Self {
            client,
            base: config.store_api_base.trim_end_matches('/').to_string(),
            project_id: config.project_id.clone(),
        }
    }

    fn document_name(&self, uid: &str) -> String {
        format!(
            "projects/{}/databases/(default)/documents/users/{}",
            self.project_id, uid
        )
    }

    fn document_url(&self, uid: &str) -> String {
        format!("{}/{}", self.base, self.document_name(uid))
    }

    async fn check(&self, response: reqwest::Response, what: &str) -> Result<Value, CompanionError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("{} failed: HTTP {} {}", what, status.as_u16(), body);
            if status == reqwest::StatusCode::NOT_FOUND {
                return Err(CompanionError::Store("Document does not exist".to_string()));
            }
            return Err(CompanionError::Store(format!(
                "{} failed with HTTP {}",
                what,
                status.as_u16()
            )));
        }
        response
            .json()
            .await
            .map_err(|e| CompanionError::Decode(format!("{}: {}", what, e)))
    }

    /// Read a user's document.
    pub async fn get(&self, uid: &str, id_token: &str) -> Result<UserDocument, CompanionError> {
        let response = self
            .client
            .get(self.document_url(uid))
            .bearer_auth(id_token)
            .send()
            .await
            .map_err(|e| CompanionError::Network(e.to_string()))?;
        let doc = self.check(response, "Fetch user document").await?;
        Ok(UserDocument::from_document(&doc))
    }

    /// Create the initial document for a freshly registered user: empty
    /// handle, no favorites.
    pub async fn create(&self, uid: &str, email: &str, id_token: &str) -> Result<(), CompanionError> {
        info!("Creating user document for {}", uid);
        let response = self
            .client
            .patch(self.document_url(uid))
            .bearer_auth(id_token)
            .json(&json!({ "fields": new_user_fields(uid, email) }))
            .send()
            .await
            .map_err(|e| CompanionError::Network(e.to_string()))?;
        self.check(response, "Create user document").await?;
        Ok(())
    }

    /// Overwrite the linked Codeforces handle.
    pub async fn set_handle(
        &self,
        uid: &str,
        handle: &str,
        id_token: &str,
    ) -> Result<(), CompanionError> {
        info!("Updating handle for {} to {}", uid, handle);
        let url = format!(
            "{}?updateMask.fieldPaths=codeforcesHandle",
            self.document_url(uid)
        );
        let response = self
            .client
            .patch(&url)
            .bearer_auth(id_token)
            .json(&json!({ "fields": handle_fields(handle) }))
            .send()
            .await
            .map_err(|e| CompanionError::Network(e.to_string()))?;
        self.check(response, "Update handle").await?;
        Ok(())
    }

    /// Add a problem id to the favorites array (idempotent union).
    pub async fn add_favorite(
        &self,
        uid: &str,
        problem_id: &str,
        id_token: &str,
    ) -> Result<(), CompanionError> {
        info!("Adding favorite {} for {}", problem_id, uid);
        self.favorite_transform(uid, problem_id, id_token, "appendMissingElements")
            .await
    }

    /// Remove a problem id from the favorites array.
    pub async fn remove_favorite(
        &self,
        uid: &str,
        problem_id: &str,
        id_token: &str,
    ) -> Result<(), CompanionError> {
        info!("Removing favorite {} for {}", problem_id, uid);
        self.favorite_transform(uid, problem_id, id_token, "removeAllFromArray")
            .await
    }

    async fn favorite_transform(
        &self,
        uid: &str,
        problem_id: &str,
        id_token: &str,
        transform: &str,
    ) -> Result<(), CompanionError> {
        let url = format!(
            "{}/projects/{}/databases/(default)/documents:commit",
            self.base, self.project_id
        );
        let body = json!({
            "writes": [{
                "transform": {
                    "document": self.document_name(uid),
                    "fieldTransforms": [{
                        "fieldPath": "favoriteProblems",
                        transform: { "values": [{ "stringValue": problem_id }] }
                    }]
                }
            }]
        });
        let response = self
            .client
            .post(&url)
            .bearer_auth(id_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| CompanionError::Network(e.to_string()))?;
        self.check(response, "Update favorites").await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> UserDocStore {
        let mut config = AppConfig::default();
        config.project_id = "my-project".to_string();
        UserDocStore::new(&config)
    }

    #[test]
    fn test_document_addressing() {
        let store = store();
        assert_eq!(
            store.document_name("uid-1"),
            "projects/my-project/databases/(default)/documents/users/uid-1"
        );
        assert_eq!(
            store.document_url("uid-1"),
            "https://firestore.googleapis.com/v1/projects/my-project/databases/(default)/documents/users/uid-1"
        );
    }
}
