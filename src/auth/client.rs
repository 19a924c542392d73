use std::time::Duration;

use serde::Deserialize;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::error::CompanionError;

/// A signed-in user, as returned by the identity service. `id_token` is the
/// bearer token the document store expects; it is held in memory for the
/// session and never written to disk.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub uid: String,
    pub email: String,
    pub id_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(rename = "localId")]
    local_id: String,
    email: String,
    #[serde(rename = "idToken")]
    id_token: String,
    #[serde(rename = "refreshToken")]
    refresh_token: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// REST client for the hosted identity service (sign-up and sign-in with
/// email and password). Service error codes are translated to messages fit
/// for an alert dialog.
pub struct AuthClient {
    client: reqwest::Client,
    base: String,
    api_key: String,
}

impl AuthClient {
    pub fn new(config: &AppConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("Failed to build reqwest client");

        Self {
            client,
            base: config.identity_api_base.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    /// Create a new account. The caller is responsible for creating the
    /// user's document in the store afterwards.
    pub async fn register(&self, email: &str, password: &str) -> Result<AuthSession, CompanionError> {
        info!("Registering account for {}", email);
        self.token_request("accounts:signUp", email, password).await
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, CompanionError> {
        info!("Signing in {}", email);
        self.token_request("accounts:signInWithPassword", email, password)
            .await
    }

    async fn token_request(
        &self,
        endpoint: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, CompanionError> {
        let url = format!("{}/{}?key={}", self.base, endpoint, self.api_key);
        let body = serde_json::json!({
            "email": email,
            "password": password,
            "returnSecureToken": true,
        });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| CompanionError::Network(e.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| CompanionError::Network(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorResponse>(&bytes)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| format!("HTTP {}", status.as_u16()));
            warn!("Identity service rejected {}: {}", endpoint, message);
            return Err(CompanionError::Auth(translate_auth_error(&message)));
        }

        let token: TokenResponse = serde_json::from_slice(&bytes)
            .map_err(|e| CompanionError::Decode(format!("Bad identity response: {}", e)))?;

        Ok(AuthSession {
            uid: token.local_id,
            email: token.email,
            id_token: token.id_token,
            refresh_token: token.refresh_token,
        })
    }
}

/// Map service error codes to something a user can read in an alert.
fn translate_auth_error(code: &str) -> String {
    match code {
        "EMAIL_EXISTS" => "An account with this email already exists".to_string(),
        "EMAIL_NOT_FOUND" => "No account with this email".to_string(),
        "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
            "Incorrect email or password".to_string()
        }
        "WEAK_PASSWORD : Password should be at least 6 characters" | "WEAK_PASSWORD" => {
            "Password should be at least 6 characters".to_string()
        }
        "USER_DISABLED" => "This account has been disabled".to_string(),
        other if other.starts_with("TOO_MANY_ATTEMPTS") => {
            "Too many attempts, try again later".to_string()
        }
        other => other.to_string(),
    }
}
