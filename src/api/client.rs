use std::collections::HashSet;
use std::time::Duration;

use tracing::{info, warn};

use crate::config::AppConfig;
use crate::error::CompanionError;

use super::types::{ApiResponse, Contest, Problem, ProblemSetResult, Submission, UserInfo};

const USER_AGENT: &str = "cf-companion/0.1";

/// Client for the public Codeforces REST API. All endpoints share the
/// `{status, result, comment}` envelope; a FAILED status surfaces as
/// `CompanionError::Api` with the server's comment.
pub struct CodeforcesClient {
    client: reqwest::Client,
    base: String,
}

impl CodeforcesClient {
    pub fn new(config: &AppConfig) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("Failed to build reqwest client");

        Self {
            client,
            base: config.codeforces_api_base.trim_end_matches('/').to_string(),
        }
    }

    async fn get_envelope<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<T, CompanionError> {
        info!("Fetching {}", url);
        let response = self.client.get(url).send().await.map_err(|e| {
            warn!("Request to {} failed: {}", url, e);
            CompanionError::Network(e.to_string())
        })?;

        let status = response.status();
        // The API returns 400/503 with a JSON envelope for FAILED calls, so
        // try to decode the body before giving up on a non-success status.
        let body = response
            .bytes()
            .await
            .map_err(|e| CompanionError::Network(e.to_string()))?;

        let envelope: ApiResponse<T> = serde_json::from_slice(&body).map_err(|e| {
            if status.is_success() {
                CompanionError::Decode(format!("Failed to decode response from {}: {}", url, e))
            } else {
                CompanionError::Network(format!(
                    "HTTP {} from {}",
                    status.as_u16(),
                    url
                ))
            }
        })?;

        envelope.into_result()
    }

    /// Fetch the full problem catalog.
    pub async fn fetch_problems(&self) -> Result<Vec<Problem>, CompanionError> {
        let url = format!("{}/problemset.problems", self.base);
        let result: ProblemSetResult = self.get_envelope(&url).await?;
        info!("Fetched {} problems", result.problems.len());
        Ok(result.problems)
    }

    /// Fetch a user's submission history and reduce it to the set of solved
    /// problem ids: accepted verdict and a contest id present.
    pub async fn fetch_solved_ids(&self, handle: &str) -> Result<HashSet<String>, CompanionError> {
        let url = format!(
            "{}/user.status?handle={}",
            self.base,
            urlencoding::encode(handle)
        );
        let submissions: Vec<Submission> = self.get_envelope(&url).await?;
        let solved: HashSet<String> = submissions
            .iter()
            .filter(|s| s.is_accepted())
            .filter_map(|s| s.problem_id())
            .collect();
        info!("{} solved problems for handle {}", solved.len(), handle);
        Ok(solved)
    }

    /// Fetch the public profile for a handle.
    pub async fn fetch_user_info(&self, handle: &str) -> Result<UserInfo, CompanionError> {
        let url = format!(
            "{}/user.info?handles={}",
            self.base,
            urlencoding::encode(handle)
        );
        let users: Vec<UserInfo> = self.get_envelope(&url).await?;
        users
            .into_iter()
            .next()
            .ok_or_else(|| CompanionError::Decode(format!("No profile returned for {}", handle)))
    }

    /// Fetch the full contest list (all phases, newest first as the API
    /// returns it). Callers narrow it to the recent window.
    pub async fn fetch_contests(&self) -> Result<Vec<Contest>, CompanionError> {
        let url = format!("{}/contest.list", self.base);
        self.get_envelope(&url).await
    }
}
