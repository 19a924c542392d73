use serde::{Deserialize, Serialize};

use crate::error::CompanionError;

/// Envelope shared by every Codeforces API endpoint.
/// `status` is `"OK"` or `"FAILED"`; on failure `comment` explains why and
/// `result` is absent.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    pub result: Option<T>,
    pub comment: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Unwrap the envelope into its payload, mapping a FAILED status (or a
    /// missing payload) to an API error.
    pub fn into_result(self) -> Result<T, CompanionError> {
        if self.status != "OK" {
            return Err(CompanionError::Api(
                self.comment.unwrap_or_else(|| "request failed".to_string()),
            ));
        }
        self.result
            .ok_or_else(|| CompanionError::Decode("OK response with no result".to_string()))
    }
}

/// A single problem from the catalog. `rating` is the wire name for the
/// difficulty value and is absent for unrated problems.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Problem {
    #[serde(rename = "contestId")]
    pub contest_id: i64,
    pub index: String,
    pub name: String,
    pub rating: Option<i64>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Problem {
    /// Problem id: contest id concatenated with the index, e.g. `"1842B"`.
    pub fn id(&self) -> String {
        format!("{}{}", self.contest_id, self.index)
    }

    /// Problemset page for this problem.
    pub fn url(&self) -> String {
        format!(
            "https://codeforces.com/problemset/problem/{}/{}",
            self.contest_id, self.index
        )
    }

    /// Display color bucket; unrated problems render as the lowest bucket.
    pub fn color(&self) -> DifficultyColor {
        DifficultyColor::from_rating(self.rating.unwrap_or(0))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProblemSetResult {
    pub problems: Vec<Problem>,
}

/// One submission from a user's history. `contest_id` can be absent for
/// problems outside the regular problemset, and `verdict` is absent while a
/// submission is still being judged; both cases are skipped when computing
/// the solved set.
#[derive(Debug, Clone, Deserialize)]
pub struct Submission {
    pub id: i64,
    pub problem: SubmissionProblem,
    pub verdict: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionProblem {
    #[serde(rename = "contestId")]
    pub contest_id: Option<i64>,
    pub index: String,
}

impl Submission {
    /// Id of the submitted problem, when it belongs to a regular contest.
    pub fn problem_id(&self) -> Option<String> {
        self.problem
            .contest_id
            .map(|cid| format!("{}{}", cid, self.problem.index))
    }

    pub fn is_accepted(&self) -> bool {
        self.verdict.as_deref() == Some("OK")
    }
}

/// Public profile data for a handle. `rating` is absent for unrated users.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub handle: String,
    pub rating: Option<i64>,
    #[serde(rename = "maxRating")]
    pub max_rating: Option<i64>,
    #[serde(default)]
    pub contribution: i64,
    #[serde(default)]
    pub avatar: String,
}

/// One entry from the contest list. `start_time_seconds` is absent for
/// contests without a scheduled start.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contest {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub phase: String,
    #[serde(rename = "startTimeSeconds")]
    pub start_time_seconds: Option<i64>,
    #[serde(rename = "durationSeconds")]
    pub duration_seconds: i64,
}

impl Contest {
    /// Contest duration in whole hours, as shown in the detail screen.
    pub fn duration_hours(&self) -> i64 {
        self.duration_seconds / 3600
    }
}

/// Display buckets for problem difficulty, matching the site's rank colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyColor {
    Gray,
    Green,
    Cyan,
    Blue,
    Purple,
    Yellow,
    Orange,
    Red,
    Black,
}

impl DifficultyColor {
    pub fn from_rating(rating: i64) -> Self {
        match rating {
            0..=1199 => DifficultyColor::Gray,
            1200..=1399 => DifficultyColor::Green,
            1400..=1599 => DifficultyColor::Cyan,
            1600..=1799 => DifficultyColor::Blue,
            1800..=1999 => DifficultyColor::Purple,
            2000..=2199 => DifficultyColor::Yellow,
            2200..=2399 => DifficultyColor::Orange,
            2400..=3999 => DifficultyColor::Red,
            _ => DifficultyColor::Black,
        }
    }
}
