mod client;
mod types;

pub use client::CodeforcesClient;
pub use types::{
    ApiResponse, Contest, DifficultyColor, Problem, Submission, SubmissionProblem, UserInfo,
};
