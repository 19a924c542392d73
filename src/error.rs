use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompanionError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Auth error: {0}")]
    Auth(String),

    #[error("Not signed in")]
    NotSignedIn,

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<CompanionError> for String {
    fn from(err: CompanionError) -> Self {
        err.to_string()
    }
}

impl From<reqwest::Error> for CompanionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            CompanionError::Decode(err.to_string())
        } else {
            CompanionError::Network(err.to_string())
        }
    }
}
