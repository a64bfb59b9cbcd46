use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing or invalid field `{0}`")]
    MissingOrInvalidField(&'static str),

    #[error("Expected a JSON object for {0}")]
    NotAnObject(&'static str),

    #[error("Unknown key `{0}`")]
    UnknownKey(String),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}
