use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("API returned status code {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Failed to reach the server: {0}")]
    Unreachable(#[source] reqwest::Error),

    #[error("Invalid inference response: {0}")]
    MalformedResponse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn malformed_response(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }
}
