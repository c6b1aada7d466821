use thiserror::Error;

/// Errors talking to the group-buy backend.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("group-buy {0} not found")]
    NotFound(u64),

    #[error("backend returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}
