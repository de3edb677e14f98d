use reqwest::StatusCode;
use thiserror::Error;

/// Transport-level failure of the remote weather lookup.
///
/// A location the endpoint could not resolve is not an error here; that case
/// comes back as [`LookupOutcome::NotFound`](crate::model::LookupOutcome).
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("failed to send lookup request: {0}")]
    Request(#[from] reqwest::Error),

    #[error("lookup request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to parse lookup response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_mentions_code_and_body() {
        let err = LookupError::Status {
            status: StatusCode::BAD_GATEWAY,
            body: "upstream offline".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("502"));
        assert!(msg.contains("upstream offline"));
    }
}
