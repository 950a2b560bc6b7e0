//! Form API-specific error types.

/// Errors that can occur while talking to the form API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// API answered with a non-success status
    #[error("API error (status {status}): {message}")]
    Status { status: u16, message: String },

    /// Failed to deserialize API response
    #[error("Failed to deserialize API response: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// Configured base URL cannot be used
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_status() {
        let error = ApiError::Status {
            status: 404,
            message: "Not found".to_string(),
        };
        let error_str = error.to_string();
        assert!(error_str.contains("404"));
        assert!(error_str.contains("Not found"));
    }

    #[test]
    fn test_api_error_invalid_url() {
        let error = ApiError::InvalidUrl("ftp://nope".to_string());
        assert!(error.to_string().contains("Invalid API URL"));
        assert!(error.to_string().contains("ftp://nope"));
    }

    #[test]
    fn test_api_error_from_serde() {
        let serde_error = serde_json::from_str::<u8>("not json").unwrap_err();
        let error: ApiError = serde_error.into();
        assert!(matches!(error, ApiError::Deserialization(_)));
    }
}
