use serde_json::Value;

/// Failures talking to the recommendation service.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The service answered with a non-success status.
    #[error("Request failed with status code {code}")]
    Status {
        code: u16,
        /// `detail` field of the error body, when the service sent one.
        detail: Option<String>,
        body: String,
    },
    /// The request never produced an HTTP response.
    #[error("Network error: {0}")]
    Transport(String),
    /// A success response whose body could not be read or decoded.
    #[error("Invalid response: {0}")]
    Decode(String),
    /// The body was larger than the configured response cap.
    #[error("Response exceeded {limit} bytes")]
    TooLarge { limit: usize },
    /// The configured base URL could not be combined with an endpoint path.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    pub(super) fn from_status(code: u16, body: String) -> Self {
        Self::Status {
            code,
            detail: extract_detail(&body),
            body,
        }
    }

    /// Server-provided detail text, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Message shown to the user: the server detail, else the error description.
    pub fn user_message(&self) -> String {
        self.detail()
            .map(str::to_string)
            .unwrap_or_else(|| self.to_string())
    }
}

/// Pull `detail` out of a JSON error body.
///
/// Structured details (validation error lists) are rendered as compact JSON.
fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body.trim()).ok()?;
    match value.get("detail")? {
        Value::Null => None,
        Value::String(text) if text.trim().is_empty() => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_prefers_detail() {
        let err = ApiError::from_status(404, r#"{"detail": "Product not found"}"#.to_string());
        assert_eq!(err.detail(), Some("Product not found"));
        assert_eq!(err.user_message(), "Product not found");
    }

    #[test]
    fn status_error_without_detail_uses_description() {
        let err = ApiError::from_status(500, "Internal Server Error".to_string());
        assert_eq!(err.detail(), None);
        assert_eq!(err.user_message(), "Request failed with status code 500");
    }

    #[test]
    fn structured_detail_is_rendered_as_json() {
        let err = ApiError::from_status(
            422,
            r#"{"detail": [{"loc": ["query", "price"], "msg": "field required"}]}"#.to_string(),
        );
        let message = err.user_message();
        assert!(message.contains("field required"));
        assert!(message.starts_with('['));
    }

    #[test]
    fn transport_error_message() {
        let err = ApiError::Transport("Connection refused".into());
        assert_eq!(err.user_message(), "Network error: Connection refused");
    }
}
