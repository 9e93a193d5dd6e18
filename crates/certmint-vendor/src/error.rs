use serde_json::Value;

/// Errors returned by vendor calls.
#[derive(Debug, thiserror::Error)]
pub enum VendorError {
    /// The vendor answered with a non-success status.
    #[error("vendor returned status {status}: {message}")]
    Status {
        status: u16,
        /// `errorMessage` from a JSON body, otherwise the raw body text
        message: String,
        body: String,
    },

    /// A success response lacked a field the caller depends on.
    #[error("vendor response is missing '{field}'")]
    MissingField { field: &'static str, body: String },

    /// Connection, TLS, or timeout failure.
    #[error("vendor request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A request URL could not be built from the given values.
    #[error("invalid vendor request: {0}")]
    InvalidRequest(String),

    /// The response body could not be interpreted.
    #[error("could not decode vendor response: {0}")]
    Decode(String),
}

impl VendorError {
    /// Build a [`VendorError::Status`] from a rejected response body.
    pub fn from_status(status: u16, body: String) -> Self {
        VendorError::Status {
            status,
            message: extract_error_message(&body),
            body,
        }
    }

    /// Status code reported by the vendor, if it answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            VendorError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, VendorError::Transport(err) if err.is_timeout())
    }
}

/// Best-effort human message for a vendor error body.
pub fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("errorMessage")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_error_message_field() {
        let body = r#"{"errorMessage":"Project not found","resultState":"Error"}"#;
        assert_eq!(extract_error_message(body), "Project not found");
    }

    #[test]
    fn falls_back_to_raw_text() {
        assert_eq!(extract_error_message("Bad Gateway"), "Bad Gateway");
        assert_eq!(
            extract_error_message(r#"{"detail":"nope"}"#),
            r#"{"detail":"nope"}"#
        );
    }

    #[test]
    fn status_errors_keep_code_and_body() {
        let err = VendorError::from_status(401, r#"{"errorMessage":"Unauthorized"}"#.to_string());
        assert_eq!(err.status_code(), Some(401));
        assert_eq!(err.to_string(), "vendor returned status 401: Unauthorized");
        assert!(!err.is_timeout());
    }
}
