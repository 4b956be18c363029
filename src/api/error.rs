use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("roster endpoint returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl FetchError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            return body.to_string();
        }
        // Walk back to a char boundary so multibyte UTF-8 never splits
        let mut cut = MAX_ERROR_BODY_LENGTH;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        format!(
            "{}... (truncated, {} total bytes)",
            &body[..cut],
            body.len()
        )
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        FetchError::Status {
            status,
            body: Self::truncate_body(body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_keeps_short_body() {
        let err = FetchError::from_status(reqwest::StatusCode::SERVICE_UNAVAILABLE, "maintenance");
        match err {
            FetchError::Status { status, body } => {
                assert_eq!(status.as_u16(), 503);
                assert_eq!(body, "maintenance");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_from_status_truncates_multibyte_body_on_char_boundary() {
        // 'é' is two bytes and straddles the 500-byte budget
        let body = format!("{}é{}", "x".repeat(499), "y".repeat(100));
        let err = FetchError::from_status(reqwest::StatusCode::BAD_GATEWAY, &body);
        match err {
            FetchError::Status { body, .. } => {
                assert!(body.starts_with(&"x".repeat(499)));
                assert!(body.contains("601 total bytes"));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_from_status_truncates_long_body() {
        let long = "x".repeat(2000);
        let err = FetchError::from_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR, &long);
        match err {
            FetchError::Status { body, .. } => {
                assert!(body.len() < long.len());
                assert!(body.contains("truncated"));
                assert!(body.contains("2000 total bytes"));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
