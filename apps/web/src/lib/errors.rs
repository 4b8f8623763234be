use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
    /// Input rejected before any request was sent; the text is user-facing.
    #[error("{0}")]
    Validation(String),
    /// The server answered with an error envelope whose messages are already
    /// in the session error list. Callers must not surface it a second time.
    #[error("Request failed; see the messages above.")]
    Reported,
}

impl AppError {
    pub fn is_reported(&self) -> bool {
        matches!(self, AppError::Reported)
    }

    /// Returns the error unless it was already reported to the user.
    pub fn unreported(self) -> Option<Self> {
        if self.is_reported() { None } else { Some(self) }
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn reported_errors_are_filtered_out() {
        assert_eq!(AppError::Reported.unreported(), None);
        let timeout = AppError::Timeout("slow".to_string());
        assert_eq!(timeout.clone().unreported(), Some(timeout));
    }

    #[test]
    fn http_errors_render_status_and_message() {
        let err = AppError::Http {
            status: 502,
            message: "Bad gateway".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed (502): Bad gateway");
    }

    #[test]
    fn validation_errors_render_the_bare_message() {
        let err = AppError::Validation("Door name is required.".to_string());
        assert_eq!(err.to_string(), "Door name is required.");
    }
}
