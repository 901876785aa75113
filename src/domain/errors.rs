use crate::domain::form::MetricField;
use thiserror::Error;

/// Errors raised while talking to the liquidity prediction service.
///
/// The `Display` text of each variant is what the banner shows the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error("Prediction endpoint rejected the request method (HTTP 405). Check that the API base URL points at the service root.")]
    MethodNotAllowed,

    #[error("{message}")]
    Rejected { message: String },

    #[error("The prediction service hit an internal error (HTTP 500). Please try again later.")]
    ServerFault,

    #[error("Prediction request failed with HTTP status {code}.")]
    Status { code: u16 },

    #[error("No response from the prediction service. Is the backend running?")]
    Unreachable { reason: String },

    #[error("Could not build the prediction request: {reason}")]
    RequestSetup { reason: String },

    #[error("The prediction service returned an unreadable response: {reason}")]
    MalformedResponse { reason: String },
}

impl PredictionError {
    /// Classify a non-success HTTP status. `server_error` is the JSON `error`
    /// field of the body, when one was present.
    pub fn from_status(code: u16, server_error: Option<String>) -> Self {
        match (code, server_error) {
            (405, _) => Self::MethodNotAllowed,
            (400, Some(message)) => Self::Rejected { message },
            (500, _) => Self::ServerFault,
            (code, _) => Self::Status { code },
        }
    }
}

/// Errors raised while loading the trending coin directory.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DirectoryError {
    #[error("Could not reach the coin directory. Check your internet connection.")]
    Unreachable { reason: String },

    #[error("Coin directory is unavailable right now (HTTP {code}). Check your internet connection.")]
    Status { code: u16 },

    #[error("Coin directory sent data we could not read: {reason}")]
    Malformed { reason: String },
}

/// Submit-time validation failures. Nothing is sent when one of these is raised.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("Select a coin before requesting a prediction.")]
    MissingCoin,

    #[error("{} is required.", .field.label())]
    EmptyField { field: MetricField },

    #[error("{} must be a number, got '{value}'.", .field.label())]
    NotANumber { field: MetricField, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert_eq!(
            PredictionError::from_status(405, None),
            PredictionError::MethodNotAllowed
        );
        assert_eq!(
            PredictionError::from_status(500, Some("boom".to_string())),
            PredictionError::ServerFault
        );
        assert_eq!(
            PredictionError::from_status(400, Some("price must be positive".to_string())),
            PredictionError::Rejected {
                message: "price must be positive".to_string()
            }
        );
        assert_eq!(
            PredictionError::from_status(400, None),
            PredictionError::Status { code: 400 }
        );
        assert_eq!(
            PredictionError::from_status(503, None),
            PredictionError::Status { code: 503 }
        );
    }

    #[test]
    fn test_rejected_passes_server_message_through() {
        let error = PredictionError::from_status(400, Some("Missing field: price".to_string()));
        assert_eq!(error.to_string(), "Missing field: price");
    }

    #[test]
    fn test_form_error_formatting() {
        let error = FormError::NotANumber {
            field: MetricField::Price24h,
            value: "abc".to_string(),
        };

        let msg = error.to_string();
        assert!(msg.contains("PRICE 24H"));
        assert!(msg.contains("abc"));
    }
}
