//! Error types for the pagseguro-rs library.
//!
//! This module defines all error types that can occur while building,
//! submitting and parsing a checkout request.

use thiserror::Error;

use crate::types::GatewayError;

/// Main error type for checkout operations.
#[derive(Error, Debug)]
pub enum PagSeguroError {
    /// Error during HTTP request/response handling
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Error parsing a URL
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Malformed item, sender or shipping data, rejected before it is stored
    #[error("invalid payment data: {0}")]
    Validation(String),

    /// The gateway answered with a non-200 HTTP status
    #[error("gateway request failed: HTTP status={status} - response: {body}")]
    Transport {
        /// HTTP status code returned by the gateway
        status: u16,
        /// Raw response body, preserved for diagnosis
        body: String,
    },

    /// The gateway rejected the payment with one or more business errors
    #[error("{}", rejection_message(.errors))]
    Rejected {
        /// Structured `(code, message)` pairs, in document order
        errors: Vec<GatewayError>,
    },

    /// The response body was not XML, or its root tag was not recognized
    #[error("unexpected gateway response: {0}")]
    UnexpectedResponse(String),
}

/// Result type alias for checkout operations.
pub type Result<T> = std::result::Result<T, PagSeguroError>;

fn rejection_message(errors: &[GatewayError]) -> String {
    let mut message = String::from("the gateway reported a problem with the payment data:");
    for error in errors {
        message.push_str(&format!("\n (code={}) {}", error.code, error.message));
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display() {
        let err = PagSeguroError::Validation("item amount out of range".to_string());
        assert_eq!(
            err.to_string(),
            "invalid payment data: item amount out of range"
        );
    }

    #[test]
    fn test_transport_display() {
        let err = PagSeguroError::Transport {
            status: 500,
            body: "Internal Server Error".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "gateway request failed: HTTP status=500 - response: Internal Server Error"
        );
    }

    #[test]
    fn test_rejection_display_lists_every_error() {
        let err = PagSeguroError::Rejected {
            errors: vec![
                GatewayError {
                    code: "11013".to_string(),
                    message: "senderAreaCode invalid value.".to_string(),
                },
                GatewayError {
                    code: "11014".to_string(),
                    message: "senderPhone invalid value.".to_string(),
                },
            ],
        };

        let message = err.to_string();
        assert!(message.contains("(code=11013) senderAreaCode invalid value."));
        assert!(message.contains("(code=11014) senderPhone invalid value."));
    }

    #[test]
    fn test_result_type() {
        fn returns_result() -> Result<i32> {
            Ok(42)
        }

        assert_eq!(returns_result().unwrap(), 42);
    }
}
