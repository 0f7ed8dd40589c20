//! Error types for language resolution, requests and response parsing.

use thiserror::Error;

/// Errors raised by the translation library.
///
/// Every error is returned to the direct caller at the point it is detected.
/// Nothing is retried or downgraded, and a failed call never yields a
/// partial [`Translation`](super::Translation).
#[derive(Error, Debug)]
pub enum TranslateError {
    /// Neither a catalog code nor a catalog name matched the identifier.
    #[error("Unrecognized language: '{0}'")]
    UnrecognizedLanguage(String),

    /// A code lookup was made for a code that is not in the catalog.
    #[error("Unknown language code: '{0}'")]
    UnknownLanguageCode(String),

    /// A dynamically typed value could not be used as a language.
    #[error("Invalid language input: expected a language code or name, got {0}")]
    InvalidLanguageInput(String),

    #[error("Source language was not set")]
    SourceLanguageNotSet,

    #[error("Target language was not set")]
    TargetLanguageNotSet,

    #[error("Input text is empty")]
    EmptyInput,

    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(String),

    /// The HTTP call failed. Carries the transport's own error as the source.
    #[error("Translation request failed")]
    Transport(#[from] TransportError),

    /// The body was not JSON, or was JSON of an unexpected shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Unknown result field: '{0}' (expected 'translation' or 'dictionary')")]
    UnknownField(String),
}

/// Failures reported by an [`HttpTransport`](super::HttpTransport).
#[derive(Error, Debug)]
pub enum TransportError {
    /// Connection, TLS, timeout or body-decoding failure.
    #[error("Failed to reach translation endpoint: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status.
    ///
    /// The response body is kept for callers but left out of the message,
    /// since error pages are often whole HTML documents.
    #[error("Translation endpoint returned status {status}")]
    Status { status: u16, body: String },
}

/// Result alias used across the translation module.
pub type Result<T> = std::result::Result<T, TranslateError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_transport_error_is_exposed_as_source() {
        let err = TranslateError::from(TransportError::Status {
            status: 503,
            body: "unavailable".to_string(),
        });

        let source = err.source().map(ToString::to_string);
        assert_eq!(
            source.as_deref(),
            Some("Translation endpoint returned status 503")
        );
    }

    #[test]
    fn test_status_message_omits_body() {
        let err = TransportError::Status {
            status: 502,
            body: "<html><body>Bad Gateway</body></html>".to_string(),
        };

        assert_eq!(err.to_string(), "Translation endpoint returned status 502");
        assert!(matches!(err, TransportError::Status { ref body, .. } if body.contains("Bad Gateway")));
    }

    #[test]
    fn test_error_messages_name_the_offending_value() {
        let err = TranslateError::UnrecognizedLanguage("Klingon".to_string());
        assert!(err.to_string().contains("Klingon"));

        let err = TranslateError::UnknownField("bogus".to_string());
        assert!(err.to_string().contains("bogus"));
    }
}
