use thiserror::Error;

/// Failure cases for operations against the external services.
///
/// Three categories reach users as message strings at the operation that
/// triggered them: local validation failures, remote-call failures
/// (transport or service-reported), and unexpected decode failures. Nothing
/// here propagates further up the component tree.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Local validation failed; no remote call was made.
    #[error("{0}")]
    Validation(String),
    /// The request could not be sent.
    #[error("Failed to send request: {0}")]
    Request(String),
    /// The service reported a failure status.
    #[error("Request failed with status {status}: {message}")]
    Service { status: u16, message: String },
    /// The response could not be decoded.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ServiceError {
    /// Variant name used when errors are rendered as plain JSON objects on
    /// the debug page.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Validation(_) => "ValidationError",
            Self::Request(_) => "RequestError",
            Self::Service { .. } => "ServiceError",
            Self::Decode(_) => "DecodeError",
        }
    }
}
