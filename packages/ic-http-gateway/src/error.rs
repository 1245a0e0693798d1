//! The error module contains types for common errors that may be thrown
//! by other modules in this crate.

use ic_response_verification::ResponseVerificationError;

/// HTTP gateway result type.
pub type HttpGatewayResult<T = ()> = Result<T, HttpGatewayError>;

/// HTTP gateway error type.
#[derive(thiserror::Error, Debug)]
pub enum HttpGatewayError {
    /// A call to the canister failed, or the canister rejected it.
    #[error(r#"Agent error: "{0}""#)]
    AgentError(#[from] ic_agent::AgentError),

    /// The outbound HTTP response could not be built.
    #[error(r#"HTTP error: "{0}""#)]
    HttpError(#[from] http::Error),

    /// The canister responded with a status code that is not a valid HTTP status code.
    #[error(r#"Invalid status code: "{0}""#)]
    InvalidStatusCodeError(#[from] http::status::InvalidStatusCode),

    /// The body of the inbound request could not be read.
    #[error(r#"Failed to read the request body: "{0}""#)]
    RequestBodyError(String),

    /// The canister's response could not be verified.
    #[error(r#"Response verification error: "{0}""#)]
    ResponseVerificationError(#[from] ResponseVerificationError),

    /// No root key was configured and none could be obtained from the agent.
    #[error("The root key is not available")]
    RootKeyUnavailable,
}

/// The failure classes of the gateway, used to pick the outbound status code and to let
/// operators tell an unreachable canister apart from one serving unverifiable content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpGatewayErrorKind {
    /// The canister could not be reached, rejected the call or answered with a malformed response.
    Transport,

    /// The canister answered, but its response did not pass verification.
    Verification,

    /// The inbound request could not be normalized.
    Mapping,

    /// The gateway itself failed.
    Internal,
}

impl HttpGatewayError {
    /// Returns the failure class of this error.
    pub fn kind(&self) -> HttpGatewayErrorKind {
        match self {
            HttpGatewayError::AgentError(_) | HttpGatewayError::InvalidStatusCodeError(_) => {
                HttpGatewayErrorKind::Transport
            }
            HttpGatewayError::ResponseVerificationError(_) => HttpGatewayErrorKind::Verification,
            HttpGatewayError::RequestBodyError(_) => HttpGatewayErrorKind::Mapping,
            HttpGatewayError::HttpError(_) | HttpGatewayError::RootKeyUnavailable => {
                HttpGatewayErrorKind::Internal
            }
        }
    }
}
