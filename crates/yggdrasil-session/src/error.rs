//! Error types for the session layer.

use yggdrasil_protocol::{ErrorResponse, ProtocolError, RemoteError};

/// Errors returned by the session service calls.
///
/// The first five variants are answers from the service itself. The rest
/// are local failures: a bad host, a network error, or a body that could
/// not be encoded or decoded. Nothing is retried internally.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The join was refused because the account's Xbox profile has
    /// multiplayer disabled. The player should be rejected.
    #[error("insufficient privileges: {0}")]
    InsufficientPrivileges(String),

    /// The join was refused because the account is banned.
    #[error("user banned: {0}")]
    UserBanned(String),

    /// `hasJoined` answered 204: the player has no valid session for this
    /// server hash. Treat as "not authenticated".
    #[error("received an empty response from the server")]
    EmptyResponse,

    /// A status code outside the documented set for the call.
    #[error("unexpected status code {0}")]
    UnexpectedStatus(u16),

    /// A 403 whose `error` field names an unknown category, carried
    /// verbatim.
    #[error("{0}")]
    UnrecognizedRemoteError(String),

    /// The configured host is not a valid URL.
    #[error("invalid host: {0}")]
    InvalidHost(#[from] url::ParseError),

    /// The request never got a response (DNS, TLS, connection reset...).
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A request or response body could not be (de)serialized.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

impl SessionError {
    /// Returns `true` when the service gave a definitive "no" for this
    /// player. Retrying won't change the answer.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::InsufficientPrivileges(_) | Self::UserBanned(_) | Self::EmptyResponse
        )
    }
}

impl From<ErrorResponse> for SessionError {
    fn from(response: ErrorResponse) -> Self {
        match response.kind() {
            RemoteError::InsufficientPrivileges => {
                Self::InsufficientPrivileges("Xbox profile has multiplayer disabled".into())
            }
            RemoteError::UserBanned => Self::UserBanned("User is banned from multiplayer".into()),
            RemoteError::Other(name) => Self::UnrecognizedRemoteError(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote(error: &str) -> ErrorResponse {
        ErrorResponse {
            error: error.into(),
            error_message: None,
        }
    }

    #[test]
    fn test_from_error_response_insufficient_privileges() {
        let err = SessionError::from(remote("InsufficientPrivilegesException"));
        assert!(matches!(err, SessionError::InsufficientPrivileges(_)));
        assert!(err.to_string().contains("multiplayer disabled"));
    }

    #[test]
    fn test_from_error_response_user_banned() {
        let err = SessionError::from(remote("UserBannedException"));
        assert!(matches!(err, SessionError::UserBanned(_)));
        assert!(err.to_string().contains("banned"));
    }

    #[test]
    fn test_from_error_response_unknown_is_verbatim() {
        let err = SessionError::from(remote("SomethingElse"));
        assert!(matches!(
            &err,
            SessionError::UnrecognizedRemoteError(name) if name == "SomethingElse"
        ));
        assert_eq!(err.to_string(), "SomethingElse");
    }

    #[test]
    fn test_unexpected_status_display_has_code() {
        assert_eq!(
            SessionError::UnexpectedStatus(502).to_string(),
            "unexpected status code 502"
        );
    }

    #[test]
    fn test_is_rejection() {
        assert!(SessionError::EmptyResponse.is_rejection());
        assert!(SessionError::UserBanned("x".into()).is_rejection());
        assert!(SessionError::InsufficientPrivileges("x".into()).is_rejection());
        assert!(!SessionError::UnexpectedStatus(500).is_rejection());
        assert!(!SessionError::UnrecognizedRemoteError("x".into()).is_rejection());
    }
}
