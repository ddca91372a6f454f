//! Unified error type.

use yggdrasil_protocol::ProtocolError;
use yggdrasil_session::SessionError;

/// Top-level error that wraps the crate-specific errors.
///
/// `#[from]` on each variant lets `?` convert sub-crate errors.
#[derive(Debug, thiserror::Error)]
pub enum YggdrasilError {
    /// Encoding or decoding a body failed.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// A session service call failed or was refused.
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl YggdrasilError {
    /// Returns `true` when the player should be turned away rather than
    /// the call retried. See [`SessionError::is_rejection`].
    pub fn is_rejection(&self) -> bool {
        match self {
            Self::Session(e) => e.is_rejection(),
            Self::Protocol(_) => false,
        }
    }
}
