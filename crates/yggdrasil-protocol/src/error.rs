//! Error types for the protocol layer.
//!
//! Each crate defines its own error enum. A `ProtocolError` always means
//! a body could not be turned into bytes or back, never that the network
//! or the remote service misbehaved.

/// Errors that can occur in the protocol layer.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serialization of an outgoing body failed.
    #[cfg(feature = "json")]
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// Deserialization of a response body failed.
    ///
    /// Common causes: the service answered with HTML instead of JSON,
    /// a required field is missing, or the profile id is not a UUID.
    #[cfg(feature = "json")]
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),
}
