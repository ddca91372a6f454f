//! Codec trait and implementations for serializing/deserializing bodies.
//!
//! A "codec" (coder/decoder) converts between Rust types and raw bytes.
//! The session service only speaks JSON, so [`JsonCodec`] is the one
//! implementation; the trait keeps the HTTP client independent of
//! `serde_json` and gives decode failures a single error type.

use serde::{Serialize, de::DeserializeOwned};

use crate::ProtocolError;

/// A codec that can encode Rust types to bytes and decode bytes back.
///
/// - `Send + Sync` → a client holding a codec can be shared across tasks.
/// - `'static` → the codec owns everything it needs.
///
/// `decode` requires `DeserializeOwned` so the response buffer can be
/// dropped as soon as the body has been parsed.
pub trait Codec: Send + Sync + 'static {
    /// Serializes a value into bytes.
    ///
    /// # Errors
    /// Returns `ProtocolError::Encode` if serialization fails.
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError>;

    /// Deserializes bytes back into a value.
    ///
    /// # Errors
    /// Returns `ProtocolError::Decode` if the bytes are malformed,
    /// incomplete, or don't match the expected type.
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError>;
}

// ---------------------------------------------------------------------------
// JsonCodec
// ---------------------------------------------------------------------------

/// A [`Codec`] that uses JSON (via `serde_json`).
///
/// This is behind the `json` feature flag (enabled by default).
///
/// ## Example
///
/// ```rust
/// use yggdrasil_protocol::{Codec, ErrorResponse, JsonCodec};
///
/// let codec = JsonCodec;
/// let body: ErrorResponse = codec
///     .decode(br#"{"error":"UserBannedException"}"#)
///     .unwrap();
/// assert_eq!(body.error, "UserBannedException");
/// ```
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

#[cfg(feature = "json")]
impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError> {
        serde_json::to_vec(value).map_err(ProtocolError::Encode)
    }

    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError> {
        serde_json::from_slice(data).map_err(ProtocolError::Decode)
    }
}
