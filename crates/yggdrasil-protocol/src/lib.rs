//! Wire protocol for the Yggdrasil session service.
//!
//! This crate defines what a game server and the session service say to
//! each other, without doing any networking itself:
//!
//! - **Types** ([`JoinRequest`], [`SessionProfile`], [`ErrorResponse`]):
//!   the JSON bodies exchanged with the service.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]): how those bodies are
//!   converted to/from bytes.
//! - **Digest** ([`server_hash`]): the signed SHA-1 hex string sent as
//!   `serverId` by both the client and the server.
//! - **Errors** ([`ProtocolError`]): what can go wrong while encoding or
//!   decoding.
//!
//! # Architecture
//!
//! ```text
//! Session client (HTTP) → Protocol (bodies + server hash) → bytes on the wire
//! ```

mod codec;
mod digest;
mod error;
mod types;

pub use codec::Codec;
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use digest::{
    ConnectionBundle, DIGEST_LEN, server_hash, signed_hex_digest,
    twos_complement,
};
pub use error::ProtocolError;
pub use types::{
    ErrorResponse, JoinRequest, ProfileProperty, RemoteError, SessionProfile,
};
