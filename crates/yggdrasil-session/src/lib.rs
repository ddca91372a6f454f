//! Session service client for game servers.
//!
//! Online-mode login has two HTTP round trips against the session service:
//!
//! 1. **join**: the connecting client announces the server hash it
//!    computed ([`SessionClient::join`]).
//! 2. **hasJoined**: the game server asks whether a player with that name
//!    announced the same hash, and gets back the verified profile
//!    ([`SessionClient::has_joined`]).
//!
//! Both sides derive the hash from the same [`ConnectionBundle`].
//!
//! # How it fits in the stack
//!
//! ```text
//! Game server login handler  ← calls has_joined, admits or kicks the player
//!     ↕
//! Session layer (this crate)  ← HTTP requests and status mapping
//!     ↕
//! Protocol layer (below)  ← bodies, codec, server hash
//! ```

#![allow(async_fn_in_trait)]

mod client;
mod config;
mod error;
mod service;

pub use client::{SessionClient, SessionClientBuilder};
pub use config::{ClientConfig, DEFAULT_HOST, DEFAULT_USER_AGENT};
pub use error::SessionError;
pub use service::SessionService;
pub use yggdrasil_protocol::{ConnectionBundle, SessionProfile};
