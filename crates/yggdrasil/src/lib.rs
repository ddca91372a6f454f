//! # Yggdrasil
//!
//! Online-mode authentication for game servers: compute the server hash,
//! announce a join, and verify that a connecting player holds a valid
//! session.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use yggdrasil::prelude::*;
//!
//! # async fn login(secret: &[u8], public_key: &[u8]) -> Result<(), YggdrasilError> {
//! let client = SessionClient::production()?;
//! let bundle = ConnectionBundle::new("", secret, public_key);
//! let profile = client.has_joined("Notch", &bundle, None).await?;
//! println!("{} logged in", profile);
//! # Ok(())
//! # }
//! ```

mod error;

pub use error::YggdrasilError;

/// Re-exports of the types most login code needs.
pub mod prelude {
    pub use crate::YggdrasilError;
    pub use uuid::Uuid;
    pub use yggdrasil_protocol::{
        ConnectionBundle, ProfileProperty, ProtocolError, SessionProfile, server_hash,
    };
    pub use yggdrasil_session::{
        ClientConfig, SessionClient, SessionClientBuilder, SessionError, SessionService,
    };
}
