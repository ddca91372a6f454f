//! The seam between a game server's login flow and the session service.
//!
//! Login code should depend on [`SessionService`], not on
//! [`SessionClient`](crate::SessionClient) directly. Production passes a
//! client; tests pass a fake that answers from memory.

use uuid::Uuid;
use yggdrasil_protocol::{ConnectionBundle, SessionProfile};

use crate::SessionError;

/// The two session service calls.
///
/// # Example
///
/// ```rust
/// use uuid::Uuid;
/// use yggdrasil_session::{ConnectionBundle, SessionError, SessionProfile, SessionService};
///
/// /// Accepts exactly one player. Only for tests.
/// struct OnePlayer(SessionProfile);
///
/// impl SessionService for OnePlayer {
///     async fn join(
///         &self,
///         _access_token: &str,
///         _selected_profile: Uuid,
///         _bundle: &ConnectionBundle<'_>,
///     ) -> Result<(), SessionError> {
///         Ok(())
///     }
///
///     async fn has_joined(
///         &self,
///         username: &str,
///         _bundle: &ConnectionBundle<'_>,
///         _ip: Option<&str>,
///     ) -> Result<SessionProfile, SessionError> {
///         if username.eq_ignore_ascii_case(&self.0.name) {
///             Ok(self.0.clone())
///         } else {
///             Err(SessionError::EmptyResponse)
///         }
///     }
/// }
/// ```
pub trait SessionService: Send + Sync + 'static {
    /// Announces that the player is joining the server the bundle
    /// describes. Called on the connecting client's side.
    ///
    /// # Returns
    /// - `Ok(())`: the service accepted the join
    /// - `Err(SessionError::InsufficientPrivileges | UserBanned)`: refused
    fn join(
        &self,
        access_token: &str,
        selected_profile: Uuid,
        bundle: &ConnectionBundle<'_>,
    ) -> impl std::future::Future<Output = Result<(), SessionError>> + Send;

    /// Verifies that `username` announced the same server hash, returning
    /// the player's profile. Called on the game server's side.
    ///
    /// `ip` is the connecting player's address, passed only when proxy
    /// connections should be refused.
    ///
    /// # Returns
    /// - `Ok(SessionProfile)`: the player is authenticated
    /// - `Err(SessionError::EmptyResponse)`: no matching session
    fn has_joined(
        &self,
        username: &str,
        bundle: &ConnectionBundle<'_>,
        ip: Option<&str>,
    ) -> impl std::future::Future<Output = Result<SessionProfile, SessionError>> + Send;
}
