//! HTTP client for the session service.

use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use url::Url;
use uuid::Uuid;
use yggdrasil_protocol::{
    Codec, ConnectionBundle, ErrorResponse, JoinRequest, JsonCodec, SessionProfile,
};

use crate::{ClientConfig, SessionError, SessionService};

const JOIN_PATH: &str = "/session/minecraft/join";
const HAS_JOINED_PATH: &str = "/session/minecraft/hasJoined";

/// Builder for a [`SessionClient`].
///
/// # Example
///
/// ```rust
/// use yggdrasil_session::SessionClient;
///
/// let client = SessionClient::builder()
///     .host("http://127.0.0.1:8080")
///     .build()
///     .unwrap();
/// assert_eq!(client.host(), "http://127.0.0.1:8080");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SessionClientBuilder {
    config: ClientConfig,
}

impl SessionClientBuilder {
    /// Creates a new builder targeting the production service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL requests are sent to.
    pub fn host(mut self, host: &str) -> Self {
        self.config.host = host.to_string();
        self
    }

    /// Sets the `User-Agent` product string.
    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.config.user_agent = user_agent.to_string();
        self
    }

    /// Replaces the whole configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Validates the host and builds the client.
    ///
    /// # Errors
    /// - [`SessionError::InvalidHost`] if the host doesn't parse as a URL
    /// - [`SessionError::Http`] if the HTTP stack can't be initialised
    pub fn build(self) -> Result<SessionClient, SessionError> {
        let mut config = self.config;
        config.host = config.host.trim_end_matches('/').to_string();
        Url::parse(&config.host)?;

        // Redirects surface as `UnexpectedStatus`; each call opens its own
        // connection and releases it when the response is consumed.
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .pool_max_idle_per_host(0)
            .build()?;

        Ok(SessionClient {
            http,
            config,
            codec: JsonCodec,
        })
    }
}

/// A client bound to one session service host.
///
/// Holds no per-call state, so one instance can serve every login
/// concurrently. Cloning is cheap. No connection outlives the call that
/// opened it, and 3xx answers are returned as-is instead of followed.
#[derive(Debug, Clone)]
pub struct SessionClient {
    http: reqwest::Client,
    config: ClientConfig,
    codec: JsonCodec,
}

impl SessionClient {
    /// Creates a new builder.
    pub fn builder() -> SessionClientBuilder {
        SessionClientBuilder::new()
    }

    /// Builds a client from an explicit configuration.
    pub fn new(config: ClientConfig) -> Result<Self, SessionError> {
        SessionClientBuilder::new().config(config).build()
    }

    /// Builds a client for the production service.
    pub fn production() -> Result<Self, SessionError> {
        SessionClientBuilder::new().build()
    }

    /// The base URL this client is bound to.
    pub fn host(&self) -> &str {
        &self.config.host
    }

    fn endpoint(&self, path: &str) -> Result<Url, SessionError> {
        Ok(Url::parse(&format!("{}{}", self.config.host, path))?)
    }

    /// Announces a join to the session service (`POST .../join`).
    ///
    /// Expects `204 No Content`. A `403` carries an `error` category that is
    /// mapped to [`SessionError::InsufficientPrivileges`],
    /// [`SessionError::UserBanned`] or
    /// [`SessionError::UnrecognizedRemoteError`]. A `403` body that isn't
    /// valid JSON surfaces as [`SessionError::Protocol`].
    pub async fn join(
        &self,
        access_token: &str,
        selected_profile: Uuid,
        bundle: &ConnectionBundle<'_>,
    ) -> Result<(), SessionError> {
        let request = JoinRequest {
            access_token: access_token.to_string(),
            selected_profile,
            server_id: bundle.server_hash(),
        };
        let body = self.codec.encode(&request)?;
        let url = self.endpoint(JOIN_PATH)?;

        tracing::debug!(%url, profile = %selected_profile, "sending join request");

        let response = self
            .http
            .post(url)
            .header(USER_AGENT, &self.config.user_agent)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        match response.status() {
            StatusCode::NO_CONTENT => Ok(()),
            StatusCode::FORBIDDEN => {
                let bytes = response.bytes().await?;
                let error: ErrorResponse = self.codec.decode(&bytes)?;
                tracing::warn!(
                    profile = %selected_profile,
                    error = %error.error,
                    detail = error.error_message.as_deref().unwrap_or(""),
                    "join refused"
                );
                Err(error.into())
            }
            status => {
                tracing::warn!(%status, "unexpected join response");
                Err(SessionError::UnexpectedStatus(status.as_u16()))
            }
        }
    }

    /// Asks the session service whether `username` joined with the
    /// bundle's server hash (`GET .../hasJoined`).
    ///
    /// No access token is sent. An empty or absent `ip` is left out of the
    /// query. On `200` the profile is returned with its id in dashed form;
    /// `204` means the player has no valid session.
    pub async fn has_joined(
        &self,
        username: &str,
        bundle: &ConnectionBundle<'_>,
        ip: Option<&str>,
    ) -> Result<SessionProfile, SessionError> {
        let server_id = bundle.server_hash();

        let mut url = self.endpoint(HAS_JOINED_PATH)?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("username", username);
            query.append_pair("serverId", &server_id);
            if let Some(ip) = ip.filter(|ip| !ip.is_empty()) {
                query.append_pair("ip", ip);
            }
        }

        tracing::debug!(%username, "verifying player session");

        let response = self
            .http
            .get(url)
            .header(USER_AGENT, &self.config.user_agent)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let bytes = response.bytes().await?;
                let profile: SessionProfile = self.codec.decode(&bytes)?;
                tracing::debug!(%profile, "player session verified");
                Ok(profile)
            }
            StatusCode::NO_CONTENT => {
                tracing::warn!(%username, "no session found for player");
                Err(SessionError::EmptyResponse)
            }
            status => {
                tracing::warn!(%status, %username, "unexpected hasJoined response");
                Err(SessionError::UnexpectedStatus(status.as_u16()))
            }
        }
    }
}

impl SessionService for SessionClient {
    async fn join(
        &self,
        access_token: &str,
        selected_profile: Uuid,
        bundle: &ConnectionBundle<'_>,
    ) -> Result<(), SessionError> {
        SessionClient::join(self, access_token, selected_profile, bundle).await
    }

    async fn has_joined(
        &self,
        username: &str,
        bundle: &ConnectionBundle<'_>,
        ip: Option<&str>,
    ) -> Result<SessionProfile, SessionError> {
        SessionClient::has_joined(self, username, bundle, ip).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DEFAULT_HOST, DEFAULT_USER_AGENT};

    #[test]
    fn test_builder_defaults_to_production() {
        let client = SessionClient::builder().build().unwrap();
        assert_eq!(client.host(), DEFAULT_HOST);
        assert_eq!(client.config.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let client = SessionClient::builder()
            .host("http://localhost:9000/")
            .build()
            .unwrap();
        assert_eq!(client.host(), "http://localhost:9000");
    }

    #[test]
    fn test_builder_rejects_invalid_host() {
        let result = SessionClient::builder().host("not a url").build();
        assert!(matches!(result, Err(SessionError::InvalidHost(_))));
    }

    #[test]
    fn test_new_uses_given_config() {
        let client = SessionClient::new(ClientConfig {
            host: "http://localhost:1".into(),
            user_agent: "test-agent".into(),
        })
        .unwrap();
        assert_eq!(client.host(), "http://localhost:1");
        assert_eq!(client.config.user_agent, "test-agent");
    }

    #[test]
    fn test_endpoint_appends_path_to_host() {
        let client = SessionClient::builder()
            .host("http://localhost:9000/proxy")
            .build()
            .unwrap();
        let url = client.endpoint(JOIN_PATH).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:9000/proxy/session/minecraft/join"
        );
    }
}
