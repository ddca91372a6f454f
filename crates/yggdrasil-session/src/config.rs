//! Client configuration.

/// The production session service.
pub const DEFAULT_HOST: &str = "https://sessionserver.mojang.com";

/// `User-Agent` sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!(
    "yggdrasil/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/arcforge/yggdrasil)"
);

/// Settings a [`SessionClient`](crate::SessionClient) is bound to.
///
/// Both values are fixed for the lifetime of the client. Point `host` at a
/// local stand-in to test a login flow without the real service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL requests are sent to, without a trailing slash.
    pub host: String,

    /// Product string for the `User-Agent` header.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default_targets_production() {
        let config = ClientConfig::default();
        assert_eq!(config.host, "https://sessionserver.mojang.com");
        assert!(config.user_agent.starts_with("yggdrasil/"));
    }
}
