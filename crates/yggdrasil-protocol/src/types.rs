//! Request and response bodies exchanged with the session service.
//!
//! Field names follow the service's camelCase JSON exactly. A mismatch
//! here doesn't fail loudly: the service just rejects the join or the
//! server fails to parse the profile, so every shape is pinned by a test.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Join request
// ---------------------------------------------------------------------------

/// Body of `POST /session/minecraft/join`.
///
/// Sent by the connecting client to announce that it is about to join a
/// server identified by `server_id` (the server hash, not the raw id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
    /// The player's access token.
    pub access_token: String,

    /// The profile the player is joining with.
    ///
    /// Emitted in the compact 32-digit form the service documents.
    #[serde(serialize_with = "uuid::serde::simple::serialize")]
    pub selected_profile: Uuid,

    /// The server hash computed by [`server_hash`](crate::server_hash).
    pub server_id: String,
}

// ---------------------------------------------------------------------------
// Session profile
// ---------------------------------------------------------------------------

/// A signed profile property, such as `textures`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileProperty {
    pub name: String,
    /// Base64-encoded property payload.
    pub value: String,
    /// Base64 signature over `value`. Absent when the service was asked
    /// for unsigned properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

/// The verified identity returned by `GET /session/minecraft/hasJoined`.
///
/// The service sends `id` without dashes
/// (`11111111222233334444555555555555`). It is parsed into a [`Uuid`], so
/// it always displays and re-serializes in the dashed form
/// (`11111111-2222-3333-4444-555555555555`) that goes back to the client
/// in the login success packet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionProfile {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub properties: Vec<ProfileProperty>,
}

impl SessionProfile {
    /// Looks up a property by name (e.g. `"textures"`).
    pub fn property(&self, name: &str) -> Option<&ProfileProperty> {
        self.properties.iter().find(|p| p.name == name)
    }
}

impl fmt::Display for SessionProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

// ---------------------------------------------------------------------------
// Errors reported by the service
// ---------------------------------------------------------------------------

/// Body of a `403 Forbidden` answer to a join request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Error category, e.g. `"UserBannedException"`.
    pub error: String,
    /// Free-form explanation. Only useful for logs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ErrorResponse {
    /// Classifies the `error` field.
    pub fn kind(&self) -> RemoteError {
        RemoteError::from(self.error.as_str())
    }
}

/// The error categories the service is known to send on a refused join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// The account's Xbox profile has multiplayer disabled.
    InsufficientPrivileges,
    /// The account is banned from multiplayer.
    UserBanned,
    /// Anything else, carried verbatim.
    Other(String),
}

impl From<&str> for RemoteError {
    fn from(error: &str) -> Self {
        match error {
            "InsufficientPrivilegesException" => Self::InsufficientPrivileges,
            "UserBannedException" => Self::UserBanned,
            other => Self::Other(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_id() -> Uuid {
        Uuid::parse_str("11111111-2222-3333-4444-555555555555").unwrap()
    }

    // =====================================================================
    // JoinRequest
    // =====================================================================

    #[test]
    fn test_join_request_json_format() {
        let req = JoinRequest {
            access_token: "token".into(),
            selected_profile: profile_id(),
            server_id: "-7c9d5b".into(),
        };
        let json: serde_json::Value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "accessToken": "token",
                "selectedProfile": "11111111222233334444555555555555",
                "serverId": "-7c9d5b",
            })
        );
    }

    #[test]
    fn test_join_request_accepts_dashed_profile() {
        let req: JoinRequest = serde_json::from_str(
            r#"{"accessToken":"t","selectedProfile":"11111111-2222-3333-4444-555555555555","serverId":"0"}"#,
        )
        .unwrap();
        assert_eq!(req.selected_profile, profile_id());
    }

    // =====================================================================
    // SessionProfile
    // =====================================================================

    #[test]
    fn test_session_profile_id_is_reformatted_with_dashes() {
        let profile: SessionProfile = serde_json::from_str(
            r#"{"id":"11111111222233334444555555555555","name":"Alex","properties":[]}"#,
        )
        .unwrap();
        assert_eq!(profile.id.to_string(), "11111111-2222-3333-4444-555555555555");

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["id"], "11111111-2222-3333-4444-555555555555");
    }

    #[test]
    fn test_session_profile_properties_default_to_empty() {
        let profile: SessionProfile =
            serde_json::from_str(r#"{"id":"11111111222233334444555555555555","name":"Alex"}"#)
                .unwrap();
        assert!(profile.properties.is_empty());
    }

    #[test]
    fn test_session_profile_rejects_malformed_id() {
        let result: Result<SessionProfile, _> =
            serde_json::from_str(r#"{"id":"not-a-uuid","name":"Alex","properties":[]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_session_profile_property_lookup() {
        let profile: SessionProfile = serde_json::from_str(
            r#"{
                "id":"11111111222233334444555555555555",
                "name":"Alex",
                "properties":[
                    {"name":"textures","value":"e30=","signature":"c2ln"},
                    {"name":"other","value":"eA=="}
                ]
            }"#,
        )
        .unwrap();

        let textures = profile.property("textures").unwrap();
        assert_eq!(textures.value, "e30=");
        assert_eq!(textures.signature.as_deref(), Some("c2ln"));
        assert_eq!(profile.property("other").unwrap().signature, None);
        assert!(profile.property("missing").is_none());
    }

    #[test]
    fn test_session_profile_display() {
        let profile = SessionProfile {
            id: profile_id(),
            name: "Alex".into(),
            properties: vec![],
        };
        assert_eq!(
            profile.to_string(),
            "Alex (11111111-2222-3333-4444-555555555555)"
        );
    }

    // =====================================================================
    // ErrorResponse / RemoteError
    // =====================================================================

    #[test]
    fn test_error_response_known_kinds() {
        let banned: ErrorResponse =
            serde_json::from_str(r#"{"error":"UserBannedException"}"#).unwrap();
        assert_eq!(banned.kind(), RemoteError::UserBanned);

        let privileges: ErrorResponse = serde_json::from_str(
            r#"{"error":"InsufficientPrivilegesException","errorMessage":"Forbidden"}"#,
        )
        .unwrap();
        assert_eq!(privileges.kind(), RemoteError::InsufficientPrivileges);
        assert_eq!(privileges.error_message.as_deref(), Some("Forbidden"));
    }

    #[test]
    fn test_error_response_unknown_kind_is_verbatim() {
        let other: ErrorResponse =
            serde_json::from_str(r#"{"error":"SomethingElse"}"#).unwrap();
        assert_eq!(other.kind(), RemoteError::Other("SomethingElse".into()));
    }
}
