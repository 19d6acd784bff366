use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::utils::jwt::GoogleProfile;

/// Identity cached in local storage once a login completes. Extra Google
/// claims are carried through the flattened map.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Identity {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    pub userid: String,
    #[serde(flatten)]
    pub claims: BTreeMap<String, Value>,
}

impl Identity {
    pub fn from_profile(profile: GoogleProfile, userid: impl Into<String>) -> Self {
        Self {
            avatar: profile.picture,
            name: profile.name,
            email: profile.email,
            userid: userid.into(),
            claims: profile.claims,
        }
    }
}

/// Body of the profile exchange call made during login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserUpsertRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserUpsertResponse {
    #[serde(rename = "_id")]
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub property_type: String,
    pub location: String,
    pub price: f64,
    #[serde(default)]
    pub photo: String,
    /// Either a bare id or a populated user object, depending on endpoint.
    #[serde(default)]
    pub creator: Option<Value>,
}

/// Create/update body for a property. The backend resolves the creator by
/// email.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyPayload {
    pub title: String,
    pub description: String,
    pub property_type: String,
    pub location: String,
    pub price: f64,
    pub photo: String,
    pub email: String,
}

/// Agents are backend users with their owned properties attached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub all_properties: Vec<Property>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<Value>,
}

impl ApiError {
    pub fn request_failed(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: Some("REQUEST_FAILED".into()),
            details: None,
        }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: Some("UNKNOWN".into()),
            details: None,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: Some("VALIDATION_ERROR".into()),
            details: None,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn property_deserializes_wire_names() {
        let property: Property = serde_json::from_value(json!({
            "_id": "p1",
            "title": "Loft",
            "description": "Open plan",
            "propertyType": "apartment",
            "location": "Lisbon",
            "price": 1200.0,
            "photo": "https://example.com/p.jpg",
            "creator": "u1"
        }))
        .unwrap();
        assert_eq!(property.id, "p1");
        assert_eq!(property.property_type, "apartment");
        assert_eq!(property.creator, Some(json!("u1")));
    }

    #[test]
    fn property_payload_serializes_camel_case() {
        let payload = PropertyPayload {
            title: "Loft".into(),
            description: String::new(),
            property_type: "apartment".into(),
            location: "Lisbon".into(),
            price: 1200.0,
            photo: "url".into(),
            email: "a@x.com".into(),
        };
        let raw = serde_json::to_value(&payload).unwrap();
        assert_eq!(raw.get("propertyType"), Some(&json!("apartment")));
        assert!(raw.get("property_type").is_none());
    }

    #[test]
    fn agent_defaults_missing_properties_list() {
        let agent: Agent = serde_json::from_value(json!({
            "_id": "u1",
            "name": "Alice",
            "email": "a@x.com"
        }))
        .unwrap();
        assert!(agent.all_properties.is_empty());
        assert!(agent.avatar.is_none());
    }

    #[test]
    fn identity_round_trips_extra_claims() {
        let identity: Identity = serde_json::from_value(json!({
            "name": "Alice",
            "email": "a@x.com",
            "avatar": "url",
            "userid": "123",
            "sub": "google-123"
        }))
        .unwrap();
        assert_eq!(identity.userid, "123");
        assert_eq!(identity.claims.get("sub"), Some(&json!("google-123")));

        let raw = serde_json::to_value(&identity).unwrap();
        assert_eq!(raw.get("sub"), Some(&json!("google-123")));
        assert_eq!(raw.get("avatar"), Some(&json!("url")));
    }

    #[test]
    fn api_error_displays_message() {
        let error = ApiError::validation("Title is required");
        assert_eq!(error.to_string(), "Title is required");
        assert_eq!(String::from(error), "Title is required");
    }
}
