//! Local decode of the Google credential JWT payload. The signature is not
//! verified here; the credential is only exchanged for a backend profile.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum JwtError {
    #[error("Malformed credential: missing payload segment")]
    MissingPayload,
    #[error("Malformed credential: payload is not base64url")]
    Base64,
    #[error("Malformed credential: payload is not JSON")]
    Json,
}

/// Claims carried by a Google sign-in credential. Unknown claims are kept so
/// they flow into the stored identity unchanged.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GoogleProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(flatten)]
    pub claims: BTreeMap<String, Value>,
}

pub fn parse_jwt(credential: &str) -> Result<GoogleProfile, JwtError> {
    let payload = credential
        .split('.')
        .nth(1)
        .ok_or(JwtError::MissingPayload)?;
    let decoded = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| JwtError::Base64)?;
    serde_json::from_slice(&decoded).map_err(|_| JwtError::Json)
}
