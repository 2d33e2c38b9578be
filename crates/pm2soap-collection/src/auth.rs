//! Auth resolution for collection requests.
//!
//! Bearer tokens travel as an ordinary `Authorization` header, while Basic
//! credentials are recovered from an existing `Authorization: Basic ...`
//! header so they can be written as a structured credentials block.

use crate::types::{Header, Request};
use base64::{Engine as _, engine::general_purpose};
use pm2soap_core::{Error, Result};

/// Resolved authentication scheme of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthKind {
    Basic,
    Bearer,
    NoAuth,
}

impl AuthKind {
    /// Label written into the target `authType` field.
    pub fn label(&self) -> &'static str {
        match self {
            AuthKind::Basic => "Basic",
            AuthKind::Bearer => "Bearer",
            AuthKind::NoAuth => "No Authorization",
        }
    }
}

impl std::fmt::Display for AuthKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Username and password decoded from a Basic authorization header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl Request {
    /// Auth scheme declared by the request's auth block.
    ///
    /// Unknown or missing types resolve to [`AuthKind::NoAuth`].
    pub fn auth_kind(&self) -> AuthKind {
        match self.auth.as_ref().map(|a| a.kind.as_str()) {
            Some("basic") => AuthKind::Basic,
            Some("bearer") => AuthKind::Bearer,
            _ => AuthKind::NoAuth,
        }
    }

    /// Value of the first bearer entry, if the auth block has one.
    pub fn bearer_token(&self) -> Option<String> {
        self.auth
            .as_ref()
            .and_then(|auth| auth.bearer.first())
            .map(|entry| entry.value_str())
    }
}

/// Decode the first `Authorization` header that uses the Basic scheme.
///
/// Headers are scanned in order and the scan stops at the first Basic
/// match; later Basic headers are ignored. A payload that is not valid
/// base64 or not UTF-8 is an error; a payload without `:` is read as a
/// username with an empty password.
pub fn decode_basic_credentials(
    request_name: &str,
    headers: &[Header],
) -> Result<Option<BasicCredentials>> {
    let Some(payload) = headers
        .iter()
        .filter(|h| h.key.eq_ignore_ascii_case("authorization"))
        .find_map(|h| basic_payload(&h.value))
    else {
        return Ok(None);
    };

    let decoded = general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| Error::invalid_credentials(request_name, e))?;
    let decoded =
        String::from_utf8(decoded).map_err(|e| Error::invalid_credentials(request_name, e))?;

    let (username, password) = decoded.split_once(':').unwrap_or((decoded.as_str(), ""));

    Ok(Some(BasicCredentials {
        username: username.to_string(),
        password: password.to_string(),
    }))
}

/// Base64 payload of a `Basic <payload>` header value.
fn basic_payload(value: &str) -> Option<&str> {
    let value = value.trim();
    value
        .get(..6)
        .filter(|scheme| scheme.eq_ignore_ascii_case("basic "))
        .map(|_| value[6..].trim())
}
