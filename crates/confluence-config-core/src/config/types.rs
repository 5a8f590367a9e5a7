//! Configuration types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mask written in place of the token by [`ResolvedConfig::redacted`].
pub const REDACTED: &str = "********";

/// Authentication scheme selected for the API client.
///
/// Parsing never fails: unknown names are preserved in [`AuthType::Other`]
/// and left for the consuming client to accept or reject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AuthType {
    /// Identity plus token/password, sent as HTTP Basic.
    #[default]
    Basic,
    /// Token only (personal access token), sent as a bearer header.
    Bearer,
    /// Any other scheme name, trimmed but otherwise verbatim.
    Other(String),
}

impl AuthType {
    /// Parse a scheme name, case-insensitively for the known schemes.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "basic" => Self::Basic,
            "bearer" => Self::Bearer,
            _ => Self::Other(trimmed.to_string()),
        }
    }

    /// Canonical name of the scheme.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic => "basic",
            Self::Bearer => "bearer",
            Self::Other(name) => name,
        }
    }

    /// Whether an identity (email/username) must accompany the credential.
    pub fn requires_identity(&self) -> bool {
        !matches!(self, Self::Bearer)
    }
}

impl fmt::Display for AuthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for AuthType {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<AuthType> for String {
    fn from(auth: AuthType) -> Self {
        match auth {
            AuthType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

/// Canonical connection record consumed by the API client.
///
/// Built fresh by every resolution call and never modified afterwards.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    /// Service host, no scheme
    pub domain: String,
    /// Identity; absent only when the auth type needs none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// API token or password
    pub token: String,
    /// Authentication scheme
    pub auth_type: AuthType,
    /// Base path for REST requests, leading slash, no trailing slash
    pub api_path: String,
}

impl ResolvedConfig {
    /// Copy of this record with the token masked, for display.
    pub fn redacted(&self) -> Self {
        Self {
            token: REDACTED.to_string(),
            ..self.clone()
        }
    }
}

impl fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("domain", &self.domain)
            .field("email", &self.email)
            .field("token", &REDACTED)
            .field("auth_type", &self.auth_type)
            .field("api_path", &self.api_path)
            .finish()
    }
}

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    /// The named environment key won.
    Env(&'static str),
    /// The field's static default.
    Default,
    /// Derived from other resolved fields (e.g. cloud API path, bearer auth).
    Inferred,
}

impl fmt::Display for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Env(key) => f.write_str(key),
            Self::Default => f.write_str("default"),
            Self::Inferred => f.write_str("inferred"),
        }
    }
}

/// Provenance of each field in a [`ResolvedConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSources {
    pub domain: ValueSource,
    /// `None` when no identity was resolved
    pub email: Option<ValueSource>,
    pub token: ValueSource,
    pub auth_type: ValueSource,
    pub api_path: ValueSource,
}
