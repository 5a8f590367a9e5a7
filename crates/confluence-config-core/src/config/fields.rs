//! Declarative per-field resolution rules

use super::env::AmbientEnvironment;

/// Resolution rule for one logical configuration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Logical field name as it appears in the canonical record.
    pub name: &'static str,
    /// Source keys, highest priority first.
    pub candidates: &'static [&'static str],
    /// Static fallback used when no candidate is set.
    pub default: Option<&'static str>,
    /// Whether resolution fails when neither a candidate nor a default applies.
    ///
    /// For `email` this is conditional on the auth type; see
    /// [`AuthType::requires_identity`](super::AuthType::requires_identity).
    pub required: bool,
}

/// Target host, no scheme.
pub const DOMAIN: FieldSpec = FieldSpec {
    name: "domain",
    candidates: &["CONFLUENCE_DOMAIN", "CONFLUENCE_HOST"],
    default: None,
    required: true,
};

/// Identity for authentication. Cloud uses an email, on-prem a username.
pub const EMAIL: FieldSpec = FieldSpec {
    name: "email",
    candidates: &["CONFLUENCE_EMAIL", "CONFLUENCE_USERNAME"],
    default: None,
    required: true,
};

/// Credential: API token (cloud, PAT) or password (on-prem).
pub const TOKEN: FieldSpec = FieldSpec {
    name: "token",
    candidates: &["CONFLUENCE_API_TOKEN", "CONFLUENCE_PASSWORD"],
    default: None,
    required: true,
};

/// Authentication scheme. The fallback is `basic`, or `bearer` when no
/// identity was supplied.
pub const AUTH_TYPE: FieldSpec = FieldSpec {
    name: "authType",
    candidates: &["CONFLUENCE_AUTH_TYPE"],
    default: Some("basic"),
    required: false,
};

/// Base path for REST requests.
pub const API_PATH: FieldSpec = FieldSpec {
    name: "apiPath",
    candidates: &["CONFLUENCE_API_PATH"],
    default: Some("/rest/api"),
    required: false,
};

/// All fields in resolution order.
pub const FIELDS: [FieldSpec; 5] = [DOMAIN, EMAIL, TOKEN, AUTH_TYPE, API_PATH];

impl FieldSpec {
    /// First candidate holding a non-blank value, with that value trimmed.
    ///
    /// Candidates after the winner are not consulted.
    pub fn first_present<'a>(
        &self,
        env: &'a AmbientEnvironment,
    ) -> Option<(&'static str, &'a str)> {
        self.candidates
            .iter()
            .find_map(|key| env.lookup(key).map(|value| (*key, value)))
    }

    /// Lower-priority candidates that are set but lost to an earlier one.
    pub fn shadowed(&self, env: &AmbientEnvironment) -> Vec<&'static str> {
        let Some(winner) = self.candidates.iter().position(|key| env.is_set(key)) else {
            return Vec::new();
        };
        self.candidates[winner + 1..]
            .iter()
            .copied()
            .filter(|key| env.is_set(key))
            .collect()
    }
}
