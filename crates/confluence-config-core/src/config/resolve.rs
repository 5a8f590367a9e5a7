//! Alias-precedence resolution of the connection record
//!
//! [`resolve`] is a pure function of the [`AmbientEnvironment`] it is handed:
//! no process environment reads, no I/O, no shared state. Either every
//! required field resolves or the call fails with a [`ConfigError`] listing
//! all of the gaps; a partial record is never returned.

use super::env::AmbientEnvironment;
use super::fields::{API_PATH, AUTH_TYPE, DOMAIN, EMAIL, FieldSpec, TOKEN};
use super::types::{AuthType, ConfigSources, ResolvedConfig, ValueSource};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// API path used by Atlassian Cloud sites (`*.atlassian.net`).
const CLOUD_API_PATH: &str = "/wiki/rest/api";
const CLOUD_DOMAIN_SUFFIX: &str = ".atlassian.net";

/// A required field that no candidate key supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingField {
    /// Logical field name
    pub field: &'static str,
    /// Keys that would have satisfied it
    pub candidates: &'static [&'static str],
}

impl MissingField {
    fn of(spec: &FieldSpec) -> Self {
        Self {
            field: spec.name,
            candidates: spec.candidates,
        }
    }
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (set {})", self.field, self.candidates.join(" or "))
    }
}

/// Configuration error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// One or more required fields could not be resolved
    #[error("missing required configuration: {}", join_missing(.fields))]
    MissingRequired { fields: Vec<MissingField> },
}

impl ConfigError {
    /// Names of the fields that were missing, in resolution order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        match self {
            Self::MissingRequired { fields } => fields.iter().map(|m| m.field).collect(),
        }
    }
}

fn join_missing(fields: &[MissingField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Resolve the canonical connection record from `env`.
///
/// # Errors
///
/// Returns [`ConfigError::MissingRequired`] when the domain or token is
/// missing, or when the identity is missing and the auth type needs one.
pub fn resolve(env: &AmbientEnvironment) -> Result<ResolvedConfig, ConfigError> {
    resolve_with_sources(env).map(|(config, _)| config)
}

/// Resolve the connection record along with the source of every field.
///
/// Precedence per field is strictly positional over [`FieldSpec::candidates`];
/// blank values fall through to the next candidate. Fields are resolved
/// independently except for two derived fallbacks:
///
/// - `authType` falls back to `basic` when an identity is present and to
///   `bearer` when it is not
/// - `apiPath` falls back to `/wiki/rest/api` for `*.atlassian.net` domains
///   and to `/rest/api` otherwise
///
/// # Errors
///
/// See [`resolve`].
pub fn resolve_with_sources(
    env: &AmbientEnvironment,
) -> Result<(ResolvedConfig, ConfigSources), ConfigError> {
    let domain = pick(&DOMAIN, env);
    let email = pick(&EMAIL, env);
    let token = pick(&TOKEN, env);

    let (auth_type, auth_source) = match pick(&AUTH_TYPE, env) {
        Some((key, raw)) => (AuthType::parse(raw), ValueSource::Env(key)),
        None if email.is_some() => {
            let fallback = AUTH_TYPE.default.map(AuthType::parse).unwrap_or_default();
            (fallback, ValueSource::Default)
        }
        None => (AuthType::Bearer, ValueSource::Inferred),
    };

    let explicit_path = pick(&API_PATH, env)
        .and_then(|(key, raw)| normalize_api_path(raw).map(|path| (path, ValueSource::Env(key))));
    let (api_path, path_source) =
        explicit_path.unwrap_or_else(|| default_api_path(domain.map(|(_, d)| d)));

    let checks = [
        (&DOMAIN, domain.is_some(), DOMAIN.required),
        (&EMAIL, email.is_some(), EMAIL.required && auth_type.requires_identity()),
        (&TOKEN, token.is_some(), TOKEN.required),
    ];
    let missing: Vec<MissingField> = checks
        .into_iter()
        .filter(|(_, present, required)| *required && !present)
        .map(|(spec, _, _)| MissingField::of(spec))
        .collect();

    let (Some((domain_key, domain)), Some((token_key, token)), true) =
        (domain, token, missing.is_empty())
    else {
        debug!(missing = %join_missing(&missing), "configuration incomplete");
        return Err(ConfigError::MissingRequired { fields: missing });
    };

    let config = ResolvedConfig {
        domain: domain.to_string(),
        email: email.map(|(_, v)| v.to_string()),
        token: token.to_string(),
        auth_type,
        api_path,
    };
    let sources = ConfigSources {
        domain: ValueSource::Env(domain_key),
        email: email.map(|(key, _)| ValueSource::Env(key)),
        token: ValueSource::Env(token_key),
        auth_type: auth_source,
        api_path: path_source,
    };

    Ok((config, sources))
}

/// First-present lookup for `spec`, with debug tracing of the winner and of
/// any shadowed aliases.
fn pick<'a>(spec: &FieldSpec, env: &'a AmbientEnvironment) -> Option<(&'static str, &'a str)> {
    let found = spec.first_present(env);
    if let Some((key, _)) = found {
        debug!(field = spec.name, source = key, "resolved configuration field");
        let shadowed = spec.shadowed(env);
        if !shadowed.is_empty() {
            debug!(
                field = spec.name,
                winner = key,
                ignored = ?shadowed,
                "lower-priority alias ignored"
            );
        }
    }
    found
}

/// Canonical form of an explicit API path: leading slash, no trailing slash.
///
/// Returns `None` for a value made only of slashes so the default applies.
fn normalize_api_path(raw: &str) -> Option<String> {
    let trimmed = raw.trim_end_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with('/') {
        Some(trimmed.to_string())
    } else {
        Some(format!("/{trimmed}"))
    }
}

fn default_api_path(domain: Option<&str>) -> (String, ValueSource) {
    let is_cloud = domain
        .map(|d| d.to_ascii_lowercase().ends_with(CLOUD_DOMAIN_SUFFIX))
        .unwrap_or(false);
    if is_cloud {
        (CLOUD_API_PATH.to_string(), ValueSource::Inferred)
    } else {
        let standard = API_PATH.default.unwrap_or("/rest/api");
        (standard.to_string(), ValueSource::Default)
    }
}
