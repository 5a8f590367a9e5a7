//! Configuration resolution
//!
//! Resolves the connection record from an [`AmbientEnvironment`]. For each
//! logical field the candidate keys are tried in priority order (highest
//! first) and the first non-empty value wins:
//!
//! | field      | candidates                                      | fallback            |
//! |------------|-------------------------------------------------|---------------------|
//! | `domain`   | `CONFLUENCE_DOMAIN`, `CONFLUENCE_HOST`          | required            |
//! | `email`    | `CONFLUENCE_EMAIL`, `CONFLUENCE_USERNAME`       | required for basic  |
//! | `token`    | `CONFLUENCE_API_TOKEN`, `CONFLUENCE_PASSWORD`   | required            |
//! | `authType` | `CONFLUENCE_AUTH_TYPE`                          | `basic` / `bearer`  |
//! | `apiPath`  | `CONFLUENCE_API_PATH`                           | `/rest/api`         |

mod env;
mod fields;
mod resolve;
mod types;

pub use env::{AmbientEnvironment, RECOGNIZED_KEYS};
pub use fields::{API_PATH, AUTH_TYPE, DOMAIN, EMAIL, FIELDS, FieldSpec, TOKEN};
pub use resolve::{ConfigError, MissingField, resolve, resolve_with_sources};
pub use types::{AuthType, ConfigSources, REDACTED, ResolvedConfig, ValueSource};
