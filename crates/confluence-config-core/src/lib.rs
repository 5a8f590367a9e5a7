//! Core configuration resolution for confluence-config
//!
//! This crate turns an environment-style key/value mapping into the single
//! canonical connection record a Confluence API client needs.
//!
//! Resolution is a pure function of its input:
//! - Several accepted names per setting (cloud vs. on-prem, current vs. legacy)
//! - Strict positional priority between aliases
//! - Empty or whitespace-only values fall through to the next alias

pub mod config;
pub mod logging;

pub use config::{
    AmbientEnvironment, AuthType, ConfigError, ConfigSources, FieldSpec, MissingField,
    ResolvedConfig, ValueSource, resolve, resolve_with_sources,
};
