//! askama filters
//!
//! Bring them into a template module with `use transkit_web::filters;`
//! next to the template struct, then write `{{ "welcome"|trans }}`,
//! `{{ "subject"|trans_in("emails") }}` or
//! `{{ "hello"|trans_with("messages", greeting_params) }}`.

use std::fmt::Display;
use transkit_i18n::{Parameters, DEFAULT_DOMAIN};

/// Translate in the default domain
pub fn trans<T: Display>(key: T) -> askama::Result<String> {
    Ok(crate::context::t(&key.to_string(), DEFAULT_DOMAIN, None))
}

/// Translate in `domain`
pub fn trans_in<T: Display>(key: T, domain: &str) -> askama::Result<String> {
    Ok(crate::context::t(&key.to_string(), domain, None))
}

/// Translate in `domain` with placeholder substitutions
pub fn trans_with<T: Display>(key: T, domain: &str, parameters: &Parameters) -> askama::Result<String> {
    Ok(crate::context::t(&key.to_string(), domain, Some(parameters)))
}
