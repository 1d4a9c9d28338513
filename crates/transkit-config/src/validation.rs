//! Validation utilities and regex patterns

use regex::Regex;
use std::sync::LazyLock;
use url::Url;
use validator::ValidationError;

/// HTTP header field names are RFC 7230 tokens
pub static HEADER_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[!#$%&'*+\-.^_`|~0-9A-Za-z]+$").expect("Invalid header name regex pattern")
});

/// Catalog domains and locales end up in file names
pub static CATALOG_SEGMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9A-Za-z][0-9A-Za-z_\-.@]*$").expect("Invalid catalog segment regex pattern")
});

/// Validate a provider URL template
pub fn validate_url_template(template: &str) -> Result<(), ValidationError> {
    if template.is_empty() {
        return Err(ValidationError::new("empty_url_template"));
    }

    if !template.contains("{branch}") {
        return Err(ValidationError::new("missing_branch_placeholder"));
    }

    let url = Url::parse(&template.replace("{branch}", "main"))
        .map_err(|_| ValidationError::new("invalid_url_template"))?;

    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(ValidationError::new("invalid_url_template_scheme"));
    }

    Ok(())
}

/// Validate a domain or locale used to build a catalog file name
pub fn validate_catalog_segment(segment: &str) -> Result<(), ValidationError> {
    if segment.is_empty() {
        return Err(ValidationError::new("empty_catalog_segment"));
    }

    if segment.contains("..") || !CATALOG_SEGMENT_REGEX.is_match(segment) {
        return Err(ValidationError::new("invalid_catalog_segment"));
    }

    Ok(())
}
