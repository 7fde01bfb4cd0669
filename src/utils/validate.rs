//! Field checks applied to request payloads before any storage access.

use url::Url;

use crate::error::ApiError;

/// Reject empty or whitespace-only values
pub fn require_non_empty(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Require an absolute URL (scheme included)
pub fn require_url(field: &str, value: &str) -> Result<(), ApiError> {
    Url::parse(value)
        .map(|_| ())
        .map_err(|e| ApiError::validation(format!("{field} must be a valid URL: {e}")))
}

pub fn require_optional_url(field: &str, value: Option<&str>) -> Result<(), ApiError> {
    match value {
        Some(v) => require_url(field, v),
        None => Ok(()),
    }
}

/// Structural email check: `local@domain.tld`, no whitespace
pub fn require_email(field: &str, value: &str) -> Result<(), ApiError> {
    if is_email(value) {
        Ok(())
    } else {
        Err(ApiError::validation(format!("{field} must be a valid email address")))
    }
}

fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // At least one dot with non-empty labels on both sides
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty() && !domain.starts_with('.'),
        None => false,
    }
}
