use serde::Deserialize;

use crate::server::error::validation::ValidationError;

/// Body of forms that carry nothing but the CSRF token, such as delete buttons.
#[derive(Deserialize, Default)]
#[serde(default)]
pub struct CsrfForm {
    pub csrf_token: String,
}

/// Parse a whole-number form field, using `default` when the field is blank.
pub fn parse_number(field: &'static str, value: &str, default: i32) -> Result<i32, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(default);
    }

    value.parse().map_err(|_| ValidationError::NotANumber {
        field,
        value: value.to_string(),
    })
}

/// Parse a required whole-number form field.
pub fn parse_required_number(field: &'static str, value: &str) -> Result<i32, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }

    parse_number(field, value, 0)
}

/// Keep redirects on this site: only absolute local paths are accepted.
pub fn local_redirect_target(target: &str) -> &str {
    let is_local = target.starts_with('/') && !target.starts_with("//") && !target.contains('\\');

    if is_local {
        target
    } else {
        "/"
    }
}
