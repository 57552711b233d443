//! Field rules that the `validator` derive does not provide out of the box.

use validator::ValidationError;

/// Rejects empty and whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }

    Ok(())
}

/// Accepts blank values, otherwise requires an absolute URL.
pub fn absolute_url(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Ok(());
    }

    // `Url::parse` has no base, so relative references never parse.
    url::Url::parse(value)
        .map(|_| ())
        .map_err(|_| ValidationError::new("url"))
}
