//! Input validators.
//!
//! Every check here runs before any URL is produced. Validators return the
//! narrowed value on success (widths become `u32` once they are known to be
//! non-negative), so downstream code never re-checks them.

use url::Url;

use crate::error::ValidationError;

/// Smallest tolerance accepted for width generation (one percent).
pub const MIN_TOLERANCE: f64 = 0.01;

/// Normalize a domain to a bare hostname.
///
/// Accepts `example.imgix.net`, `https://example.imgix.net`, or a domain with
/// a trailing path or port; only the hostname is kept. A domain without a
/// scheme is parsed as if it had been given with `https://`.
pub fn validate_domain(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();

    let candidate = if has_scheme_prefix(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let parsed = Url::parse(&candidate).map_err(|e| ValidationError::InvalidDomain {
        domain: raw.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(host.to_string()),
        _ => Err(ValidationError::InvalidDomain {
            domain: raw.to_string(),
            reason: "no hostname found".to_string(),
        }),
    }
}

/// Whether `value` starts with `scheme://`, where a scheme is a letter
/// followed by letters, digits, `+`, `-`, or `.`.
fn has_scheme_prefix(value: &str) -> bool {
    let Some((scheme, _)) = value.split_once("://") else {
        return false;
    };

    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Check that a single width is not negative.
pub fn validate_width(value: i32) -> Result<u32, ValidationError> {
    u32::try_from(value).map_err(|_| ValidationError::NegativeWidth(value))
}

/// Check that a tolerance is at least one percent.
pub fn validate_tolerance(value: f64) -> Result<f64, ValidationError> {
    if value.is_nan() || value < MIN_TOLERANCE {
        return Err(ValidationError::ToleranceTooSmall(value));
    }
    Ok(value)
}

/// Validate both ends of a width range and require `min <= max`.
pub fn validate_range(min: i32, max: i32) -> Result<(u32, u32), ValidationError> {
    let valid_min = validate_width(min)?;
    let valid_max = validate_width(max)?;

    if valid_max < valid_min {
        return Err(ValidationError::InvertedRange { min, max });
    }

    Ok((valid_min, valid_max))
}

/// Validate an explicit list of widths, failing on the first negative value.
pub fn validate_widths(values: &[i32]) -> Result<Vec<u32>, ValidationError> {
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            u32::try_from(value).map_err(|_| ValidationError::NegativeWidthAtIndex { index, value })
        })
        .collect()
}
