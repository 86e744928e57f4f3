//! Field-level validation for biometric inputs
//!
//! Required fields are checked for presence, finiteness, and positivity
//! before the scoring formulas ever see them, so NaN/infinity cannot
//! propagate into results.

use crate::errors::ProfileError;

/// Validate a required numeric field: present, finite, strictly positive.
pub fn validate_required_positive(
    value: Option<f64>,
    field: &'static str,
) -> Result<f64, ProfileError> {
    let value = value.ok_or(ProfileError::MissingField(field))?;
    if !value.is_finite() {
        return Err(ProfileError::NotFinite(field));
    }
    if value <= 0.0 {
        return Err(ProfileError::NotPositive(field));
    }
    Ok(value)
}

/// Validate an optional numeric field: if present, must be finite and positive.
pub fn validate_optional_positive(
    value: Option<f64>,
    field: &'static str,
) -> Result<Option<f64>, ProfileError> {
    match value {
        None => Ok(None),
        Some(v) if !v.is_finite() => Err(ProfileError::NotFinite(field)),
        Some(v) if v <= 0.0 => Err(ProfileError::NotPositive(field)),
        Some(v) => Ok(Some(v)),
    }
}

/// Valid biological sex values accepted at the input boundary.
pub const VALID_SEX_VALUES: &[&str] = &["male", "female"];

/// Valid activity level strings accepted at the input boundary.
pub const VALID_ACTIVITY_LEVELS: &[&str] =
    &["sedentary", "light", "moderate", "active", "very_active"];
