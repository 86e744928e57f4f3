//! Error types for the metabolic age library

use thiserror::Error;

/// Reasons a biometric input cannot be turned into a typed profile.
///
/// Callers that only care about "computable or not" should use
/// [`crate::compute_metabolic_profile`], which collapses these into `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Field {0} is not a finite number")]
    NotFinite(&'static str),

    #[error("Field {0} must be strictly positive")]
    NotPositive(&'static str),

    #[error("Invalid biological sex: {0:?} (expected \"male\" or \"female\")")]
    InvalidSex(String),
}

impl ProfileError {
    /// The offending field name, for diagnostics.
    pub fn field(&self) -> &'static str {
        match self {
            ProfileError::MissingField(f)
            | ProfileError::NotFinite(f)
            | ProfileError::NotPositive(f) => f,
            ProfileError::InvalidSex(_) => "sex",
        }
    }
}
