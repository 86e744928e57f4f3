//! Metabolic Age Core Library
//!
//! Pure, deterministic health metric calculations: metabolic age, BMR
//! (revised Harris-Benedict), TDEE, BMI classification, and the insight
//! text that accompanies them. All state management, persistence, and
//! network I/O belong to the calling layers; this crate only computes.
//!
//! The main entry point is [`compute_metabolic_profile`], which takes the
//! loose [`BiometricInput`] shape a profile store supplies and returns
//! `None` when the data is insufficient to compute a result.

pub mod bmi;
pub mod errors;
pub mod insights;
pub mod metabolic;
pub mod profile;
pub mod validation;

// Re-export commonly used items
pub use bmi::{calculate_bmi, classify_bmi, healthy_weight_range_kg, BmiCategory};
pub use errors::ProfileError;
pub use insights::{generate_insight, MetabolicInsight, Severity};
pub use metabolic::{
    calculate_bmr_harris_benedict, calculate_metabolic_age, compute_metabolic_profile,
    AgeComparison, FactorBreakdown, FactorScore, MetabolicResult,
};
pub use profile::{
    age_from_date_of_birth, ActivityLevel, BiometricInput, BiometricProfile, Sex,
};
