//! Metabolic Age WASM Module
//!
//! WebAssembly bindings over the core library so the scoring computation
//! can run directly in the browser. Inputs and results cross the boundary
//! as JSON strings.

use metabolic_age_core::BiometricInput;
use wasm_bindgen::prelude::*;

/// Calculate BMI from weight (kg) and height (cm)
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if height_cm <= 0.0 {
        return 0.0;
    }
    metabolic_age_core::calculate_bmi(weight_kg, height_cm)
}

/// Get the BMI category description for a BMI value
#[wasm_bindgen]
pub fn classify_bmi(bmi: f64) -> String {
    metabolic_age_core::classify_bmi(bmi).description().to_string()
}

/// Compute a metabolic age result from a JSON biometric input.
///
/// Returns the serialized `MetabolicResult`, or `None` when the input is
/// missing required fields or otherwise invalid.
#[wasm_bindgen]
pub fn compute_metabolic_profile(input_json: &str) -> Option<String> {
    let input: BiometricInput = serde_json::from_str(input_json).ok()?;
    let result = metabolic_age_core::compute_metabolic_profile(&input)?;
    serde_json::to_string(&result).ok()
}

/// Generate insight text for a computed metabolic age, as JSON.
#[wasm_bindgen]
pub fn generate_insight(input_json: &str) -> Option<String> {
    let input: BiometricInput = serde_json::from_str(input_json).ok()?;
    let result = metabolic_age_core::compute_metabolic_profile(&input)?;
    let age = input.age?.round() as u32;
    let insight =
        metabolic_age_core::generate_insight(result.metabolic_age_years, age, &result.factor_breakdown);
    serde_json::to_string(&insight).ok()
}
