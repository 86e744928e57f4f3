//! Metabolic age scoring
//!
//! Derives a heuristic "metabolic age" from a biometric profile, along with
//! BMR, TDEE, a 0-100 health score, and a per-factor breakdown. The formula
//! is deterministic and free of I/O; same profile in, same result out.
//!
//! Metabolic age is a motivational display figure, not a medical measurement.

use serde::{Deserialize, Serialize};

use crate::bmi::{calculate_bmi, classify_bmi};
use crate::profile::{BiometricInput, BiometricProfile, Sex};

/// Bounds for the derived metabolic age
const METABOLIC_AGE_MIN: i32 = 18;
const METABOLIC_AGE_MAX: i32 = 80;

/// Qualitative comparison of metabolic age against chronological age
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeComparison {
    Younger,
    Older,
    Same,
}

/// One scored factor with a display description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorScore {
    /// Score contribution (positive = older-acting metabolism)
    pub score: i32,
    /// Human-readable explanation of the contribution
    pub description: String,
}

/// Per-factor explanation of the metabolic age score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorBreakdown {
    pub bmr_efficiency: FactorScore,
    pub body_composition: FactorScore,
    pub activity: FactorScore,
}

/// Result of a metabolic age computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetabolicResult {
    /// Derived metabolic age, clamped to [18, 80]
    pub metabolic_age_years: u32,
    /// Basal Metabolic Rate, rounded to whole kcal
    pub bmr_kcal_per_day: u32,
    /// Total Daily Energy Expenditure, rounded to whole kcal
    pub tdee_kcal_per_day: u32,
    /// Overall health score in [0, 100]
    pub health_score: u32,
    /// BMI rounded to one decimal place
    pub bmi: f64,
    /// Metabolic age relative to chronological age
    pub comparison: AgeComparison,
    /// Ratio of computed BMR to expected BMR, two decimal places
    pub bmr_efficiency_ratio: f64,
    /// Explanation of the main score contributions
    pub factor_breakdown: FactorBreakdown,
}

/// Calculate BMR using the revised Harris-Benedict equation
///
/// Men: BMR = 88.362 + 13.397 × weight(kg) + 4.799 × height(cm) - 5.677 × age(y)
/// Women: BMR = 447.593 + 9.247 × weight(kg) + 3.098 × height(cm) - 4.330 × age(y)
pub fn calculate_bmr_harris_benedict(weight_kg: f64, height_cm: f64, age_years: u32, sex: Sex) -> f64 {
    match sex {
        Sex::Male => 88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age_years as f64,
        Sex::Female => 447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.330 * age_years as f64,
    }
}

/// Score contribution from the BMR efficiency ratio
fn bmr_efficiency_score(ratio: f64) -> i32 {
    if ratio > 1.15 {
        -8
    } else if ratio > 1.05 {
        -4
    } else if ratio < 0.85 {
        8
    } else if ratio < 0.95 {
        4
    } else {
        0
    }
}

fn bmr_efficiency_description(score: i32) -> &'static str {
    match score {
        -8 => "Resting metabolism is well above the expected rate",
        -4 => "Resting metabolism is above the expected rate",
        4 => "Resting metabolism is below the expected rate",
        8 => "Resting metabolism is well below the expected rate",
        _ => "Resting metabolism is in line with the expected rate",
    }
}

/// Score contribution from BMI banding
fn body_composition_score(bmi: f64) -> i32 {
    if bmi < 18.5 {
        6
    } else if bmi < 25.0 {
        -2
    } else if bmi < 30.0 {
        4
    } else if bmi < 35.0 {
        8
    } else {
        12
    }
}

/// Age-related decline adjustment, applied only past age 30.
///
/// Compares the actual BMR decline implied by the efficiency ratio against
/// the ~1.5% per decade expected after 30.
fn age_decline_adjustment(age_years: u32, bmr_efficiency_ratio: f64) -> i32 {
    if age_years <= 30 {
        return 0;
    }
    let expected_decline_percent = ((age_years - 30) as f64 / 10.0) * 1.5;
    let actual_decline_percent = (1.0 - bmr_efficiency_ratio) * 100.0;
    if actual_decline_percent - expected_decline_percent > 5.0 {
        4
    } else if expected_decline_percent - actual_decline_percent > 5.0 {
        -4
    } else {
        0
    }
}

/// Refinement from measured body composition, applied only when both body
/// fat percentage and muscle mass are available.
fn body_composition_refinement(
    sex: Sex,
    weight_kg: f64,
    body_fat_percent: f64,
    muscle_mass_kg: f64,
) -> i32 {
    let ideal_body_fat = match sex {
        Sex::Male => 15.0,
        Sex::Female => 25.0,
    };
    let fat_diff = body_fat_percent - ideal_body_fat;
    let mut adjustment = if fat_diff > 10.0 {
        3
    } else if fat_diff > 5.0 {
        1
    } else if fat_diff < -5.0 {
        -2
    } else {
        0
    };

    let expected_muscle_kg = weight_kg
        * match sex {
            Sex::Male => 0.45,
            Sex::Female => 0.35,
        };
    if muscle_mass_kg > expected_muscle_kg * 1.1 {
        adjustment -= 2;
    } else if muscle_mass_kg < expected_muscle_kg * 0.9 {
        adjustment += 2;
    }

    adjustment
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Compute the full metabolic result for a validated profile.
///
/// Pure and total: every valid [`BiometricProfile`] produces a result.
pub fn calculate_metabolic_age(profile: &BiometricProfile) -> MetabolicResult {
    let bmr = calculate_bmr_harris_benedict(
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.sex,
    );

    // The expected BMR currently comes from the same equation and inputs as
    // the computed one, so this ratio stays at 1.0 until an independent
    // population baseline replaces it. Kept for output-compatibility with
    // existing clients of the breakdown.
    let expected_bmr = calculate_bmr_harris_benedict(
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.sex,
    );
    let bmr_efficiency_ratio = bmr / expected_bmr;

    let bmi = calculate_bmi(profile.weight_kg, profile.height_cm);

    let efficiency_score = bmr_efficiency_score(bmr_efficiency_ratio);
    let composition_score = body_composition_score(bmi);
    let activity_score = profile.activity_level.age_score();

    let mut metabolic_age_score = efficiency_score + composition_score + activity_score;
    metabolic_age_score += age_decline_adjustment(profile.age_years, bmr_efficiency_ratio);

    if let (Some(body_fat), Some(muscle_mass)) = (profile.body_fat_percent, profile.muscle_mass_kg)
    {
        metabolic_age_score +=
            body_composition_refinement(profile.sex, profile.weight_kg, body_fat, muscle_mass);
    }

    let age = profile.age_years as i32;
    let metabolic_age =
        (age + metabolic_age_score).clamp(METABOLIC_AGE_MIN, METABOLIC_AGE_MAX);
    let health_score = (100 - (metabolic_age_score + 20)).clamp(0, 100);

    let bmr_rounded = bmr.round();
    let tdee = (bmr_rounded * profile.activity_level.multiplier()).round();

    let comparison = if metabolic_age < age - 2 {
        AgeComparison::Younger
    } else if metabolic_age > age + 2 {
        AgeComparison::Older
    } else {
        AgeComparison::Same
    };

    let category = classify_bmi(bmi);
    let factor_breakdown = FactorBreakdown {
        bmr_efficiency: FactorScore {
            score: efficiency_score,
            description: bmr_efficiency_description(efficiency_score).to_string(),
        },
        body_composition: FactorScore {
            score: composition_score,
            description: format!("BMI {:.1}: {}", bmi, category.description()),
        },
        activity: FactorScore {
            score: activity_score,
            description: profile.activity_level.description().to_string(),
        },
    };

    MetabolicResult {
        metabolic_age_years: metabolic_age as u32,
        bmr_kcal_per_day: bmr_rounded as u32,
        tdee_kcal_per_day: tdee as u32,
        health_score: health_score as u32,
        bmi: round_to(bmi, 1),
        comparison,
        bmr_efficiency_ratio: round_to(bmr_efficiency_ratio, 2),
        factor_breakdown,
    }
}

/// Boundary entry point: validate a loose input and compute its result.
///
/// Returns `None` (the "unavailable" sentinel) when any required field is
/// missing or invalid; callers should display no metabolic age in that case.
/// Never panics.
pub fn compute_metabolic_profile(input: &BiometricInput) -> Option<MetabolicResult> {
    match BiometricProfile::from_input(input) {
        Ok(profile) => Some(calculate_metabolic_age(&profile)),
        Err(err) => {
            tracing::warn!(field = err.field(), error = %err, "rejecting biometric input");
            None
        }
    }
}
