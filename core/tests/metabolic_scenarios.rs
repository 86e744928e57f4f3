//! End-to-end scenarios through the public API: loose JSON input in,
//! metabolic result and insight text out.

use metabolic_age_core::{
    compute_metabolic_profile, generate_insight, AgeComparison, BiometricInput, Severity,
};
use rstest::rstest;

fn input(age: f64, sex: &str, height_cm: f64, weight_kg: f64, activity: &str) -> BiometricInput {
    BiometricInput {
        age: Some(age),
        sex: Some(sex.to_string()),
        height_cm: Some(height_cm),
        weight_kg: Some(weight_kg),
        activity_level: Some(activity.to_string()),
        ..Default::default()
    }
}

#[test]
fn reference_male_profile() {
    let result = compute_metabolic_profile(&input(30.0, "male", 175.0, 70.0, "moderate"))
        .expect("complete profile should compute");

    assert_eq!(result.bmr_kcal_per_day, 1696);
    assert_eq!(result.tdee_kcal_per_day, 2629);
    assert_eq!(result.metabolic_age_years, 28);
    assert_eq!(result.health_score, 82);
    assert_eq!(result.comparison, AgeComparison::Same);
    assert_eq!(result.bmi, 22.9);
    assert_eq!(result.bmr_efficiency_ratio, 1.0);
}

#[test]
fn json_payload_round_trip() {
    let payload = r#"{
        "age": 52,
        "sex": "Female",
        "height_cm": 164.0,
        "weight_kg": 88.0,
        "activity_level": "sedentary",
        "body_fat_percent": 38.0,
        "muscle_mass_kg": 24.0
    }"#;
    let input: BiometricInput = serde_json::from_str(payload).unwrap();
    let result = compute_metabolic_profile(&input).unwrap();

    // BMI 32.7 (+8), sedentary (+6), high body fat (+3), low muscle (+2)
    assert_eq!(result.metabolic_age_years, 71);
    assert_eq!(result.comparison, AgeComparison::Older);

    let insight = generate_insight(
        result.metabolic_age_years,
        52,
        &result.factor_breakdown,
    );
    assert_eq!(insight.severity, Severity::High);
    assert!(!insight.suggestions.is_empty());
}

#[rstest]
#[case::missing_age(BiometricInput { sex: Some("male".into()), height_cm: Some(175.0), weight_kg: Some(70.0), ..Default::default() })]
#[case::missing_sex(BiometricInput { age: Some(30.0), height_cm: Some(175.0), weight_kg: Some(70.0), ..Default::default() })]
#[case::missing_height(BiometricInput { age: Some(30.0), sex: Some("male".into()), weight_kg: Some(70.0), ..Default::default() })]
#[case::missing_weight(BiometricInput { age: Some(30.0), sex: Some("male".into()), height_cm: Some(175.0), ..Default::default() })]
#[case::zero_weight(input(30.0, "male", 175.0, 0.0, "moderate"))]
#[case::invalid_sex(input(30.0, "unspecified", 175.0, 70.0, "moderate"))]
fn incomplete_profiles_are_unavailable(#[case] bad: BiometricInput) {
    assert!(compute_metabolic_profile(&bad).is_none());
}

#[test]
fn unknown_activity_level_is_not_an_error() {
    let result = compute_metabolic_profile(&input(30.0, "male", 175.0, 70.0, "astronaut"))
        .expect("unknown activity level should fall back to the default");
    // Default multiplier 1.55 and neutral activity score
    assert_eq!(result.tdee_kcal_per_day, 2629);
    assert_eq!(result.factor_breakdown.activity.score, 0);
}

#[test]
fn repeated_calls_are_stable() {
    let input = input(30.0, "male", 175.0, 70.0, "moderate");
    let first = compute_metabolic_profile(&input).unwrap();
    for _ in 0..10 {
        assert_eq!(compute_metabolic_profile(&input).unwrap(), first);
    }
}
