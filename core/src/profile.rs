//! Biometric profile types
//!
//! Two representations exist on purpose. [`BiometricInput`] is the loose
//! boundary shape a UI or remote profile store hands over: every field
//! optional, sex and activity level as free-form strings. [`BiometricProfile`]
//! is the validated, typed form the scoring formulas operate on. Conversion
//! happens once, at the boundary, via [`BiometricProfile::from_input`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::ProfileError;
use crate::validation::{validate_optional_positive, validate_required_positive};

/// Biological sex for metabolic calculations
/// Note: This is used for physiological calculations only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Parse a case-insensitive sex string. Anything other than
    /// "male"/"female" is rejected.
    pub fn parse(value: &str) -> Result<Self, ProfileError> {
        match value.to_lowercase().as_str() {
            "male" => Ok(Sex::Male),
            "female" => Ok(Sex::Female),
            _ => Err(ProfileError::InvalidSex(value.to_string())),
        }
    }
}

/// Activity level for TDEE and metabolic age scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    #[default]
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise, physical job
    VeryActive,
}

impl ActivityLevel {
    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    /// Contribution to the metabolic age score (positive = older-acting)
    pub fn age_score(&self) -> i32 {
        match self {
            ActivityLevel::Sedentary => 6,
            ActivityLevel::Light => 2,
            ActivityLevel::Moderate => 0,
            ActivityLevel::Active => -3,
            ActivityLevel::VeryActive => -6,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::Light => "Light exercise 1-3 days/week",
            ActivityLevel::Moderate => "Moderate exercise 3-5 days/week",
            ActivityLevel::Active => "Hard exercise 6-7 days/week",
            ActivityLevel::VeryActive => "Very hard exercise or physical job",
        }
    }

    /// Parse an activity level string. Unknown or missing levels resolve to
    /// `Moderate`, which carries a neutral score and the default multiplier;
    /// an unrecognized level is not an input error.
    pub fn parse_lenient(value: Option<&str>) -> Self {
        match value.map(|v| v.to_lowercase()) {
            Some(v) => match v.as_str() {
                "sedentary" => ActivityLevel::Sedentary,
                "light" => ActivityLevel::Light,
                "moderate" => ActivityLevel::Moderate,
                "active" => ActivityLevel::Active,
                "very_active" => ActivityLevel::VeryActive,
                _ => ActivityLevel::default(),
            },
            None => ActivityLevel::default(),
        }
    }
}

/// Loose biometric input as supplied by a caller.
///
/// All fields are optional; numeric fields arrive as plain numbers and
/// enum-like fields as strings, matching what profile stores typically hold.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BiometricInput {
    pub age: Option<f64>,
    pub sex: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub activity_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muscle_mass_kg: Option<f64>,
}

/// Validated biometric profile used by the scoring formulas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiometricProfile {
    /// Age in years
    pub age_years: u32,
    /// Biological sex for physiological calculations
    pub sex: Sex,
    /// Height in centimeters (stored in SI)
    pub height_cm: f64,
    /// Weight in kilograms (stored in SI)
    pub weight_kg: f64,
    /// Activity level for TDEE and scoring
    pub activity_level: ActivityLevel,
    /// Measured body fat percentage, if available
    pub body_fat_percent: Option<f64>,
    /// Measured muscle mass in kg, if available
    pub muscle_mass_kg: Option<f64>,
}

impl BiometricProfile {
    /// Validate a loose input into a typed profile.
    ///
    /// Age, sex, height, and weight are mandatory; any missing, non-finite,
    /// or non-positive value is rejected. Optional body composition fields
    /// are validated only when present.
    pub fn from_input(input: &BiometricInput) -> Result<Self, ProfileError> {
        let age = validate_required_positive(input.age, "age")?;
        let height_cm = validate_required_positive(input.height_cm, "height_cm")?;
        let weight_kg = validate_required_positive(input.weight_kg, "weight_kg")?;

        let sex = match input.sex.as_deref() {
            Some(s) => Sex::parse(s)?,
            None => return Err(ProfileError::MissingField("sex")),
        };

        let activity_level = ActivityLevel::parse_lenient(input.activity_level.as_deref());

        let body_fat_percent =
            validate_optional_positive(input.body_fat_percent, "body_fat_percent")?;
        let muscle_mass_kg = validate_optional_positive(input.muscle_mass_kg, "muscle_mass_kg")?;

        Ok(BiometricProfile {
            age_years: age.round() as u32,
            sex,
            height_cm,
            weight_kg,
            activity_level,
            body_fat_percent,
            muscle_mass_kg,
        })
    }
}

/// Compute a person's age in whole years from their date of birth.
///
/// Returns `None` when `dob` is after `today`.
pub fn age_from_date_of_birth(dob: NaiveDate, today: NaiveDate) -> Option<u32> {
    today.years_since(dob)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn valid_input() -> BiometricInput {
        BiometricInput {
            age: Some(30.0),
            sex: Some("male".to_string()),
            height_cm: Some(175.0),
            weight_kg: Some(70.0),
            activity_level: Some("moderate".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_input_parses() {
        let profile = BiometricProfile::from_input(&valid_input()).unwrap();
        assert_eq!(profile.age_years, 30);
        assert_eq!(profile.sex, Sex::Male);
        assert_eq!(profile.activity_level, ActivityLevel::Moderate);
        assert_eq!(profile.body_fat_percent, None);
    }

    #[rstest]
    #[case("male", Sex::Male)]
    #[case("MALE", Sex::Male)]
    #[case("Female", Sex::Female)]
    #[case("female", Sex::Female)]
    fn test_sex_parse_case_insensitive(#[case] raw: &str, #[case] expected: Sex) {
        assert_eq!(Sex::parse(raw).unwrap(), expected);
    }

    #[rstest]
    #[case("unspecified")]
    #[case("other")]
    #[case("")]
    fn test_sex_parse_rejects(#[case] raw: &str) {
        assert!(Sex::parse(raw).is_err());
    }

    #[rstest]
    #[case(Some("sedentary"), ActivityLevel::Sedentary)]
    #[case(Some("light"), ActivityLevel::Light)]
    #[case(Some("moderate"), ActivityLevel::Moderate)]
    #[case(Some("active"), ActivityLevel::Active)]
    #[case(Some("very_active"), ActivityLevel::VeryActive)]
    #[case(Some("VERY_ACTIVE"), ActivityLevel::VeryActive)]
    #[case(Some("couch_potato"), ActivityLevel::Moderate)]
    #[case(None, ActivityLevel::Moderate)]
    fn test_activity_parse_lenient(#[case] raw: Option<&str>, #[case] expected: ActivityLevel) {
        assert_eq!(ActivityLevel::parse_lenient(raw), expected);
    }

    #[test]
    fn test_missing_required_fields_rejected() {
        for field in ["age", "sex", "height_cm", "weight_kg"] {
            let mut input = valid_input();
            match field {
                "age" => input.age = None,
                "sex" => input.sex = None,
                "height_cm" => input.height_cm = None,
                _ => input.weight_kg = None,
            }
            let err = BiometricProfile::from_input(&input).unwrap_err();
            assert_eq!(err.field(), field, "expected rejection on {field}");
        }
    }

    #[test]
    fn test_zero_and_negative_rejected() {
        let mut input = valid_input();
        input.weight_kg = Some(0.0);
        assert!(BiometricProfile::from_input(&input).is_err());

        let mut input = valid_input();
        input.height_cm = Some(-175.0);
        assert!(BiometricProfile::from_input(&input).is_err());
    }

    #[test]
    fn test_invalid_optional_fields_rejected() {
        let mut input = valid_input();
        input.body_fat_percent = Some(f64::NAN);
        assert!(BiometricProfile::from_input(&input).is_err());

        let mut input = valid_input();
        input.muscle_mass_kg = Some(-3.0);
        assert!(BiometricProfile::from_input(&input).is_err());
    }

    #[test]
    fn test_input_deserializes_from_json() {
        let input: BiometricInput = serde_json::from_str(
            r#"{"age": 42, "sex": "female", "height_cm": 162.5, "weight_kg": 58.0}"#,
        )
        .unwrap();
        let profile = BiometricProfile::from_input(&input).unwrap();
        assert_eq!(profile.age_years, 42);
        assert_eq!(profile.sex, Sex::Female);
        // Missing activity level falls back to the default
        assert_eq!(profile.activity_level, ActivityLevel::Moderate);
    }

    #[test]
    fn test_age_from_date_of_birth() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
        let dob = NaiveDate::from_ymd_opt(1996, 8, 29).unwrap();
        assert_eq!(age_from_date_of_birth(dob, today), Some(30));

        let dob = NaiveDate::from_ymd_opt(1996, 8, 30).unwrap();
        assert_eq!(age_from_date_of_birth(dob, today), Some(29));

        let future = NaiveDate::from_ymd_opt(2027, 1, 1).unwrap();
        assert_eq!(age_from_date_of_birth(future, today), None);
    }
}
