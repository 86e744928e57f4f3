//! Insight and recommendation text for metabolic age results
//!
//! Presentational layer over the scoring output: buckets the gap between
//! metabolic and chronological age into severity tiers and produces display
//! text. Only the tier boundaries matter; wording is free to change.

use serde::{Deserialize, Serialize};

use crate::metabolic::FactorBreakdown;

/// How urgent the insight is for the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Generated insight for a metabolic age result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetabolicInsight {
    pub severity: Severity,
    /// Headline interpretation of the result
    pub insight: String,
    /// Primary recommendation text
    pub recommendation: String,
    /// Suggestions targeting the factors that aged the score
    pub suggestions: Vec<String>,
}

/// Generate insight text for a metabolic age relative to chronological age.
///
/// Tier boundaries on the age difference: <= -5, <= -2, <= 2, <= 5, > 5.
pub fn generate_insight(
    metabolic_age_years: u32,
    chronological_age_years: u32,
    breakdown: &FactorBreakdown,
) -> MetabolicInsight {
    let diff = metabolic_age_years as i32 - chronological_age_years as i32;

    let (severity, insight, recommendation) = if diff <= -5 {
        (
            Severity::Low,
            format!(
                "Your metabolism is performing like someone {} years younger. Excellent work.",
                -diff
            ),
            "Keep up your current habits; they are clearly paying off.".to_string(),
        )
    } else if diff <= -2 {
        (
            Severity::Low,
            "Your metabolism is running younger than your chronological age.".to_string(),
            "Maintain your activity and body composition to hold this edge.".to_string(),
        )
    } else if diff <= 2 {
        (
            Severity::Low,
            "Your metabolic age matches your chronological age.".to_string(),
            "Small improvements in activity or body composition can tip the balance in your favor."
                .to_string(),
        )
    } else if diff <= 5 {
        (
            Severity::Medium,
            "Your metabolism is running slightly older than your chronological age.".to_string(),
            "Focus on regular exercise and a balanced diet to close the gap.".to_string(),
        )
    } else {
        (
            Severity::High,
            format!(
                "Your metabolism is performing like someone {} years older.",
                diff
            ),
            "Consider a structured plan around activity, diet, and sleep; discuss with a professional if the gap persists."
                .to_string(),
        )
    };

    let mut suggestions = Vec::new();
    if breakdown.activity.score > 0 {
        suggestions.push(
            "Increase weekly activity; even light regular exercise lowers metabolic age."
                .to_string(),
        );
    }
    if breakdown.body_composition.score > 0 {
        suggestions.push(
            "Work toward the healthy BMI range through gradual, sustainable changes.".to_string(),
        );
    }
    if breakdown.bmr_efficiency.score > 0 {
        suggestions.push(
            "Strength training helps raise resting metabolic rate over time.".to_string(),
        );
    }

    MetabolicInsight {
        severity,
        insight,
        recommendation,
        suggestions,
    }
}
