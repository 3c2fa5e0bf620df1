use super::domain::{Dimension, FitTier};
use serde::{Deserialize, Serialize};

const MATCH_THRESHOLD: f64 = 70.0;
const REACH_THRESHOLD: f64 = 50.0;

/// Dimension sub-scores as produced by the dimension scorers. Any subset may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FitScoreInputs {
    #[serde(default)]
    pub athletic_fit: Option<f64>,
    #[serde(default)]
    pub academic_fit: Option<f64>,
    #[serde(default)]
    pub opportunity_fit: Option<f64>,
    #[serde(default)]
    pub personal_fit: Option<f64>,
}

impl FitScoreInputs {
    pub fn get(&self, dimension: Dimension) -> Option<f64> {
        match dimension {
            Dimension::Athletic => self.athletic_fit,
            Dimension::Academic => self.academic_fit,
            Dimension::Opportunity => self.opportunity_fit,
            Dimension::Personal => self.personal_fit,
        }
    }
}

/// Clamped per-dimension values; absent inputs read as zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FitBreakdown {
    pub athletic_fit: f64,
    pub academic_fit: f64,
    pub opportunity_fit: f64,
    pub personal_fit: f64,
}

impl FitBreakdown {
    pub fn total(&self) -> f64 {
        self.athletic_fit + self.academic_fit + self.opportunity_fit + self.personal_fit
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitScoreResult {
    pub score: f64,
    pub tier: FitTier,
    pub breakdown: FitBreakdown,
    pub missing_dimensions: Vec<Dimension>,
}

/// Combines up to four dimension scores into a 0-100 fit score.
///
/// Inputs are never rejected: each value is clamped into its dimension's range (NaN reads as
/// zero) before summing. A dimension is reported missing when its raw value is absent, zero
/// or NaN.
pub fn calculate_fit_score(inputs: &FitScoreInputs) -> FitScoreResult {
    let clamp = |dimension: Dimension| {
        inputs
            .get(dimension)
            .filter(|value| !value.is_nan())
            .map(|value| value.clamp(0.0, dimension.max_score()))
            .unwrap_or(0.0)
    };

    let breakdown = FitBreakdown {
        athletic_fit: clamp(Dimension::Athletic),
        academic_fit: clamp(Dimension::Academic),
        opportunity_fit: clamp(Dimension::Opportunity),
        personal_fit: clamp(Dimension::Personal),
    };

    let missing_dimensions = Dimension::ordered()
        .into_iter()
        .filter(|dimension| match inputs.get(*dimension) {
            None => true,
            Some(value) => value == 0.0 || value.is_nan(),
        })
        .collect();

    let score = breakdown.total();

    FitScoreResult {
        score,
        tier: get_fit_tier(score),
        breakdown,
        missing_dimensions,
    }
}

/// Re-tiers an externally computed score: >= 70 match, [50, 70) reach, otherwise unlikely.
pub fn get_fit_tier(score: f64) -> FitTier {
    if score >= MATCH_THRESHOLD {
        FitTier::Match
    } else if score >= REACH_THRESHOLD {
        FitTier::Reach
    } else {
        FitTier::Unlikely
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_input_is_zeroed_and_reported_missing() {
        let result = calculate_fit_score(&FitScoreInputs {
            athletic_fit: Some(f64::NAN),
            academic_fit: Some(20.0),
            opportunity_fit: Some(15.0),
            personal_fit: Some(10.0),
        });

        assert_eq!(result.breakdown.athletic_fit, 0.0);
        assert_eq!(result.score, 45.0);
        assert_eq!(result.missing_dimensions, vec![Dimension::Athletic]);
    }

    #[test]
    fn negative_input_is_clamped_but_not_missing() {
        let result = calculate_fit_score(&FitScoreInputs {
            athletic_fit: Some(-12.0),
            academic_fit: Some(25.0),
            opportunity_fit: Some(20.0),
            personal_fit: Some(15.0),
        });

        assert_eq!(result.breakdown.athletic_fit, 0.0);
        assert!(result.missing_dimensions.is_empty());
        assert_eq!(result.score, 60.0);
        assert_eq!(result.tier, FitTier::Reach);
    }

    #[test]
    fn nan_score_is_unlikely() {
        assert_eq!(get_fit_tier(f64::NAN), FitTier::Unlikely);
    }

    #[test]
    fn deserializes_partial_payloads() {
        let inputs: FitScoreInputs =
            serde_json::from_str(r#"{"athletic_fit": 30, "personal_fit": 12.5}"#)
                .expect("partial inputs parse");
        assert_eq!(inputs.athletic_fit, Some(30.0));
        assert_eq!(inputs.academic_fit, None);
        assert_eq!(inputs.personal_fit, Some(12.5));
    }
}
