//! Fit scoring: four bounded dimension scorers, the 0-100 aggregator, tiering and
//! recommendation text.

mod academic;
mod aggregate;
mod athletic;
mod domain;
mod evaluator;
mod opportunity;
mod personal;
mod recommendation;

#[cfg(test)]
mod tests;

pub use academic::{score_academic_fit, AcademicInputs};
pub use aggregate::{
    calculate_fit_score, get_fit_tier, FitBreakdown, FitScoreInputs, FitScoreResult,
};
pub use athletic::{score_athletic_fit, AthleticInputs};
pub use domain::{
    AthleteProfile, Dimension, FitTier, Level, SchoolProfile, SizePreference, UnknownTier,
};
pub use evaluator::{FitEvaluation, FitEvaluator};
pub use opportunity::{score_opportunity_fit, OpportunityInputs};
pub use personal::{score_personal_fit, PersonalInputs};
pub use recommendation::get_fit_score_recommendation;

pub(crate) fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

pub(crate) fn finite_or_zero(value: f64) -> f64 {
    finite(value).unwrap_or(0.0)
}

/// Case-insensitive membership test used for positions and majors.
pub(crate) fn matches_any(needle: &str, haystack: &[String]) -> bool {
    let needle = needle.trim();
    !needle.is_empty()
        && haystack
            .iter()
            .any(|candidate| candidate.trim().eq_ignore_ascii_case(needle))
}
