use super::domain::{Dimension, Level, SizePreference};
use super::finite_or_zero;

const IN_STATE_BONUS: f64 = 3.0;
const PRIORITY_BONUS: f64 = 3.0;
const SIZE_MATCH_POINTS: f64 = 2.0;
const SIZE_ANY_POINTS: f64 = 1.0;
const COST_MAX_POINTS: f64 = 4.0;
/// Annual cost at which the full sensitivity penalty applies.
const COST_CEILING: f64 = 60_000.0;
const MAJOR_STRENGTH_MAX_POINTS: f64 = 3.0;

/// Inputs to the personal dimension (0-15).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PersonalInputs {
    pub athlete_state: String,
    pub school_state: String,
    pub size_preference: SizePreference,
    pub school_enrollment: u32,
    pub cost_sensitivity: Level,
    pub school_cost: f64,
    pub is_priority: bool,
    /// Program strength in the athlete's intended major, 0-10.
    pub major_strength_score: Option<f64>,
}

pub fn score_personal_fit(inputs: &PersonalInputs) -> f64 {
    let athlete_state = inputs.athlete_state.trim();
    let in_state = !athlete_state.is_empty()
        && athlete_state.eq_ignore_ascii_case(inputs.school_state.trim());

    let location = if in_state { IN_STATE_BONUS } else { 0.0 };
    let priority = if inputs.is_priority { PRIORITY_BONUS } else { 0.0 };

    let size = match inputs.size_preference {
        SizePreference::Any => SIZE_ANY_POINTS,
        preference if preference.matches(inputs.school_enrollment) => SIZE_MATCH_POINTS,
        _ => 0.0,
    };

    let major = inputs
        .major_strength_score
        .map(|strength| {
            finite_or_zero(strength).clamp(0.0, 10.0) / 10.0 * MAJOR_STRENGTH_MAX_POINTS
        })
        .unwrap_or(0.0);

    let raw = location
        + priority
        + size
        + cost_points(inputs.school_cost, inputs.cost_sensitivity)
        + major;

    raw.clamp(0.0, Dimension::Personal.max_score())
}

/// Cost eats into the available points in proportion to sensitivity.
fn cost_points(school_cost: f64, sensitivity: Level) -> f64 {
    let weight = match sensitivity {
        Level::Low => 0.25,
        Level::Medium => 0.6,
        Level::High => 1.0,
    };
    let share = (finite_or_zero(school_cost) / COST_CEILING).clamp(0.0, 1.0);
    COST_MAX_POINTS - share * weight * COST_MAX_POINTS
}
