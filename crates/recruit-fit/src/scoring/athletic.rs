use super::domain::{Dimension, Level};
use super::{finite_or_zero, matches_any};

const BASE: f64 = 8.0;
const POSITION_MATCH_BONUS: f64 = 10.0;
const VELOCITY_FLOOR: f64 = 70.0;
const VELOCITY_OPTIMAL: f64 = 90.0;
const VELOCITY_MAX_POINTS: f64 = 8.0;
const ROSTER_MAX_POINTS: f64 = 3.0;

/// Inputs to the athletic dimension (0-40).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AthleticInputs {
    pub position: Option<String>,
    pub height_inches: f64,
    pub weight_lbs: f64,
    pub top_velocity: f64,
    pub school_needs: Vec<String>,
    pub coach_interest: Level,
    /// Athlete percentile (0-100) against the current roster.
    pub roster_percentile: f64,
}

pub fn score_athletic_fit(inputs: &AthleticInputs) -> f64 {
    let position_bonus = match inputs.position.as_deref() {
        Some(position) if matches_any(position, &inputs.school_needs) => POSITION_MATCH_BONUS,
        _ => 0.0,
    };

    let raw = BASE
        + position_bonus
        + coach_interest_points(inputs.coach_interest)
        + velocity_points(inputs.top_velocity)
        + physical_points(inputs.height_inches, inputs.weight_lbs)
        + roster_points(inputs.roster_percentile);

    raw.clamp(0.0, Dimension::Athletic.max_score())
}

fn coach_interest_points(level: Level) -> f64 {
    match level {
        Level::Low => 2.0,
        Level::Medium => 5.0,
        Level::High => 8.0,
    }
}

/// Linear between the floor and the optimal velocity, flat beyond it.
fn velocity_points(top_velocity: f64) -> f64 {
    let velocity = finite_or_zero(top_velocity);
    let progress = (velocity - VELOCITY_FLOOR) / (VELOCITY_OPTIMAL - VELOCITY_FLOOR);
    progress.clamp(0.0, 1.0) * VELOCITY_MAX_POINTS
}

fn physical_points(height_inches: f64, weight_lbs: f64) -> f64 {
    let height = finite_or_zero(height_inches);
    let weight = finite_or_zero(weight_lbs);

    let height_points = if height >= 74.0 {
        2.0
    } else if height >= 71.0 {
        1.0
    } else {
        0.0
    };
    let weight_points = if weight >= 180.0 { 1.0 } else { 0.0 };

    height_points + weight_points
}

fn roster_points(percentile: f64) -> f64 {
    (finite_or_zero(percentile).clamp(0.0, 100.0) / 100.0) * ROSTER_MAX_POINTS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn velocity_saturates_at_optimal_threshold() {
        assert!(velocity_points(88.0) > velocity_points(85.0));
        assert_eq!(velocity_points(90.0), VELOCITY_MAX_POINTS);
        assert_eq!(velocity_points(97.0), VELOCITY_MAX_POINTS);
        assert_eq!(velocity_points(55.0), 0.0);
    }

    #[test]
    fn non_finite_measurements_count_as_zero() {
        assert_eq!(velocity_points(f64::NAN), 0.0);
        assert_eq!(roster_points(f64::INFINITY), 0.0);
        assert_eq!(physical_points(f64::NAN, f64::NAN), 0.0);
    }
}
