use super::domain::{Dimension, Level};
use super::finite_or_zero;

const ROSTER_MAX_POINTS: f64 = 8.0;
const TIMELINE_MAX_POINTS: f64 = 4.0;
const TIMELINE_HORIZON_YEARS: f64 = 4.0;
const WALK_ON_BONUS: f64 = 3.0;

/// Inputs to the opportunity dimension (0-20).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OpportunityInputs {
    /// Share (0-100) of roster spots at the athlete's position already committed.
    pub roster_depth_percentage: f64,
    pub years_until_graduating_class: f64,
    pub scholarship_availability: Level,
    pub has_walk_on_history: bool,
}

pub fn score_opportunity_fit(inputs: &OpportunityInputs) -> f64 {
    let depth = finite_or_zero(inputs.roster_depth_percentage).clamp(0.0, 100.0);
    let roster = (100.0 - depth) / 100.0 * ROSTER_MAX_POINTS;

    let years = finite_or_zero(inputs.years_until_graduating_class)
        .clamp(0.0, TIMELINE_HORIZON_YEARS);
    let timeline =
        (TIMELINE_HORIZON_YEARS - years) / TIMELINE_HORIZON_YEARS * TIMELINE_MAX_POINTS;

    let scholarship = match inputs.scholarship_availability {
        Level::Low => 1.0,
        Level::Medium => 3.0,
        Level::High => 5.0,
    };

    let walk_on = if inputs.has_walk_on_history {
        WALK_ON_BONUS
    } else {
        0.0
    };

    (roster + timeline + scholarship + walk_on).clamp(0.0, Dimension::Opportunity.max_score())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_open_roster_with_every_bonus_hits_the_cap() {
        let inputs = OpportunityInputs {
            roster_depth_percentage: 0.0,
            years_until_graduating_class: 0.0,
            scholarship_availability: Level::High,
            has_walk_on_history: true,
        };
        assert_eq!(score_opportunity_fit(&inputs), 20.0);
    }

    #[test]
    fn out_of_range_depth_is_bounded() {
        let overfull = OpportunityInputs {
            roster_depth_percentage: 250.0,
            years_until_graduating_class: 9.0,
            scholarship_availability: Level::Low,
            has_walk_on_history: false,
        };
        assert_eq!(score_opportunity_fit(&overfull), 1.0);
    }
}
