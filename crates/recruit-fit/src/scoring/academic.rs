use super::domain::Dimension;
use super::{finite, matches_any};

const GPA_MAX_POINTS: f64 = 10.0;
const TEST_MAX_POINTS: f64 = 10.0;
const MAJOR_MATCH_BONUS: f64 = 5.0;
const NEUTRAL_POINTS: f64 = 5.0;

/// Inputs to the academic dimension (0-25).
///
/// SAT and ACT are independent signals; either may be present without the other.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AcademicInputs {
    pub athlete_gpa: Option<f64>,
    pub athlete_sat: Option<f64>,
    pub athlete_act: Option<f64>,
    pub school_avg_gpa: Option<f64>,
    pub school_avg_sat: Option<f64>,
    pub school_avg_act: Option<f64>,
    pub athlete_major: Option<String>,
    pub school_majors: Vec<String>,
}

pub fn score_academic_fit(inputs: &AcademicInputs) -> f64 {
    let gpa = match paired(inputs.athlete_gpa, inputs.school_avg_gpa) {
        Some((athlete, school)) => {
            alignment_points(athlete - school, GPA_MAX_POINTS, 1.0, 10.0)
        }
        None => NEUTRAL_POINTS,
    };

    // Gaps are expressed in "steps": 100 SAT points or 2 ACT points.
    let sat = paired(inputs.athlete_sat, inputs.school_avg_sat)
        .map(|(athlete, school)| (athlete - school) / 100.0);
    let act = paired(inputs.athlete_act, inputs.school_avg_act)
        .map(|(athlete, school)| (athlete - school) / 2.0);

    let tests = [sat, act]
        .into_iter()
        .flatten()
        .map(|steps| alignment_points(steps, TEST_MAX_POINTS, 0.5, 3.0))
        .fold(None, |best: Option<f64>, points| {
            Some(best.map_or(points, |current| current.max(points)))
        })
        .unwrap_or(NEUTRAL_POINTS);

    let major = match inputs.athlete_major.as_deref() {
        Some(major) if matches_any(major, &inputs.school_majors) => MAJOR_MATCH_BONUS,
        _ => 0.0,
    };

    (gpa + tests + major).clamp(0.0, Dimension::Academic.max_score())
}

fn paired(athlete: Option<f64>, school: Option<f64>) -> Option<(f64, f64)> {
    Some((athlete.and_then(finite)?, school.and_then(finite)?))
}

/// Full credit at parity. Being above the school average costs `above_rate` per unit (capped
/// at two units), being below costs `below_rate` per unit.
fn alignment_points(gap: f64, max_points: f64, above_rate: f64, below_rate: f64) -> f64 {
    let points = if gap >= 0.0 {
        max_points - gap.min(2.0) * above_rate
    } else {
        max_points + gap * below_rate
    };
    points.clamp(0.0, max_points)
}
