use super::academic::{score_academic_fit, AcademicInputs};
use super::aggregate::{calculate_fit_score, FitScoreInputs, FitScoreResult};
use super::athletic::{score_athletic_fit, AthleticInputs};
use super::domain::{AthleteProfile, FitTier, SchoolProfile};
use super::opportunity::{score_opportunity_fit, OpportunityInputs};
use super::personal::{score_personal_fit, PersonalInputs};
use super::recommendation::get_fit_score_recommendation;
use crate::portfolio::{
    calculate_portfolio_health, PortfolioConfig, PortfolioHealth, SchoolHealthEntry,
};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Fit of one school for one athlete, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitEvaluation {
    pub school: String,
    pub result: FitScoreResult,
    pub recommendation: String,
}

impl FitEvaluation {
    pub fn health_entry(&self) -> SchoolHealthEntry {
        SchoolHealthEntry {
            name: Some(self.school.clone()),
            fit_score: self.result.score,
            fit_tier: self.result.tier,
        }
    }
}

/// Stateless evaluator that runs raw profiles through the dimension scorers and aggregator.
#[derive(Debug, Clone, Default)]
pub struct FitEvaluator {
    portfolio: PortfolioConfig,
}

impl FitEvaluator {
    pub fn new(portfolio: PortfolioConfig) -> Self {
        Self { portfolio }
    }

    pub fn dimension_inputs(
        athlete: &AthleteProfile,
        school: &SchoolProfile,
        today: NaiveDate,
    ) -> FitScoreInputs {
        let athletic = AthleticInputs {
            position: athlete.position.clone(),
            height_inches: athlete.height_inches,
            weight_lbs: athlete.weight_lbs,
            top_velocity: athlete.top_velocity,
            school_needs: school.position_needs.clone(),
            coach_interest: school.coach_interest,
            roster_percentile: school.roster_percentile,
        };

        let academic = AcademicInputs {
            athlete_gpa: athlete.gpa,
            athlete_sat: athlete.sat,
            athlete_act: athlete.act,
            school_avg_gpa: school.avg_gpa,
            school_avg_sat: school.avg_sat,
            school_avg_act: school.avg_act,
            athlete_major: athlete.intended_major.clone(),
            school_majors: school.majors.clone(),
        };

        let years_until = (athlete.graduation_year - today.year()).max(0);
        let opportunity = OpportunityInputs {
            roster_depth_percentage: school.roster_depth_percentage,
            years_until_graduating_class: f64::from(years_until),
            scholarship_availability: school.scholarship_availability,
            has_walk_on_history: school.has_walk_on_history,
        };

        let personal = PersonalInputs {
            athlete_state: athlete.home_state.clone(),
            school_state: school.state.clone(),
            size_preference: athlete.size_preference,
            school_enrollment: school.enrollment,
            cost_sensitivity: athlete.cost_sensitivity,
            school_cost: school.annual_cost,
            is_priority: school.is_priority,
            major_strength_score: school.major_strength_score,
        };

        FitScoreInputs {
            athletic_fit: Some(score_athletic_fit(&athletic)),
            academic_fit: Some(score_academic_fit(&academic)),
            opportunity_fit: Some(score_opportunity_fit(&opportunity)),
            personal_fit: Some(score_personal_fit(&personal)),
        }
    }

    pub fn evaluate(
        &self,
        athlete: &AthleteProfile,
        school: &SchoolProfile,
        today: NaiveDate,
    ) -> FitEvaluation {
        let inputs = Self::dimension_inputs(athlete, school, today);
        let mut result = calculate_fit_score(&inputs);

        // Only a safety tag replaces the computed tier; other tags follow the score.
        if school.tagged_tier == Some(FitTier::Safety) {
            result.tier = FitTier::Safety;
        }

        debug!(
            school = %school.name,
            score = result.score,
            tier = %result.tier,
            missing = result.missing_dimensions.len(),
            "evaluated school fit"
        );

        let recommendation = get_fit_score_recommendation(result.score, result.tier);

        FitEvaluation {
            school: school.name.clone(),
            result,
            recommendation,
        }
    }

    pub fn evaluate_portfolio(
        &self,
        athlete: &AthleteProfile,
        schools: &[SchoolProfile],
        today: NaiveDate,
    ) -> (Vec<FitEvaluation>, PortfolioHealth) {
        let evaluations: Vec<FitEvaluation> = schools
            .iter()
            .map(|school| self.evaluate(athlete, school, today))
            .collect();

        let entries: Vec<SchoolHealthEntry> =
            evaluations.iter().map(FitEvaluation::health_entry).collect();
        let health = calculate_portfolio_health(&entries, &self.portfolio);

        (evaluations, health)
    }
}
