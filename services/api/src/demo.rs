use chrono::{Local, NaiveDate};
use clap::Args;
use recruit_fit::config::AppConfig;
use recruit_fit::error::AppError;
use recruit_fit::portfolio::{calculate_portfolio_health, PortfolioHealth, PortfolioImporter};
use recruit_fit::scoring::{
    calculate_fit_score, get_fit_score_recommendation, AthleteProfile, FitEvaluation,
    FitEvaluator, FitScoreInputs, FitScoreResult, FitTier, Level, SchoolProfile, SizePreference,
};
use std::fmt::Write;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct ScoreArgs {
    /// Athletic sub-score (0-40)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) athletic: Option<f64>,
    /// Academic sub-score (0-25)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) academic: Option<f64>,
    /// Opportunity sub-score (0-20)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) opportunity: Option<f64>,
    /// Personal sub-score (0-15)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) personal: Option<f64>,
}

#[derive(Args, Debug)]
pub(crate) struct PortfolioHealthArgs {
    /// School list CSV with School, Fit Score and Fit Tier columns
    #[arg(long)]
    pub(crate) csv: PathBuf,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Evaluation date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the per-dimension breakdown for every school.
    #[arg(long)]
    pub(crate) breakdown: bool,
}

pub(crate) fn run_score(args: ScoreArgs) {
    let inputs = FitScoreInputs {
        athletic_fit: args.athletic,
        academic_fit: args.academic,
        opportunity_fit: args.opportunity,
        personal_fit: args.personal,
    };

    let result = calculate_fit_score(&inputs);
    print!("{}", render_fit_result(&result));
}

pub(crate) fn run_portfolio_health(args: PortfolioHealthArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let entries = PortfolioImporter::from_path(&args.csv)?;
    let health = calculate_portfolio_health(&entries, &config.portfolio);

    println!("School list: {}", args.csv.display());
    print!("{}", render_portfolio_health(&health));
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let evaluator = FitEvaluator::new(config.portfolio);

    let athlete = demo_athlete();
    let (evaluations, health) = evaluator.evaluate_portfolio(&athlete, &demo_schools(), today);

    println!("Recruiting fit demo (evaluated {today})");
    println!(
        "Athlete: {} class of {}, {} home state",
        athlete.position.as_deref().unwrap_or("unlisted position"),
        athlete.graduation_year,
        athlete.home_state
    );

    println!("\nSchools");
    for evaluation in &evaluations {
        print!("{}", render_evaluation(evaluation, args.breakdown));
    }

    println!();
    print!("{}", render_portfolio_health(&health));
    Ok(())
}

pub(crate) fn render_fit_result(result: &FitScoreResult) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "Fit score: {:.1}/100 ({})", result.score, result.tier);
    let _ = writeln!(
        output,
        "- athletic {:.1}, academic {:.1}, opportunity {:.1}, personal {:.1}",
        result.breakdown.athletic_fit,
        result.breakdown.academic_fit,
        result.breakdown.opportunity_fit,
        result.breakdown.personal_fit
    );
    if !result.missing_dimensions.is_empty() {
        let missing: Vec<&str> = result
            .missing_dimensions
            .iter()
            .map(|dimension| dimension.label())
            .collect();
        let _ = writeln!(output, "- missing: {}", missing.join(", "));
    }
    let _ = writeln!(
        output,
        "{}",
        get_fit_score_recommendation(result.score, result.tier)
    );
    output
}

fn render_evaluation(evaluation: &FitEvaluation, breakdown: bool) -> String {
    let mut output = String::new();
    let result = &evaluation.result;
    let _ = writeln!(
        output,
        "- {}: {:.1} [{}] {}",
        evaluation.school, result.score, result.tier, evaluation.recommendation
    );
    if breakdown {
        let _ = writeln!(
            output,
            "    athletic {:.1} | academic {:.1} | opportunity {:.1} | personal {:.1}",
            result.breakdown.athletic_fit,
            result.breakdown.academic_fit,
            result.breakdown.opportunity_fit,
            result.breakdown.personal_fit
        );
    }
    output
}

pub(crate) fn render_portfolio_health(health: &PortfolioHealth) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "Portfolio health: {}", health.status.label());
    let _ = writeln!(
        output,
        "- {} schools: {} match, {} reach, {} unlikely, {} safety (average fit {:.1})",
        health.total,
        health.matches,
        health.reaches,
        health.unlikelies,
        health.safeties,
        health.average_score
    );

    if health.warnings.is_empty() {
        let _ = writeln!(output, "Warnings: none");
    } else {
        let _ = writeln!(output, "Warnings");
        for warning in &health.warnings {
            let _ = writeln!(output, "- {warning}");
        }
    }
    output
}

fn demo_athlete() -> AthleteProfile {
    AthleteProfile {
        position: Some("RHP".to_string()),
        height_inches: 73.0,
        weight_lbs: 185.0,
        top_velocity: 87.0,
        gpa: Some(3.5),
        sat: Some(1220.0),
        act: None,
        intended_major: Some("Exercise Science".to_string()),
        home_state: "IA".to_string(),
        graduation_year: 2027,
        size_preference: SizePreference::Medium,
        cost_sensitivity: Level::Medium,
    }
}

fn demo_schools() -> Vec<SchoolProfile> {
    let base = SchoolProfile {
        name: "Cedar Falls University".to_string(),
        state: "IA".to_string(),
        position_needs: vec!["RHP".to_string(), "SS".to_string()],
        coach_interest: Level::High,
        roster_percentile: 70.0,
        avg_gpa: Some(3.3),
        avg_sat: Some(1180.0),
        avg_act: None,
        majors: vec!["Exercise Science".to_string(), "Business".to_string()],
        roster_depth_percentage: 45.0,
        scholarship_availability: Level::Medium,
        has_walk_on_history: true,
        enrollment: 11_000,
        annual_cost: 26_000.0,
        is_priority: true,
        major_strength_score: Some(7.0),
        tagged_tier: None,
    };

    vec![
        base.clone(),
        SchoolProfile {
            name: "Great Lakes State".to_string(),
            state: "MI".to_string(),
            coach_interest: Level::Medium,
            roster_percentile: 45.0,
            avg_gpa: Some(3.6),
            avg_sat: Some(1290.0),
            roster_depth_percentage: 70.0,
            enrollment: 28_000,
            annual_cost: 41_000.0,
            is_priority: false,
            major_strength_score: Some(5.0),
            ..base.clone()
        },
        SchoolProfile {
            name: "Pacific Institute of Technology".to_string(),
            state: "CA".to_string(),
            position_needs: vec!["C".to_string()],
            coach_interest: Level::Low,
            roster_percentile: 15.0,
            avg_gpa: Some(3.95),
            avg_sat: Some(1480.0),
            majors: vec!["Engineering".to_string()],
            roster_depth_percentage: 90.0,
            scholarship_availability: Level::Low,
            has_walk_on_history: false,
            enrollment: 6_000,
            annual_cost: 62_000.0,
            is_priority: false,
            major_strength_score: None,
            ..base.clone()
        },
        SchoolProfile {
            name: "Loess Hills Community College".to_string(),
            avg_gpa: Some(2.7),
            avg_sat: None,
            enrollment: 2_800,
            annual_cost: 8_500.0,
            is_priority: false,
            tagged_tier: Some(FitTier::Safety),
            ..base
        },
    ]
}
