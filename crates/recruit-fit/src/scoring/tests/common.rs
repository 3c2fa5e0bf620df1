use chrono::NaiveDate;

use crate::scoring::{AthleteProfile, FitTier, Level, SchoolProfile, SizePreference};

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date")
}

pub(super) fn pitcher() -> AthleteProfile {
    AthleteProfile {
        position: Some("RHP".to_string()),
        height_inches: 74.0,
        weight_lbs: 190.0,
        top_velocity: 88.0,
        gpa: Some(3.6),
        sat: Some(1250.0),
        act: None,
        intended_major: Some("Kinesiology".to_string()),
        home_state: "IA".to_string(),
        graduation_year: 2027,
        size_preference: SizePreference::Medium,
        cost_sensitivity: Level::Medium,
    }
}

pub(super) fn in_state_match() -> SchoolProfile {
    SchoolProfile {
        name: "Drake Valley University".to_string(),
        state: "IA".to_string(),
        position_needs: vec!["rhp".to_string(), "C".to_string()],
        coach_interest: Level::High,
        roster_percentile: 80.0,
        avg_gpa: Some(3.4),
        avg_sat: Some(1200.0),
        avg_act: None,
        majors: vec!["Kinesiology".to_string(), "Business".to_string()],
        roster_depth_percentage: 40.0,
        scholarship_availability: Level::High,
        has_walk_on_history: true,
        enrollment: 9_000,
        annual_cost: 30_000.0,
        is_priority: true,
        major_strength_score: Some(8.0),
        tagged_tier: None,
    }
}

pub(super) fn distant_long_shot() -> SchoolProfile {
    SchoolProfile {
        name: "Coastal Tech".to_string(),
        state: "CA".to_string(),
        position_needs: vec!["SS".to_string()],
        coach_interest: Level::Low,
        roster_percentile: 20.0,
        avg_gpa: Some(3.9),
        avg_sat: Some(1450.0),
        avg_act: None,
        majors: vec!["Engineering".to_string()],
        roster_depth_percentage: 90.0,
        scholarship_availability: Level::Low,
        has_walk_on_history: false,
        enrollment: 30_000,
        annual_cost: 60_000.0,
        is_priority: false,
        major_strength_score: None,
        tagged_tier: None,
    }
}

pub(super) fn tagged_safety() -> SchoolProfile {
    SchoolProfile {
        name: "Prairie Community College".to_string(),
        avg_gpa: Some(2.8),
        enrollment: 3_500,
        annual_cost: 9_000.0,
        tagged_tier: Some(FitTier::Safety),
        ..in_state_match()
    }
}
