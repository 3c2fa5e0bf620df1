use crate::scoring::{
    score_academic_fit, score_athletic_fit, score_opportunity_fit, score_personal_fit,
    AcademicInputs, AthleticInputs, Level, OpportunityInputs, PersonalInputs, SizePreference,
};

fn athletic(coach_interest: Level) -> AthleticInputs {
    AthleticInputs {
        position: Some("OF".to_string()),
        height_inches: 70.0,
        weight_lbs: 165.0,
        top_velocity: 80.0,
        school_needs: vec!["C".to_string()],
        coach_interest,
        roster_percentile: 50.0,
    }
}

fn personal(cost_sensitivity: Level) -> PersonalInputs {
    PersonalInputs {
        athlete_state: "TX".to_string(),
        school_state: "OK".to_string(),
        size_preference: SizePreference::Large,
        school_enrollment: 24_000,
        cost_sensitivity,
        school_cost: 58_000.0,
        is_priority: false,
        major_strength_score: Some(5.0),
    }
}

fn opportunity(roster_depth_percentage: f64) -> OpportunityInputs {
    OpportunityInputs {
        roster_depth_percentage,
        years_until_graduating_class: 2.0,
        scholarship_availability: Level::Medium,
        has_walk_on_history: false,
    }
}

#[test]
fn coach_interest_strictly_raises_athletic_fit() {
    let scores: Vec<f64> = Level::ordered()
        .into_iter()
        .map(|level| score_athletic_fit(&athletic(level)))
        .collect();

    assert!(scores[0] < scores[1], "low {} vs medium {}", scores[0], scores[1]);
    assert!(scores[1] < scores[2], "medium {} vs high {}", scores[1], scores[2]);
}

#[test]
fn position_need_adds_bonus_and_missing_position_is_tolerated() {
    let mut matched = athletic(Level::Medium);
    matched.school_needs.push(" of ".to_string());
    let mut unknown = athletic(Level::Medium);
    unknown.position = None;

    let base = score_athletic_fit(&athletic(Level::Medium));
    assert!(score_athletic_fit(&matched) > base);
    assert_eq!(score_athletic_fit(&unknown), base);
}

#[test]
fn higher_velocity_scores_better_until_optimal() {
    let mut slower = athletic(Level::Medium);
    slower.top_velocity = 85.0;
    let mut faster = athletic(Level::Medium);
    faster.top_velocity = 88.0;

    assert!(score_athletic_fit(&faster) > score_athletic_fit(&slower));
}

#[test]
fn athletic_fit_stays_within_bounds_for_extreme_inputs() {
    let extreme = AthleticInputs {
        position: Some("RHP".to_string()),
        height_inches: 90.0,
        weight_lbs: 400.0,
        top_velocity: 120.0,
        school_needs: vec!["RHP".to_string()],
        coach_interest: Level::High,
        roster_percentile: 500.0,
    };
    let negative = AthleticInputs {
        height_inches: -5.0,
        weight_lbs: -5.0,
        top_velocity: -90.0,
        roster_percentile: -50.0,
        ..AthleticInputs::default()
    };

    let high = score_athletic_fit(&extreme);
    assert!(high <= 40.0 && high > 39.0, "got {high}");
    let low = score_athletic_fit(&negative);
    assert!((0.0..=40.0).contains(&low), "got {low}");
}

#[test]
fn aligned_academics_beat_lower_profile() {
    let aligned = AcademicInputs {
        athlete_gpa: Some(3.5),
        school_avg_gpa: Some(3.5),
        ..AcademicInputs::default()
    };
    let below = AcademicInputs {
        athlete_gpa: Some(2.5),
        school_avg_gpa: Some(3.5),
        ..AcademicInputs::default()
    };

    assert!(score_academic_fit(&aligned) > score_academic_fit(&below));
}

#[test]
fn academic_fit_handles_missing_and_partial_test_scores() {
    let empty = AcademicInputs::default();
    assert_eq!(score_academic_fit(&empty), 10.0);

    let sat_only = AcademicInputs {
        athlete_sat: Some(1300.0),
        school_avg_sat: Some(1300.0),
        ..AcademicInputs::default()
    };
    let act_only = AcademicInputs {
        athlete_act: Some(22.0),
        school_avg_act: Some(28.0),
        ..AcademicInputs::default()
    };

    assert_eq!(score_academic_fit(&sat_only), 15.0);
    assert_eq!(score_academic_fit(&act_only), 6.0);
}

#[test]
fn academic_fit_takes_the_better_test_and_major_bonus() {
    let inputs = AcademicInputs {
        athlete_gpa: Some(3.4),
        athlete_sat: Some(1000.0),
        athlete_act: Some(27.0),
        school_avg_gpa: Some(3.4),
        school_avg_sat: Some(1300.0),
        school_avg_act: Some(27.0),
        athlete_major: Some("nursing".to_string()),
        school_majors: vec!["Nursing".to_string()],
    };

    assert_eq!(score_academic_fit(&inputs), 25.0);
}

#[test]
fn shallower_roster_strictly_raises_opportunity_fit() {
    let crowded = score_opportunity_fit(&opportunity(85.0));
    let open = score_opportunity_fit(&opportunity(30.0));
    let empty = score_opportunity_fit(&opportunity(0.0));

    assert!(crowded < open);
    assert!(open < empty);
    assert!((0.0..=20.0).contains(&empty));
}

#[test]
fn sooner_graduating_class_and_walk_ons_raise_opportunity_fit() {
    let later = OpportunityInputs {
        years_until_graduating_class: 3.0,
        ..opportunity(50.0)
    };
    let sooner = OpportunityInputs {
        years_until_graduating_class: 1.0,
        ..opportunity(50.0)
    };
    let walk_on = OpportunityInputs {
        has_walk_on_history: true,
        ..sooner
    };

    assert!(score_opportunity_fit(&sooner) > score_opportunity_fit(&later));
    assert!(score_opportunity_fit(&walk_on) > score_opportunity_fit(&sooner));
}

#[test]
fn cost_sensitivity_strictly_lowers_personal_fit_for_expensive_school() {
    let low = score_personal_fit(&personal(Level::Low));
    let medium = score_personal_fit(&personal(Level::Medium));
    let high = score_personal_fit(&personal(Level::High));

    assert!(low > medium, "low {low} vs medium {medium}");
    assert!(medium > high, "medium {medium} vs high {high}");
}

#[test]
fn in_state_priority_and_strong_major_raise_personal_fit() {
    let base = score_personal_fit(&personal(Level::Medium));
    let boosted = score_personal_fit(&PersonalInputs {
        school_state: "tx".to_string(),
        is_priority: true,
        major_strength_score: Some(10.0),
        ..personal(Level::Medium)
    });

    assert!(boosted > base);
    assert!(boosted <= 15.0);
}
