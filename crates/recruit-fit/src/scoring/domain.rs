use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Three-step intensity scale shared by coach interest, scholarship availability and
/// cost sensitivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Low,
    #[default]
    Medium,
    High,
}

impl Level {
    pub const fn ordered() -> [Self; 3] {
        [Self::Low, Self::Medium, Self::High]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Enrollment band an athlete would like to attend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizePreference {
    Small,
    Medium,
    Large,
    #[default]
    Any,
}

impl SizePreference {
    /// Small schools top out below 5,000 students, large ones start above 15,000.
    pub fn matches(self, enrollment: u32) -> bool {
        match self {
            Self::Small => enrollment < 5_000,
            Self::Medium => (5_000..=15_000).contains(&enrollment),
            Self::Large => enrollment > 15_000,
            Self::Any => true,
        }
    }
}

impl FromStr for SizePreference {
    type Err = std::convert::Infallible;

    /// Unrecognised text falls back to `Any` so free-form profile answers never fail.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(match value.trim().to_ascii_lowercase().as_str() {
            "small" => Self::Small,
            "medium" | "mid" => Self::Medium,
            "large" | "big" => Self::Large,
            _ => Self::Any,
        })
    }
}

/// Qualitative classification of how well a school suits an athlete.
///
/// `Safety` is only assigned by callers that tag a school as a fallback option; the
/// aggregator and [`get_fit_tier`](super::get_fit_tier) never produce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitTier {
    Match,
    Reach,
    Unlikely,
    Safety,
}

impl FitTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Match => "match",
            Self::Reach => "reach",
            Self::Unlikely => "unlikely",
            Self::Safety => "safety",
        }
    }
}

impl fmt::Display for FitTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTier(pub String);

impl fmt::Display for UnknownTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown fit tier '{}' (expected match, reach, unlikely or safety)",
            self.0
        )
    }
}

impl std::error::Error for UnknownTier {}

impl FromStr for FitTier {
    type Err = UnknownTier;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "match" => Ok(Self::Match),
            "reach" => Ok(Self::Reach),
            "unlikely" => Ok(Self::Unlikely),
            "safety" => Ok(Self::Safety),
            _ => Err(UnknownTier(value.trim().to_string())),
        }
    }
}

/// One of the four weighted sub-scores composing the total fit score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Athletic,
    Academic,
    Opportunity,
    Personal,
}

impl Dimension {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Athletic,
            Self::Academic,
            Self::Opportunity,
            Self::Personal,
        ]
    }

    /// Upper bound of the dimension's contribution. The maxima sum to 100.
    pub const fn max_score(self) -> f64 {
        match self {
            Self::Athletic => 40.0,
            Self::Academic => 25.0,
            Self::Opportunity => 20.0,
            Self::Personal => 15.0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Athletic => "athletic",
            Self::Academic => "academic",
            Self::Opportunity => "opportunity",
            Self::Personal => "personal",
        }
    }
}

/// Raw athlete attributes as supplied by the profile data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteProfile {
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub height_inches: f64,
    #[serde(default)]
    pub weight_lbs: f64,
    #[serde(default)]
    pub top_velocity: f64,
    #[serde(default)]
    pub gpa: Option<f64>,
    #[serde(default)]
    pub sat: Option<f64>,
    #[serde(default)]
    pub act: Option<f64>,
    #[serde(default)]
    pub intended_major: Option<String>,
    #[serde(default)]
    pub home_state: String,
    pub graduation_year: i32,
    #[serde(default)]
    pub size_preference: SizePreference,
    #[serde(default)]
    pub cost_sensitivity: Level,
}

/// Raw school/program attributes as supplied by the school data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolProfile {
    pub name: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub position_needs: Vec<String>,
    #[serde(default)]
    pub coach_interest: Level,
    /// Athlete's percentile (0-100) against the program's current roster.
    #[serde(default)]
    pub roster_percentile: f64,
    #[serde(default)]
    pub avg_gpa: Option<f64>,
    #[serde(default)]
    pub avg_sat: Option<f64>,
    #[serde(default)]
    pub avg_act: Option<f64>,
    #[serde(default)]
    pub majors: Vec<String>,
    #[serde(default)]
    pub roster_depth_percentage: f64,
    #[serde(default)]
    pub scholarship_availability: Level,
    #[serde(default)]
    pub has_walk_on_history: bool,
    #[serde(default)]
    pub enrollment: u32,
    #[serde(default)]
    pub annual_cost: f64,
    #[serde(default)]
    pub is_priority: bool,
    /// Program strength in the athlete's intended major, 0-10.
    #[serde(default)]
    pub major_strength_score: Option<f64>,
    /// Caller-assigned tier that overrides the computed one (typically `Safety`).
    #[serde(default)]
    pub tagged_tier: Option<FitTier>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_parse_case_insensitively() {
        assert_eq!(" Safety ".parse::<FitTier>(), Ok(FitTier::Safety));
        assert_eq!("REACH".parse::<FitTier>(), Ok(FitTier::Reach));
        assert_eq!(
            "dream".parse::<FitTier>(),
            Err(UnknownTier("dream".to_string()))
        );
    }

    #[test]
    fn tiers_serialize_as_snake_case() {
        let json = serde_json::to_string(&FitTier::Unlikely).expect("serializes");
        assert_eq!(json, "\"unlikely\"");
    }

    #[test]
    fn dimension_maxima_sum_to_one_hundred() {
        let total: f64 = Dimension::ordered().iter().map(|d| d.max_score()).sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn size_preference_bands() {
        assert!(SizePreference::Small.matches(2_400));
        assert!(!SizePreference::Small.matches(9_000));
        assert!(SizePreference::Medium.matches(9_000));
        assert!(SizePreference::Large.matches(31_000));
        assert!(SizePreference::Any.matches(0));
        assert_eq!("Big".parse::<SizePreference>(), Ok(SizePreference::Large));
        assert_eq!("whatever".parse::<SizePreference>(), Ok(SizePreference::Any));
    }
}
