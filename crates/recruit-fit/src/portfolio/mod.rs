//! Advisory health checks over an athlete's tracked school list.
//!
//! This layer never blocks the caller: it only counts tiers and raises warnings for the
//! dashboard to display.

mod import;

pub use import::{PortfolioImportError, PortfolioImporter};

use crate::scoring::FitTier;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Thresholds for the balance heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortfolioConfig {
    /// Lists shorter than this are flagged as too small.
    pub min_schools: usize,
    /// Largest share of reach schools before the list counts as reach-heavy.
    pub max_reach_share: f64,
    /// Reach-heavy warnings need at least this many reach schools.
    pub min_reach_count: usize,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            min_schools: 3,
            max_reach_share: 0.5,
            min_reach_count: 3,
        }
    }
}

/// A scored school as held by the caller's school list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolHealthEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub fit_score: f64,
    pub fit_tier: FitTier,
}

impl SchoolHealthEntry {
    pub fn new(fit_score: f64, fit_tier: FitTier) -> Self {
        Self {
            name: None,
            fit_score,
            fit_tier,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortfolioStatus {
    NotStarted,
    NeedsAttention,
    Healthy,
}

impl PortfolioStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not started",
            Self::NeedsAttention => "Needs attention",
            Self::Healthy => "Healthy",
        }
    }
}

/// Balance problems detected in a portfolio, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortfolioWarning {
    NoSafetySchools,
    ReachHeavy { reaches: usize, total: usize },
    TooFewSchools { total: usize, minimum: usize },
}

impl fmt::Display for PortfolioWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortfolioWarning::NoSafetySchools => write!(
                f,
                "No safety schools yet. Add at least one school where you are a strong candidate."
            ),
            PortfolioWarning::ReachHeavy { reaches, total } => write!(
                f,
                "Too many reach schools ({reaches} of {total}). Balance the list with more match or safety schools."
            ),
            PortfolioWarning::TooFewSchools { total, minimum } => write!(
                f,
                "Only {total} school(s) tracked. Add more schools to reach at least {minimum}."
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioHealth {
    pub total: usize,
    pub matches: usize,
    pub reaches: usize,
    pub unlikelies: usize,
    pub safeties: usize,
    pub average_score: f64,
    pub status: PortfolioStatus,
    pub warnings: Vec<String>,
}

impl PortfolioHealth {
    fn empty() -> Self {
        Self {
            total: 0,
            matches: 0,
            reaches: 0,
            unlikelies: 0,
            safeties: 0,
            average_score: 0.0,
            status: PortfolioStatus::NotStarted,
            warnings: Vec::new(),
        }
    }
}

/// Rolls a school list up into tier counts, a status and ordered warnings.
pub fn calculate_portfolio_health(
    entries: &[SchoolHealthEntry],
    config: &PortfolioConfig,
) -> PortfolioHealth {
    if entries.is_empty() {
        return PortfolioHealth::empty();
    }

    let mut health = PortfolioHealth::empty();
    health.total = entries.len();

    let mut score_sum = 0.0;
    let mut scored = 0usize;
    for entry in entries {
        match entry.fit_tier {
            FitTier::Match => health.matches += 1,
            FitTier::Reach => health.reaches += 1,
            FitTier::Unlikely => health.unlikelies += 1,
            FitTier::Safety => health.safeties += 1,
        }
        if entry.fit_score.is_finite() {
            score_sum += entry.fit_score;
            scored += 1;
        }
    }
    if scored > 0 {
        health.average_score = score_sum / scored as f64;
    }

    let warnings = detect_warnings(&health, config);
    for warning in &warnings {
        debug!(?warning, total = health.total, "portfolio warning raised");
    }

    health.status = if warnings.is_empty() {
        PortfolioStatus::Healthy
    } else {
        PortfolioStatus::NeedsAttention
    };
    health.warnings = warnings.iter().map(ToString::to_string).collect();
    health
}

fn detect_warnings(health: &PortfolioHealth, config: &PortfolioConfig) -> Vec<PortfolioWarning> {
    let mut warnings = Vec::new();

    if health.safeties == 0 {
        warnings.push(PortfolioWarning::NoSafetySchools);
    }

    let reach_limit = health.total as f64 * config.max_reach_share;
    if health.reaches as f64 > reach_limit && health.reaches >= config.min_reach_count {
        warnings.push(PortfolioWarning::ReachHeavy {
            reaches: health.reaches,
            total: health.total,
        });
    }

    if health.total < config.min_schools {
        warnings.push(PortfolioWarning::TooFewSchools {
            total: health.total,
            minimum: config.min_schools,
        });
    }

    warnings
}
