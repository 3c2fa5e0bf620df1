use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use recruit_fit::portfolio::PortfolioConfig;
use recruit_fit::scoring::FitEvaluator;
use serde::Deserialize;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) evaluator: Arc<FitEvaluator>,
    pub(crate) portfolio: PortfolioConfig,
}

impl AppState {
    pub(crate) fn new(metrics: PrometheusHandle, portfolio: PortfolioConfig) -> Self {
        Self {
            readiness: Arc::new(AtomicBool::new(false)),
            metrics: Arc::new(metrics),
            evaluator: Arc::new(FitEvaluator::new(portfolio)),
            portfolio,
        }
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn deserialize_optional_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.map(|value| parse_date(&value).map_err(serde::de::Error::custom))
        .transpose()
}

#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    let recorder = metrics_exporter_prometheus::PrometheusBuilder::new().build_recorder();
    AppState::new(recorder.handle(), PortfolioConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_trims_and_reports_bad_input() {
        assert_eq!(
            parse_date(" 2026-10-16 "),
            Ok(NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date"))
        );
        let err = parse_date("10/16/2026").expect_err("slashes rejected");
        assert!(err.contains("YYYY-MM-DD"));
    }
}
