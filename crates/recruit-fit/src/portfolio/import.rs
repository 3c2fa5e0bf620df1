use super::SchoolHealthEntry;
use crate::scoring::{get_fit_tier, FitTier};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum PortfolioImportError {
    #[error("failed to read school list: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid school list CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: unknown fit tier '{value}'")]
    UnknownTier { row: usize, value: String },
    #[error("row {row}: fit score '{value}' is not a number")]
    InvalidScore { row: usize, value: String },
}

#[derive(Debug, Deserialize)]
struct SchoolListRow {
    #[serde(rename = "School", default, deserialize_with = "empty_string_as_none")]
    school: Option<String>,
    #[serde(rename = "Fit Score", default, deserialize_with = "empty_string_as_none")]
    fit_score: Option<String>,
    #[serde(rename = "Fit Tier", default, deserialize_with = "empty_string_as_none")]
    fit_tier: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// Loads a school list exported from the tracking dashboard (`School`, `Fit Score`,
/// `Fit Tier` columns).
pub struct PortfolioImporter;

impl PortfolioImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<SchoolHealthEntry>, PortfolioImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(
        reader: R,
    ) -> Result<Vec<SchoolHealthEntry>, PortfolioImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut entries = Vec::new();
        for (index, record) in csv_reader.deserialize::<SchoolListRow>().enumerate() {
            let row = record?;
            // Header is row 1.
            let row_number = index + 2;

            let fit_score = match row.fit_score.as_deref() {
                Some(raw) => raw
                    .parse::<f64>()
                    .ok()
                    .filter(|score| score.is_finite())
                    .ok_or_else(|| PortfolioImportError::InvalidScore {
                        row: row_number,
                        value: raw.to_string(),
                    })?,
                None => 0.0,
            };

            let fit_tier = match row.fit_tier.as_deref() {
                Some(raw) => {
                    raw.parse::<FitTier>()
                        .map_err(|_| PortfolioImportError::UnknownTier {
                            row: row_number,
                            value: raw.to_string(),
                        })?
                }
                None => get_fit_tier(fit_score),
            };

            entries.push(SchoolHealthEntry {
                name: row.school,
                fit_score,
                fit_tier,
            });
        }

        Ok(entries)
    }
}
