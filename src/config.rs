use crate::errors::ConfigError;
use crate::loader::SourceRef;
use chrono::NaiveDate;
use std::{env, time::Duration};

const DEFAULT_QUESTIONS: &str = "data/questions.json";
const DEFAULT_START_DATE: &str = "2025-08-21";
const SINGLE_CATALOG_DAYS: u32 = 50;
const DUAL_CATALOG_DAYS: u32 = 100;

/// How many questions a catalog hands out per day and for how many days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogPlan {
    pub per_day: usize,
    pub days: u32,
}

#[derive(Debug, Clone)]
pub struct TrackerConfig {
    pub questions: SourceRef,
    pub additional: Option<SourceRef>,
    pub start_date: NaiveDate,
    pub max_days: u32,
    pub primary: CatalogPlan,
    pub secondary: CatalogPlan,
    pub fetch_timeout: Duration,
}

impl TrackerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let questions = SourceRef::parse(&var("TRACKER_QUESTIONS").unwrap_or_else(|| DEFAULT_QUESTIONS.into()));
        let additional = var("TRACKER_ADDITIONAL").map(|value| SourceRef::parse(&value));

        let start_raw = var("TRACKER_START_DATE").unwrap_or_else(|| DEFAULT_START_DATE.into());
        let start_date = NaiveDate::parse_from_str(start_raw.trim(), "%Y-%m-%d").map_err(|_| {
            ConfigError::InvalidDate {
                name: "TRACKER_START_DATE",
                value: start_raw.clone(),
            }
        })?;

        let default_window = if additional.is_some() {
            DUAL_CATALOG_DAYS
        } else {
            SINGLE_CATALOG_DAYS
        };
        let max_days = positive(&var, "TRACKER_MAX_DAYS")?.unwrap_or(default_window);

        let primary_days = if additional.is_some() {
            positive(&var, "TRACKER_PRIMARY_DAYS")?.unwrap_or(SINGLE_CATALOG_DAYS.min(max_days))
        } else {
            positive(&var, "TRACKER_PRIMARY_DAYS")?.unwrap_or(max_days)
        };
        if primary_days > max_days {
            return Err(ConfigError::ExceedsWindow {
                name: "TRACKER_PRIMARY_DAYS",
                value: primary_days,
                max_days,
            });
        }

        let primary = CatalogPlan {
            per_day: positive(&var, "TRACKER_PRIMARY_PER_DAY")?.unwrap_or(2) as usize,
            days: primary_days,
        };
        let secondary = CatalogPlan {
            per_day: positive(&var, "TRACKER_ADDITIONAL_PER_DAY")?.unwrap_or(1) as usize,
            days: max_days - primary_days,
        };

        let timeout_secs = positive(&var, "TRACKER_FETCH_TIMEOUT_SECS")?.unwrap_or(10);

        Ok(Self {
            questions,
            additional,
            start_date,
            max_days,
            primary,
            secondary,
            fetch_timeout: Duration::from_secs(u64::from(timeout_secs)),
        })
    }

    pub fn build_client(&self) -> Result<reqwest::Client, ConfigError> {
        Ok(reqwest::Client::builder().timeout(self.fetch_timeout).build()?)
    }
}

pub fn resolve_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080)
}

fn positive(
    var: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<u32>, ConfigError> {
    let Some(raw) = var(name) else {
        return Ok(None);
    };
    match raw.trim().parse::<u32>() {
        Ok(value) if value > 0 => Ok(Some(value)),
        _ => Err(ConfigError::InvalidNumber { name, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<TrackerConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        TrackerConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_to_single_catalog_window() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.questions, SourceRef::File(DEFAULT_QUESTIONS.into()));
        assert!(config.additional.is_none());
        assert_eq!(config.start_date, NaiveDate::from_ymd_opt(2025, 8, 21).unwrap());
        assert_eq!(config.max_days, 50);
        assert_eq!(config.primary, CatalogPlan { per_day: 2, days: 50 });
        assert_eq!(config.secondary.days, 0);
    }

    #[test]
    fn additional_source_switches_to_dual_window() {
        let config = config_from(&[
            ("TRACKER_ADDITIONAL", "https://example.com/questions2.json"),
            ("TRACKER_START_DATE", "2025-09-20"),
        ])
        .unwrap();
        assert_eq!(
            config.additional,
            Some(SourceRef::Url("https://example.com/questions2.json".into()))
        );
        assert_eq!(config.start_date, NaiveDate::from_ymd_opt(2025, 9, 20).unwrap());
        assert_eq!(config.max_days, 100);
        assert_eq!(config.primary, CatalogPlan { per_day: 2, days: 50 });
        assert_eq!(config.secondary, CatalogPlan { per_day: 1, days: 50 });
    }

    #[test]
    fn empty_additional_is_ignored() {
        let config = config_from(&[("TRACKER_ADDITIONAL", "  ")]).unwrap();
        assert!(config.additional.is_none());
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            config_from(&[("TRACKER_START_DATE", "21/08/2025")]),
            Err(ConfigError::InvalidDate { .. })
        ));
        assert!(matches!(
            config_from(&[("TRACKER_MAX_DAYS", "0")]),
            Err(ConfigError::InvalidNumber { .. })
        ));
        assert!(matches!(
            config_from(&[("TRACKER_MAX_DAYS", "10"), ("TRACKER_PRIMARY_DAYS", "20")]),
            Err(ConfigError::ExceedsWindow { .. })
        ));
    }
}
