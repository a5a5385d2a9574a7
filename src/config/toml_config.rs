use crate::core::{GateConfig, RateTable, VehicleClass};
use crate::core::interval::IntervalPolicy;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// File configuration for the gate: service endpoint, rate table, and the
/// interval/refresh policies. Anything omitted falls back to the deployed
/// application's defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub service: ServiceSection,
    /// Keyed by vehicle class name ("bike", "car").
    pub rates: Option<HashMap<String, f64>>,
    pub interval: Option<IntervalSection>,
    pub refresh: Option<RefreshSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSection {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntervalSection {
    pub default_duration_hours: Option<i64>,
    pub bump_hours: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshSection {
    pub period_minutes: Option<u64>,
}

impl TomlConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: TomlConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn rate_table(&self) -> Result<RateTable> {
        match &self.rates {
            Some(rates) => {
                let mut parsed = HashMap::new();
                for (class, rate) in rates {
                    parsed.insert(class.parse::<VehicleClass>()?, *rate);
                }
                RateTable::new(parsed)
            }
            None => Ok(RateTable::default()),
        }
    }

    pub fn interval_policy(&self) -> IntervalPolicy {
        let defaults = IntervalPolicy::default();
        match &self.interval {
            Some(section) => IntervalPolicy {
                default_duration_hours: section
                    .default_duration_hours
                    .unwrap_or(defaults.default_duration_hours),
                bump_hours: section.bump_hours.unwrap_or(defaults.bump_hours),
            },
            None => defaults,
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("service.base_url", &self.service.base_url)?;
        if let Some(timeout) = self.service.timeout_seconds {
            validate_positive_number("service.timeout_seconds", timeout, 1)?;
        }
        if let Some(refresh) = &self.refresh {
            if let Some(period) = refresh.period_minutes {
                validate_positive_number("refresh.period_minutes", period, 1)?;
            }
        }
        // Rate values are range-checked when the table is built.
        self.rate_table().map(|_| ())
    }
}

impl GateConfig for TomlConfig {
    fn api_base_url(&self) -> &str {
        &self.service.base_url
    }

    fn request_timeout_seconds(&self) -> u64 {
        self.service.timeout_seconds.unwrap_or(10)
    }

    fn refresh_period_minutes(&self) -> u64 {
        self.refresh
            .as_ref()
            .and_then(|r| r.period_minutes)
            .unwrap_or(5)
    }
}
