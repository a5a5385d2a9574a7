use crate::utils::error::{GateError, Result};
use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Vehicle category with an associated hourly parking rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleClass {
    Bike,
    Car,
}

impl VehicleClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleClass::Bike => "bike",
            VehicleClass::Car => "car",
        }
    }
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleClass {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bike" => Ok(VehicleClass::Bike),
            "car" => Ok(VehicleClass::Car),
            other => Err(GateError::UnknownVehicleClass {
                class: other.to_string(),
            }),
        }
    }
}

/// Hourly rates per vehicle class, in currency units per hour.
/// Static configuration; never mutated while the gate is running.
#[derive(Debug, Clone)]
pub struct RateTable {
    rates: HashMap<VehicleClass, f64>,
}

impl RateTable {
    pub fn new(rates: HashMap<VehicleClass, f64>) -> Result<Self> {
        for (class, rate) in &rates {
            if !rate.is_finite() || *rate < 0.0 {
                return Err(GateError::InvalidConfigValue {
                    field: format!("rates.{}", class),
                    value: rate.to_string(),
                    reason: "Hourly rate must be a non-negative number".to_string(),
                });
            }
        }
        Ok(Self { rates })
    }

    pub fn rate(&self, class: VehicleClass) -> Result<f64> {
        self.rates
            .get(&class)
            .copied()
            .ok_or_else(|| GateError::UnknownVehicleClass {
                class: class.to_string(),
            })
    }
}

impl Default for RateTable {
    fn default() -> Self {
        // Rates from the deployed application: bike 20/h, car 30/h.
        let mut rates = HashMap::new();
        rates.insert(VehicleClass::Bike, 20.0);
        rates.insert(VehicleClass::Car, 30.0);
        Self { rates }
    }
}

/// Requested parking window. `validate` enforces exit strictly after entry;
/// callers never see a zero or negative duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeInterval {
    pub entry: NaiveDateTime,
    pub exit: NaiveDateTime,
}

impl TimeInterval {
    pub fn new(entry: NaiveDateTime, exit: NaiveDateTime) -> Self {
        Self { entry, exit }
    }

    pub fn validate(&self) -> Result<()> {
        if self.exit <= self.entry {
            return Err(GateError::InvalidInterval {
                message: "Exit time must be after entry time".to_string(),
            });
        }
        Ok(())
    }

    /// Real-valued duration in hours. Only meaningful after `validate`.
    pub fn duration_hours(&self) -> f64 {
        let delta: TimeDelta = self.exit - self.entry;
        delta.num_seconds() as f64 / 3600.0
    }
}

/// Price quote for a validated interval. Full precision is kept here;
/// the `display_*` helpers apply the presentation rounding only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricingResult {
    pub duration_hours: f64,
    pub amount: f64,
}

impl PricingResult {
    /// Amount rounded to whole currency units, as shown to the user.
    pub fn display_amount(&self) -> String {
        format!("{:.0}", self.amount)
    }

    /// Duration rounded to one decimal, as shown to the user.
    pub fn display_duration(&self) -> String {
        format!("{:.1}", self.duration_hours)
    }
}

/// Slot count reported by the external availability service for one
/// (vehicle class, interval) query. Valid only at the moment of the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub available_slots: u32,
}

/// Pricing plus the submission verdict for the currently entered form values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quote {
    pub pricing: PricingResult,
    pub available_slots: u32,
    pub allow_submit: bool,
}

/// Server verdict on a booking extension. Cost and new exit time come from
/// the booking service; they are never recomputed locally.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtensionOutcome {
    Extended {
        message: String,
        additional_cost: f64,
        new_exit_time: String,
    },
    Rejected {
        message: String,
    },
}
