pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::adapters::http::ParkingApiClient;
pub use crate::core::extension::request_extension;
pub use crate::core::gate::{evaluate_submission_gate, BookingGate};
pub use crate::core::interval::IntervalPolicy;
pub use crate::core::pricing::compute_pricing;
pub use crate::core::schedule::RefreshTask;
pub use crate::domain::model::{
    AvailabilityResponse, ExtensionOutcome, PricingResult, Quote, RateTable, TimeInterval,
    VehicleClass,
};
pub use crate::utils::error::{GateError, Result};
