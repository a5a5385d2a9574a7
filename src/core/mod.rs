pub mod extension;
pub mod gate;
pub mod interval;
pub mod pricing;
pub mod schedule;

pub use crate::domain::model::{
    AvailabilityResponse, ExtensionOutcome, PricingResult, Quote, RateTable, TimeInterval,
    VehicleClass,
};
pub use crate::domain::ports::{AvailabilityService, BookingService, GateConfig};
pub use crate::utils::error::Result;
