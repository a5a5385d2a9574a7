use crate::domain::model::{AvailabilityResponse, ExtensionOutcome, TimeInterval, VehicleClass};
use crate::utils::error::Result;
use async_trait::async_trait;

/// External slot-availability lookup. The service does its own bookkeeping;
/// the gate only consumes the returned count. No retry policy.
#[async_trait]
pub trait AvailabilityService: Send + Sync {
    async fn check(&self, class: VehicleClass, interval: TimeInterval)
        -> Result<AvailabilityResponse>;
}

/// External booking service. Extension cost and the new exit time depend on
/// server-held booking state, so the call is an opaque remote transaction.
#[async_trait]
pub trait BookingService: Send + Sync {
    async fn extend(&self, booking_id: &str, additional_hours: u32) -> Result<ExtensionOutcome>;
}

pub trait GateConfig: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn request_timeout_seconds(&self) -> u64;
    fn refresh_period_minutes(&self) -> u64;
}
