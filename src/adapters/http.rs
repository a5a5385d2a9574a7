use crate::core::{
    AvailabilityResponse, AvailabilityService, BookingService, ExtensionOutcome, TimeInterval,
    VehicleClass,
};
use crate::utils::error::{GateError, Result};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Wire format the booking form and the Flask-era endpoints exchange.
const WIRE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// HTTP client for the parking backend's availability and extension
/// endpoints. Each call is a single request; retries are the caller's
/// decision (the gate makes none).
pub struct ParkingApiClient {
    base_url: String,
    client: Client,
}

impl ParkingApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        validate_url("api_base_url", base_url)?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[derive(Debug, Deserialize)]
struct AvailabilityBody {
    available_slots: i64,
}

#[derive(Debug, Deserialize)]
struct ExtensionBody {
    success: bool,
    message: String,
    additional_cost: Option<f64>,
    new_exit_time: Option<String>,
}

#[async_trait]
impl AvailabilityService for ParkingApiClient {
    async fn check(
        &self,
        class: VehicleClass,
        interval: TimeInterval,
    ) -> Result<AvailabilityResponse> {
        let url = self.endpoint("check_availability");
        tracing::debug!("GET {} for {}", url, class);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("vehicle_type", class.as_str().to_string()),
                (
                    "entry_time",
                    interval.entry.format(WIRE_TIME_FORMAT).to_string(),
                ),
                (
                    "exit_time",
                    interval.exit.format(WIRE_TIME_FORMAT).to_string(),
                ),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GateError::RemoteService {
                message: format!(
                    "availability endpoint returned {}",
                    response.status()
                ),
            });
        }

        let body: AvailabilityBody = response.json().await?;
        // The count is defined as non-negative; a malformed negative value
        // is read as no capacity rather than poisoning the gate.
        let available_slots = u32::try_from(body.available_slots.max(0)).unwrap_or(u32::MAX);
        Ok(AvailabilityResponse { available_slots })
    }
}

#[async_trait]
impl BookingService for ParkingApiClient {
    async fn extend(&self, booking_id: &str, additional_hours: u32) -> Result<ExtensionOutcome> {
        let url = self.endpoint(&format!("extend_booking/{}", booking_id));
        tracing::debug!("POST {} with {} hour(s)", url, additional_hours);

        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "hours": additional_hours }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GateError::RemoteService {
                message: format!("extension endpoint returned {}", response.status()),
            });
        }

        let body: ExtensionBody = response.json().await?;
        if body.success {
            let additional_cost = body.additional_cost.ok_or_else(|| GateError::RemoteService {
                message: "extension response missing additional_cost".to_string(),
            })?;
            let new_exit_time = body.new_exit_time.ok_or_else(|| GateError::RemoteService {
                message: "extension response missing new_exit_time".to_string(),
            })?;
            Ok(ExtensionOutcome::Extended {
                message: body.message,
                additional_cost,
                new_exit_time,
            })
        } else {
            Ok(ExtensionOutcome::Rejected {
                message: body.message,
            })
        }
    }
}
