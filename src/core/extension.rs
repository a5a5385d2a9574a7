use crate::core::{BookingService, ExtensionOutcome};
use crate::utils::error::{GateError, Result};
use crate::utils::validation::parse_additional_hours;

/// Asks the booking service to extend `booking_id` by the requested hours.
///
/// The booking id is threaded in explicitly by the caller (from whichever
/// dialog or command selected it), so there is no shared "current booking"
/// state to go stale. Hours are validated locally first; nothing is sent for
/// a non-positive or non-numeric value. The server's verdict, cost, and new
/// exit time are returned verbatim, never recomputed here.
pub async fn request_extension<B: BookingService>(
    service: &B,
    booking_id: &str,
    raw_hours: &str,
) -> Result<ExtensionOutcome> {
    if booking_id.trim().is_empty() {
        return Err(GateError::MissingConfig {
            field: "booking_id".to_string(),
        });
    }

    let hours = parse_additional_hours(raw_hours)?;
    tracing::debug!("Requesting {}h extension for booking {}", hours, booking_id);

    let outcome = service.extend(booking_id, hours).await?;
    match &outcome {
        ExtensionOutcome::Extended {
            additional_cost,
            new_exit_time,
            ..
        } => {
            tracing::info!(
                "Booking {} extended until {} (additional cost {})",
                booking_id,
                new_exit_time,
                additional_cost
            );
        }
        ExtensionOutcome::Rejected { message } => {
            tracing::info!("Extension of booking {} rejected: {}", booking_id, message);
        }
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct RecordingBookingService {
        calls: AtomicUsize,
        outcome: ExtensionOutcome,
    }

    impl RecordingBookingService {
        fn new(outcome: ExtensionOutcome) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                outcome,
            }
        }
    }

    #[async_trait]
    impl BookingService for RecordingBookingService {
        async fn extend(&self, _booking_id: &str, _hours: u32) -> Result<ExtensionOutcome> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.outcome.clone())
        }
    }

    fn success() -> ExtensionOutcome {
        ExtensionOutcome::Extended {
            message: "Booking extended successfully".to_string(),
            additional_cost: 90.0,
            new_exit_time: "2024-01-01T15:30".to_string(),
        }
    }

    #[tokio::test]
    async fn valid_hours_reach_the_service() {
        let service = RecordingBookingService::new(success());
        let outcome = request_extension(&service, "BK-42", "3").await.unwrap();

        assert_eq!(service.calls.load(Ordering::SeqCst), 1);
        assert_eq!(outcome, success());
    }

    #[tokio::test]
    async fn zero_hours_are_rejected_before_any_call() {
        let service = RecordingBookingService::new(success());
        let result = request_extension(&service, "BK-42", "0").await;

        assert!(result.unwrap_err().is_validation());
        assert_eq!(service.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn non_numeric_hours_are_rejected_before_any_call() {
        let service = RecordingBookingService::new(success());
        let result = request_extension(&service, "BK-42", "soon").await;

        assert!(result.unwrap_err().is_validation());
        assert_eq!(service.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn missing_booking_id_is_rejected_locally() {
        let service = RecordingBookingService::new(success());
        let result = request_extension(&service, "  ", "2").await;

        assert!(result.is_err());
        assert_eq!(service.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn server_rejection_is_passed_through_verbatim() {
        let rejection = ExtensionOutcome::Rejected {
            message: "Cannot extend completed booking".to_string(),
        };
        let service = RecordingBookingService::new(rejection.clone());
        let outcome = request_extension(&service, "BK-42", "2").await.unwrap();

        assert_eq!(outcome, rejection);
    }
}
