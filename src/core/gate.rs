use crate::core::pricing::compute_pricing;
use crate::core::{
    AvailabilityResponse, AvailabilityService, PricingResult, Quote, RateTable, TimeInterval,
    VehicleClass,
};
use crate::utils::error::Result;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;

/// True iff pricing succeeded and at least one slot is free. Zero
/// availability is a valid outcome that blocks submission, not an error.
pub fn evaluate_submission_gate(
    pricing: &Result<PricingResult>,
    availability: AvailabilityResponse,
) -> bool {
    pricing.is_ok() && availability.available_slots > 0
}

/// Decides whether the booking form may be submitted for the currently
/// entered vehicle class and interval.
///
/// Each `refresh` takes a sequence ticket before calling the availability
/// service; a response that is no longer the newest ticket is discarded, so
/// rapid input changes cannot leave the gate reflecting a stale response.
/// When the service fails, the gate stays in its last-known state.
pub struct BookingGate<A: AvailabilityService> {
    rates: RateTable,
    availability: A,
    seq: AtomicU64,
    last_known: Mutex<Option<Quote>>,
}

impl<A: AvailabilityService> BookingGate<A> {
    pub fn new(rates: RateTable, availability: A) -> Self {
        Self {
            rates,
            availability,
            seq: AtomicU64::new(0),
            last_known: Mutex::new(None),
        }
    }

    /// Pricing only, no network. Errors on an invalid interval.
    pub fn price(&self, class: VehicleClass, interval: TimeInterval) -> Result<PricingResult> {
        compute_pricing(&self.rates, class, interval)
    }

    pub async fn last_known(&self) -> Option<Quote> {
        *self.last_known.lock().await
    }

    /// Re-prices the interval and queries availability.
    ///
    /// An invalid interval fails here, before any network round-trip. A
    /// service failure is logged and the last-known quote is returned when
    /// one exists, so the submission verdict never flips on a transient
    /// error.
    pub async fn refresh(&self, class: VehicleClass, interval: TimeInterval) -> Result<Quote> {
        let pricing = compute_pricing(&self.rates, class, interval)?;

        let ticket = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(
            "Checking availability for {} {} -> {} (request #{})",
            class,
            interval.entry,
            interval.exit,
            ticket
        );

        match self.availability.check(class, interval).await {
            Ok(response) => {
                let quote = Quote {
                    pricing,
                    available_slots: response.available_slots,
                    allow_submit: evaluate_submission_gate(&Ok(pricing), response),
                };

                let mut last = self.last_known.lock().await;
                if self.seq.load(Ordering::SeqCst) != ticket {
                    // A newer request was issued while this one was in
                    // flight; its response owns the gate now.
                    tracing::debug!("Discarding stale availability response #{}", ticket);
                    return Ok(last.unwrap_or(quote));
                }

                if quote.available_slots == 0 {
                    tracing::warn!("No slots available for the selected time period");
                }
                *last = Some(quote);
                Ok(quote)
            }
            Err(e) => {
                tracing::error!("Error checking availability: {}", e);
                let last = self.last_known.lock().await;
                match *last {
                    Some(quote) => Ok(quote),
                    None => Err(e),
                }
            }
        }
    }
}
