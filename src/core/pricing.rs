use crate::core::{PricingResult, RateTable, TimeInterval, VehicleClass};
use crate::utils::error::Result;

/// Prices a parking window: duration in fractional hours times the hourly
/// rate for the class. Pure function of its inputs and the static rate
/// table; fails before touching the duration when the interval is invalid.
pub fn compute_pricing(
    rates: &RateTable,
    class: VehicleClass,
    interval: TimeInterval,
) -> Result<PricingResult> {
    interval.validate()?;
    let rate = rates.rate(class)?;

    let duration_hours = interval.duration_hours();
    Ok(PricingResult {
        duration_hours,
        amount: duration_hours * rate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn car_for_two_and_a_half_hours_costs_75() {
        let rates = RateTable::default();
        let pricing = compute_pricing(
            &rates,
            VehicleClass::Car,
            TimeInterval::new(at(10, 0), at(12, 30)),
        )
        .unwrap();

        assert_eq!(pricing.duration_hours, 2.5);
        assert_eq!(pricing.amount, 75.0);
        assert_eq!(pricing.display_amount(), "75");
        assert_eq!(pricing.display_duration(), "2.5");
    }

    #[test]
    fn bike_rate_is_applied() {
        let rates = RateTable::default();
        let pricing = compute_pricing(
            &rates,
            VehicleClass::Bike,
            TimeInterval::new(at(8, 0), at(11, 0)),
        )
        .unwrap();

        assert_eq!(pricing.amount, 60.0);
    }

    #[test]
    fn equal_instants_are_a_validation_error() {
        let rates = RateTable::default();
        let result = compute_pricing(
            &rates,
            VehicleClass::Bike,
            TimeInterval::new(at(10, 0), at(10, 0)),
        );
        assert!(result.unwrap_err().is_validation());
    }

    #[test]
    fn reversed_interval_never_yields_negative_amount() {
        let rates = RateTable::default();
        let result = compute_pricing(
            &rates,
            VehicleClass::Car,
            TimeInterval::new(at(12, 0), at(10, 0)),
        );
        assert!(result.is_err());
    }

    #[test]
    fn amount_is_monotone_in_exit_time() {
        let rates = RateTable::default();
        let mut previous = 0.0;
        for minutes in [30, 60, 90, 150, 480] {
            let exit = at(10, 0) + chrono::TimeDelta::minutes(minutes);
            let pricing = compute_pricing(
                &rates,
                VehicleClass::Car,
                TimeInterval::new(at(10, 0), exit),
            )
            .unwrap();
            assert!(pricing.amount >= previous);
            previous = pricing.amount;
        }
    }
}
