use httpmock::prelude::*;
use parkgate::{
    BookingGate, ExtensionOutcome, ParkingApiClient, RateTable, TimeInterval, VehicleClass,
};
use std::time::Duration;

fn at(h: u32, m: u32) -> chrono::NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

fn client(server: &MockServer) -> ParkingApiClient {
    ParkingApiClient::new(&server.base_url(), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn quote_end_to_end_with_real_http() {
    let server = MockServer::start();
    let availability = server.mock(|when, then| {
        when.method(GET)
            .path("/check_availability")
            .query_param("vehicle_type", "car")
            .query_param("entry_time", "2024-01-01T10:00")
            .query_param("exit_time", "2024-01-01T12:30");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"available_slots": 3}));
    });

    let gate = BookingGate::new(RateTable::default(), client(&server));
    let quote = gate
        .refresh(VehicleClass::Car, TimeInterval::new(at(10, 0), at(12, 30)))
        .await
        .unwrap();

    availability.assert();
    assert_eq!(quote.pricing.duration_hours, 2.5);
    assert_eq!(quote.pricing.amount, 75.0);
    assert_eq!(quote.pricing.display_amount(), "75");
    assert_eq!(quote.pricing.display_duration(), "2.5");
    assert_eq!(quote.available_slots, 3);
    assert!(quote.allow_submit);
}

#[tokio::test]
async fn zero_availability_blocks_submission_but_is_not_an_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/check_availability");
        then.status(200)
            .json_body(serde_json::json!({"available_slots": 0}));
    });

    let gate = BookingGate::new(RateTable::default(), client(&server));
    let quote = gate
        .refresh(VehicleClass::Bike, TimeInterval::new(at(9, 0), at(10, 0)))
        .await
        .unwrap();

    assert_eq!(quote.available_slots, 0);
    assert!(!quote.allow_submit);
}

#[tokio::test]
async fn invalid_interval_fails_before_the_network() {
    let server = MockServer::start();
    let availability = server.mock(|when, then| {
        when.method(GET).path("/check_availability");
        then.status(200)
            .json_body(serde_json::json!({"available_slots": 9}));
    });

    let gate = BookingGate::new(RateTable::default(), client(&server));
    let result = gate
        .refresh(VehicleClass::Bike, TimeInterval::new(at(10, 0), at(10, 0)))
        .await;

    assert!(result.unwrap_err().is_validation());
    assert_eq!(availability.hits(), 0);
}

#[tokio::test]
async fn service_outage_keeps_the_last_known_verdict() {
    let server = MockServer::start();
    let mut healthy = server.mock(|when, then| {
        when.method(GET).path("/check_availability");
        then.status(200)
            .json_body(serde_json::json!({"available_slots": 2}));
    });

    let gate = BookingGate::new(RateTable::default(), client(&server));
    let interval = TimeInterval::new(at(10, 0), at(12, 0));
    let first = gate.refresh(VehicleClass::Car, interval).await.unwrap();
    assert!(first.allow_submit);

    healthy.delete();
    server.mock(|when, then| {
        when.method(GET).path("/check_availability");
        then.status(503);
    });

    let second = gate.refresh(VehicleClass::Car, interval).await.unwrap();
    assert_eq!(second, first);
}

#[tokio::test]
async fn extension_end_to_end_with_real_http() {
    let server = MockServer::start();
    let extend = server.mock(|when, then| {
        when.method(POST)
            .path("/extend_booking/BK-7")
            .json_body(serde_json::json!({"hours": 3}));
        then.status(200).json_body(serde_json::json!({
            "success": true,
            "message": "Booking extended successfully",
            "additional_cost": 90.0,
            "new_exit_time": "2024-01-01T15:30"
        }));
    });

    let outcome = parkgate::request_extension(&client(&server), "BK-7", "3")
        .await
        .unwrap();

    extend.assert();
    match outcome {
        ExtensionOutcome::Extended {
            message,
            additional_cost,
            new_exit_time,
        } => {
            assert_eq!(message, "Booking extended successfully");
            assert_eq!(additional_cost, 90.0);
            assert_eq!(new_exit_time, "2024-01-01T15:30");
        }
        other => panic!("expected extension success, got {:?}", other),
    }
}

#[tokio::test]
async fn invalid_extension_hours_never_reach_the_server() {
    let server = MockServer::start();
    let extend = server.mock(|when, then| {
        when.method(POST).path("/extend_booking/BK-7");
        then.status(200)
            .json_body(serde_json::json!({"success": true, "message": "ok"}));
    });

    let api = client(&server);
    assert!(parkgate::request_extension(&api, "BK-7", "0")
        .await
        .unwrap_err()
        .is_validation());
    assert!(parkgate::request_extension(&api, "BK-7", "-1")
        .await
        .unwrap_err()
        .is_validation());
    assert!(parkgate::request_extension(&api, "BK-7", "many")
        .await
        .unwrap_err()
        .is_validation());
    assert_eq!(extend.hits(), 0);
}

#[tokio::test]
async fn extension_rejection_reason_is_shown_verbatim() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/extend_booking/BK-7");
        then.status(200).json_body(serde_json::json!({
            "success": false,
            "message": "Cannot extend completed booking"
        }));
    });

    let outcome = parkgate::request_extension(&client(&server), "BK-7", "2")
        .await
        .unwrap();

    assert_eq!(
        outcome,
        ExtensionOutcome::Rejected {
            message: "Cannot extend completed booking".to_string()
        }
    );
}
