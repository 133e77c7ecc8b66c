use crate::availability::models::{
    Generation, ImageryError, ImageryStatus, MetadataResponse, Resolution,
};
use crate::availability::service::{ImageryService, NoImagery, StreetViewMetadataClient};
use crate::availability::AvailabilityGate;
use crate::map_locations::models::Coordinate;
use crate::view::models::{Availability, ViewMode, ViewState};
use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use std::collections::HashMap;
use url::Url;

fn view() -> ViewState {
    ViewState::resting(Coordinate::new(1.0, 1.0), 5)
}

#[test]
fn test_begin_marks_availability_unknown() {
    let mut gate = AvailabilityGate::default();
    let mut view = view();
    view.availability = Availability::Available;
    view.mode = ViewMode::Detailed;

    let generation = gate.begin(&mut view);

    assert_eq!(generation, Generation(1));
    assert!(!view.availability_known());
    assert_eq!(view.mode, ViewMode::Fallback);
}

#[test]
fn test_available_result_switches_to_detailed() {
    let mut gate = AvailabilityGate::default();
    let mut view = view();
    let generation = gate.begin(&mut view);

    let resolution = gate.resolve(&mut view, generation, Ok(ImageryStatus::Ok));

    assert_eq!(resolution, Resolution::Applied { available: true });
    assert_eq!(view.availability, Availability::Available);
    assert_eq!(view.mode, ViewMode::Detailed);
}

#[test]
fn test_non_ok_statuses_and_errors_mean_unavailable() {
    let mut gate = AvailabilityGate::default();
    for outcome in [
        Ok(ImageryStatus::ZeroResults),
        Ok(ImageryStatus::RequestDenied),
        Ok(ImageryStatus::Other(String::from("SOMETHING_NEW"))),
        Err(ImageryError::Disabled),
    ] {
        let mut view = view();
        let generation = gate.begin(&mut view);

        let resolution = gate.resolve(&mut view, generation, outcome);

        assert_eq!(resolution, Resolution::Applied { available: false });
        assert_eq!(view.availability, Availability::Unavailable);
        assert_eq!(view.mode, ViewMode::Fallback);
    }
}

#[test]
fn test_superseded_result_is_discarded() {
    let mut gate = AvailabilityGate::default();
    let mut view = view();
    let g1 = gate.begin(&mut view);
    let g2 = gate.begin(&mut view);

    assert_eq!(
        gate.resolve(&mut view, g1, Ok(ImageryStatus::Ok)),
        Resolution::Stale
    );
    assert!(!view.availability_known());
    assert_eq!(view.mode, ViewMode::Fallback);

    gate.resolve(&mut view, g2, Ok(ImageryStatus::ZeroResults));
    assert_eq!(view.availability, Availability::Unavailable);

    // g1 landing even later still can't flip the answer.
    assert_eq!(
        gate.resolve(&mut view, g1, Ok(ImageryStatus::Ok)),
        Resolution::Stale
    );
    assert_eq!(view.availability, Availability::Unavailable);
    assert_eq!(view.mode, ViewMode::Fallback);
}

#[test]
fn test_toggle_requires_confirmed_imagery() {
    let mut gate = AvailabilityGate::default();
    let mut view = view();
    let generation = gate.begin(&mut view);

    assert!(!gate.toggle(&mut view));
    assert_eq!(view.mode, ViewMode::Fallback);

    gate.resolve(&mut view, generation, Ok(ImageryStatus::Ok));
    assert!(gate.toggle(&mut view));
    assert_eq!(view.mode, ViewMode::Fallback);
    assert!(gate.toggle(&mut view));
    assert_eq!(view.mode, ViewMode::Detailed);
}

#[test]
fn test_toggle_is_a_no_op_without_imagery() {
    let mut gate = AvailabilityGate::default();
    let mut view = view();
    let generation = gate.begin(&mut view);
    gate.resolve(&mut view, generation, Ok(ImageryStatus::ZeroResults));

    assert!(!gate.toggle(&mut view));
    assert_eq!(view.mode, ViewMode::Fallback);
}

#[test]
fn test_status_codes() {
    assert_eq!(ImageryStatus::from_code("OK"), ImageryStatus::Ok);
    assert_eq!(
        ImageryStatus::from_code("ZERO_RESULTS"),
        ImageryStatus::ZeroResults
    );
    assert!(ImageryStatus::from_code("OK").is_available());
    assert!(!ImageryStatus::from_code("ok").is_available());
    assert!(!ImageryStatus::from_code("NOT_FOUND").is_available());
}

#[test]
fn test_metadata_response_ignores_extra_fields() {
    let raw = r#"{"copyright": "© Google", "date": "2021-06", "location": {"lat": 1.0, "lng": 1.0},
        "pano_id": "abc", "status": "OK"}"#;

    let response: MetadataResponse = serde_json::from_str(raw).unwrap();

    assert_eq!(response.status, "OK");
}

async fn serve(router: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Url::parse(&format!("http://{address}/metadata")).unwrap()
}

#[tokio::test]
async fn test_metadata_client_sends_location_and_radius() {
    let router = Router::new().route(
        "/metadata",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            let status = if params.get("location").map(String::as_str) == Some("1.5,-2.5")
                && params.get("radius").map(String::as_str) == Some("50")
                && params.get("key").map(String::as_str) == Some("test-key")
            {
                "OK"
            } else {
                "INVALID_REQUEST"
            };
            Json(serde_json::json!({ "status": status }))
        }),
    );
    let base_url = serve(router).await;
    let client =
        StreetViewMetadataClient::new(reqwest::Client::new(), base_url, String::from("test-key"));

    let status = client
        .check_availability(Coordinate::new(1.5, -2.5), 50)
        .await
        .unwrap();

    assert_eq!(status, ImageryStatus::Ok);
}

#[tokio::test]
async fn test_metadata_client_http_error() {
    let router = Router::new().route(
        "/metadata",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base_url = serve(router).await;
    let client =
        StreetViewMetadataClient::new(reqwest::Client::new(), base_url, String::from("test-key"));

    let result = client.check_availability(Coordinate::new(0.0, 0.0), 50).await;

    assert!(matches!(result, Err(ImageryError::Request(_))));
}

#[tokio::test]
async fn test_no_imagery_is_always_an_error() {
    let result = NoImagery
        .check_availability(Coordinate::new(0.0, 0.0), 50)
        .await;

    assert!(matches!(result, Err(ImageryError::Disabled)));
}
