use crate::geocoding::models::{
    label_or_placeholder, GeocodeError, GeocodeResponse, PlaceName, PLACEHOLDER_LABEL,
};
use crate::geocoding::{Geocoder, NoGeocoder, ReverseGeocodingClient};
use crate::map_locations::models::Coordinate;
use axum::extract::Query;
use axum::routing::get;
use axum::{Json, Router};
use std::collections::HashMap;
use url::Url;

const KYOTO: &str = r#"{
    "status": "OK",
    "results": [
        {
            "address_components": [
                {"long_name": "3", "types": ["street_number"]},
                {"long_name": "Higashiyama Ward", "types": ["political", "sublocality"]},
                {"long_name": "Kyoto", "types": ["locality", "political"]},
                {"long_name": "Kyoto", "types": ["administrative_area_level_1", "political"]},
                {"long_name": "Japan", "types": ["country", "political"]}
            ]
        },
        {
            "address_components": [
                {"long_name": "Somewhere else", "types": ["locality"]}
            ]
        }
    ]
}"#;

#[test]
fn test_first_result_is_used() {
    let response: GeocodeResponse = serde_json::from_str(KYOTO).unwrap();

    let place = response.into_place_name().unwrap();

    assert_eq!(
        place,
        PlaceName {
            locality: Some(String::from("Kyoto")),
            region: Some(String::from("Kyoto")),
            country: Some(String::from("Japan")),
        }
    );
    assert_eq!(place.label().unwrap(), "Kyoto, Kyoto, Japan");
}

#[test]
fn test_rural_result_falls_back_to_broader_areas() {
    let raw = r#"{"status": "OK", "results": [{"address_components": [
        {"long_name": "Outback County", "types": ["administrative_area_level_2"]},
        {"long_name": "Australia", "types": ["country"]}
    ]}]}"#;
    let response: GeocodeResponse = serde_json::from_str(raw).unwrap();

    let label = response.into_place_name().unwrap().label();

    assert_eq!(label.as_deref(), Some("Outback County, Australia"));
}

#[test]
fn test_zero_results() {
    let response: GeocodeResponse =
        serde_json::from_str(r#"{"status": "ZERO_RESULTS", "results": []}"#).unwrap();

    assert!(matches!(
        response.into_place_name(),
        Err(GeocodeError::NoResults)
    ));
}

#[test]
fn test_denied_status() {
    let response: GeocodeResponse =
        serde_json::from_str(r#"{"status": "REQUEST_DENIED"}"#).unwrap();

    assert!(matches!(
        response.into_place_name(),
        Err(GeocodeError::Status(status)) if status == "REQUEST_DENIED"
    ));
}

#[test]
fn test_unnamed_components_are_no_result() {
    let response: GeocodeResponse = serde_json::from_str(
        r#"{"status": "OK", "results": [{"address_components": [
            {"long_name": "A1", "types": ["route"]}
        ]}]}"#,
    )
    .unwrap();

    assert!(matches!(
        response.into_place_name(),
        Err(GeocodeError::NoResults)
    ));
}

#[test]
fn test_failures_map_to_placeholder() {
    assert_eq!(
        label_or_placeholder(Err(GeocodeError::Disabled)),
        PLACEHOLDER_LABEL
    );
    assert_eq!(
        label_or_placeholder(Ok(PlaceName::default())),
        PLACEHOLDER_LABEL
    );
    assert_eq!(
        label_or_placeholder(Ok(PlaceName {
            locality: None,
            region: None,
            country: Some(String::from("Chile")),
        })),
        "Chile"
    );
}

#[tokio::test]
async fn test_client_queries_latlng() {
    let router = Router::new().route(
        "/geocode",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            if params.get("latlng").map(String::as_str) == Some("35,135.77") {
                Json(serde_json::from_str::<serde_json::Value>(KYOTO).unwrap())
            } else {
                Json(serde_json::json!({ "status": "INVALID_REQUEST" }))
            }
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    let base_url = Url::parse(&format!("http://{address}/geocode")).unwrap();
    let client = ReverseGeocodingClient::new(reqwest::Client::new(), base_url, String::from("k"));

    let place = client
        .reverse_geocode(Coordinate::new(35.0, 135.77))
        .await
        .unwrap();

    assert_eq!(place.country.as_deref(), Some("Japan"));
}

#[tokio::test]
async fn test_no_geocoder_is_always_an_error() {
    let outcome = NoGeocoder.reverse_geocode(Coordinate::new(0.0, 0.0)).await;

    assert!(matches!(outcome, Err(GeocodeError::Disabled)));
}
