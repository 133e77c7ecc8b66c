use crate::cli::Args;
use crate::map_locations::models::PoolKind;
use clap::Parser;
use std::{net::SocketAddr, path::PathBuf, str::FromStr};
use url::Url;

pub fn fake_args() -> Args {
    Args {
        listen_address: SocketAddr::from_str("0.0.0.0:3030")
            .expect("Failed to construct fake listen address."),
        allowed_origins: vec![String::from("http://localhost:3000")],
        locations: PathBuf::from("data/locations.example.ndjson"),
        locations_kind: PoolKind::Road,
        items: PathBuf::from("data/items.example.json"),
        items_per_spot: 3,
        three_d: true,
        step_interval_ms: 10,
        imagery_base_url: Url::from_str("http://127.0.0.1:1/metadata")
            .expect("Failed to construct fake imagery URL."),
        geocoding_base_url: Url::from_str("http://127.0.0.1:1/geocode")
            .expect("Failed to construct fake geocoding URL."),
        service_timeout_ms: 100,
        session_idle_timeout_secs: 60,
    }
}

#[test]
fn test_defaults() {
    let args = Args::parse_from(["stand-here"]);

    assert_eq!(args.locations_kind, PoolKind::Road);
    assert_eq!(args.items_per_spot, 3);
    assert!(!args.three_d);
    assert_eq!(args.session_idle_timeout_secs, 1800);
    assert_eq!(
        args.allowed_origins,
        vec!["http://127.0.0.1:3000", "http://localhost:3000"]
    );
}

#[test]
fn test_land_pool_with_three_d() {
    let args = Args::parse_from([
        "stand-here",
        "--locations",
        "land.json",
        "--locations-kind",
        "land",
        "--three-d",
        "--allowed-origins",
        "https://example.org",
    ]);

    assert_eq!(args.locations, PathBuf::from("land.json"));
    assert_eq!(args.locations_kind, PoolKind::Land);
    assert!(args.three_d);
    assert_eq!(args.allowed_origins, vec!["https://example.org"]);
}
