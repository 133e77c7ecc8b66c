use crate::items::consts::DEFAULT_ITEMS_PER_SPOT;
use crate::map_locations::models::PoolKind;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use url::Url;
#[cfg(test)]
pub mod tests;

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    #[arg(long)]
    #[arg(value_delimiter = ',')]
    #[arg(default_value = "http://127.0.0.1:3000,http://localhost:3000")]
    pub allowed_origins: Vec<String>,
    #[arg(long)]
    #[arg(default_value = "data/locations.example.ndjson")]
    pub locations: PathBuf,
    #[arg(long, value_enum)]
    #[arg(default_value_t = PoolKind::Road)]
    pub locations_kind: PoolKind,
    #[arg(long)]
    #[arg(default_value = "data/items.example.json")]
    pub items: PathBuf,
    #[arg(long)]
    #[arg(default_value_t = DEFAULT_ITEMS_PER_SPOT)]
    pub items_per_spot: usize,
    /// Tilt the camera when a spot has no street-level imagery.
    #[arg(long)]
    pub three_d: bool,
    #[arg(long)]
    #[arg(default_value_t = 100)]
    pub step_interval_ms: u64,
    #[arg(long)]
    #[arg(default_value = "https://maps.googleapis.com/maps/api/streetview/metadata")]
    pub imagery_base_url: Url,
    #[arg(long)]
    #[arg(default_value = "https://maps.googleapis.com/maps/api/geocode/json")]
    pub geocoding_base_url: Url,
    #[arg(long)]
    #[arg(default_value_t = 5000)]
    pub service_timeout_ms: u64,
    /// Sessions without any request for this long are dropped.
    #[arg(long)]
    #[arg(default_value_t = 1800)]
    pub session_idle_timeout_secs: u64,
}
