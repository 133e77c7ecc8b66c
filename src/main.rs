use clap::Parser;
use sessions::models::SessionSettings;
use std::time::Duration;

mod app_context;
mod availability;
mod camera;
mod cli;
mod geocoding;
mod health;
mod http;
mod items;
mod logging;
mod map_locations;
mod pools;
mod sampling;
mod services;
mod sessions;
mod surface;
mod view;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    logging::init(&args);
    let pools = match pools::init(&args) {
        Ok(pools) => Some(pools),
        Err(err) => {
            tracing::error!("Failed to load the pools, no spots will be served: {err}");
            None
        }
    };
    let services = services::init(&args);
    let app_context = app_context::init(pools, services, SessionSettings::from_args(&args));
    sessions::storage::spawn_idle_sweep(
        app_context.sessions.clone(),
        Duration::from_secs(args.session_idle_timeout_secs),
    );
    let router = http::router::new(&args, app_context);

    let listener = tokio::net::TcpListener::bind(args.listen_address)
        .await
        .expect("Failed to bind the listen address.");
    tracing::info!("Listening on {}.", args.listen_address);
    axum::serve(listener, router)
        .await
        .expect("The HTTP server crashed.");
}
