use crate::cli::Args;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "stand_here=info";

pub fn init(_args: &Args) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_timer(UtcTime::rfc_3339()))
        .init();
}
