//! Backend entry-point: loads settings, initialises logging, and serves the API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use course_enrollment::inbound::http::health::HealthState;
use course_enrollment::settings::ServerSettings;
use server::{ServerConfig, create_server};

fn init_tracing(pretty: bool) {
    let builder = fmt().with_env_filter(EnvFilter::from_default_env());
    let result = if pretty {
        builder.try_init()
    } else {
        builder.json().try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    init_tracing(settings.pretty_logs);

    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, ServerConfig::new(bind_addr))?.await
}
