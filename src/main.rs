use crate::{
    backend::ReservationBackend, configuration::Configuration,
    configuration_handler::ConfigurationHandler, http::create_app,
    local_reservations::LocalReservations, reservation_service::ReservationService,
};
use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod backend;
mod configuration;
mod configuration_handler;
mod error;
mod http;
mod local_reservations;
mod reservation_service;
mod slot_clock;
#[cfg(test)]
mod testutils;
mod types;

#[derive(Clone)]
struct AppState<T: ReservationBackend> {
    reservation_service: ReservationService<T>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let configuration = ConfigurationHandler::parse_arguments()?;

    let address = format!("0.0.0.0:{}", configuration.port());
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .inspect_err(|err| error!(?err, %address, "Failed to bind listener"))
        .with_context(|| format!("Failed to bind {address}"))?;
    info!(%address, "Settlement booking service listening");

    let backend = LocalReservations::new(configuration.max_bookings());
    let app = create_app(backend, configuration);

    axum::serve(listener, app)
        .await
        .inspect_err(|err| error!(?err, "HTTP server terminated"))
        .context("HTTP server terminated")
}
