mod api;
mod dto;
mod state;

use crate::state::AppState;
use axum::routing::get;
use bodsfeed::prelude::*;
use std::sync::Arc;
use tracing::{error, info};

const PORT: u32 = 3002;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    info!("Starting server...");
    let config = FleetConfig::default();
    let args: Vec<_> = std::env::args().collect();
    let fleet = if let Some(path) = args.get(1) {
        match Fleet::from_csv_path(&config, path) {
            Ok(fleet) => fleet,
            Err(err) => {
                error!("Failed to load route seed {path}: {err}");
                std::process::exit(1);
            }
        }
    } else {
        Fleet::new(&config)
    };
    info!("Serving {} vehicles", fleet.vehicle_count());

    let state = Arc::new(AppState::new(fleet));

    let app = axum::Router::new()
        .route("/", get(api::root))
        .route("/health", get(api::health))
        .route("/check-status", get(api::check_status))
        .route("/vehicle-monitoring", get(api::vehicle_monitoring))
        .with_state(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", PORT))
        .await
        .unwrap();
    info!("Listening to port {PORT}");
    axum::serve(listener, app).await.unwrap();
}
