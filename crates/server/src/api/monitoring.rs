use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use bodsfeed::fleet::VehicleQuery;
use bodsfeed::siri::{render_check_status, render_vehicle_monitoring};
use chrono::Utc;
use std::{collections::HashMap, sync::Arc};
use tracing::{error, info};

pub async fn check_status(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    info!("Check status request received");
    let xml = render_check_status(&state.status).map_err(|err| {
        error!("Failed to render check status: {err}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(xml_response(xml))
}

pub async fn vehicle_monitoring(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let max_vehicles = match params.get("MaximumNumberOfVehicles") {
        Some(value) => match value.parse() {
            Ok(value) => Some(value),
            Err(_) => return Err(StatusCode::BAD_REQUEST),
        },
        None => None,
    };
    let query = VehicleQuery {
        line_ref: params.get("LineRef").cloned(),
        operator_ref: params.get("OperatorRef").cloned(),
        vehicle_ref: params.get("VehicleRef").cloned(),
        max_vehicles,
    };

    let now = Utc::now();
    let vehicles = query.apply(&state.fleet.positions(now));
    info!("Returning data for {} vehicles", vehicles.len());
    let xml = render_vehicle_monitoring(&vehicles, now, &state.siri).map_err(|err| {
        error!("Failed to render vehicle monitoring: {err}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(xml_response(xml))
}

fn xml_response(xml: String) -> Response {
    ([(header::CONTENT_TYPE, "text/xml; charset=utf-8")], xml).into_response()
}
