use crate::dto::{HealthDto, ServiceInfoDto};
use axum::Json;
use chrono::Utc;

pub async fn root() -> Json<ServiceInfoDto> {
    Json(ServiceInfoDto::current())
}

pub async fn health() -> Json<HealthDto> {
    Json(HealthDto::at(Utc::now()))
}
