use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
    pub timestamp: String,
    pub service: String,
    pub version: String,
}

impl HealthDto {
    pub fn at(timestamp: DateTime<Utc>) -> Self {
        Self {
            status: "healthy".into(),
            timestamp: timestamp.to_rfc3339(),
            service: "BODS API".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}
