use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfoDto {
    pub service: String,
    pub version: String,
    pub standard: String,
    pub description: String,
    pub endpoints: BTreeMap<String, String>,
}

impl ServiceInfoDto {
    pub fn current() -> Self {
        let endpoints = BTreeMap::from([
            ("check-status".to_string(), "/check-status".to_string()),
            (
                "vehicle-monitoring".to_string(),
                "/vehicle-monitoring".to_string(),
            ),
            ("health".to_string(), "/health".to_string()),
        ]);
        Self {
            service: "Midland Bus BODS API".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            standard: "SIRI-VM 2.0".into(),
            description: "Real-time vehicle monitoring data for Midland Bus services".into(),
            endpoints,
        }
    }
}
