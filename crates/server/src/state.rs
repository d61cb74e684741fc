use bodsfeed::prelude::*;
use chrono::Utc;

pub struct AppState {
    pub fleet: Fleet,
    pub siri: SiriConfig,
    pub status: ServiceStatus,
}

impl AppState {
    /// Capture the process start time once; check-status reports it for
    /// the whole lifetime of the service.
    pub fn new(fleet: Fleet) -> Self {
        Self {
            fleet,
            siri: SiriConfig::default(),
            status: ServiceStatus::started_at(Utc::now()),
        }
    }
}
