use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::shared::xml::ElementBuilder;

mod check_status;
mod vehicle_monitoring;
pub use check_status::*;
pub use vehicle_monitoring::*;

pub const SIRI_NS: &str = "http://www.siri.org.uk/siri";
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
pub const SIRI_SCHEMA_LOCATION: &str =
    "http://www.siri.org.uk/siri http://www.siri.org.uk/schema/2.0/xsd/siri.xsd";
pub const SIRI_VERSION: &str = "2.0";

/// How long a reported position stays valid, in seconds.
pub const VALIDITY_WINDOW_SECS: i64 = 30;

#[derive(Error, Debug)]
pub enum Error {
    #[error("mandatory field {field} is empty on vehicle record {vehicle_ref:?}")]
    MissingField {
        field: &'static str,
        vehicle_ref: String,
    },
    #[error("XML write error: {0}")]
    Xml(#[from] std::io::Error),
}

/// Feed-level settings shared by every rendered document.
pub struct SiriConfig {
    pub producer_ref: String,
}

impl Default for SiriConfig {
    fn default() -> Self {
        Self {
            producer_ref: "MIDLANDBUS".into(),
        }
    }
}

/// Service health as reported by the check-status endpoint.
///
/// `service_started_time` is fixed once at process start and handed in
/// here; nothing in the core reads the clock behind the caller's back.
#[derive(Debug, Clone)]
pub struct ServiceStatus {
    pub status: bool,
    pub service_started_time: DateTime<Utc>,
    pub data_ready: bool,
}

impl ServiceStatus {
    pub fn started_at(service_started_time: DateTime<Utc>) -> Self {
        Self {
            status: true,
            service_started_time,
            data_ready: true,
        }
    }
}

/// The `Siri` document root. The main feed carries the schema location,
/// check-status only declares the namespaces.
fn siri_root(with_schema_location: bool) -> ElementBuilder {
    let builder = crate::shared::xml::Element::builder("Siri")
        .attr("version", SIRI_VERSION)
        .attr("xmlns", SIRI_NS)
        .attr("xmlns:xsi", XSI_NS);
    if with_schema_location {
        builder.attr("xsi:schemaLocation", SIRI_SCHEMA_LOCATION)
    } else {
        builder
    }
}
