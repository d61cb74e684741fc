use crate::shared::time::format_timestamp;
use crate::shared::xml::{self, Element};
use crate::siri::{Error, ServiceStatus, siri_root};

/// Render the BODS check-status document.
///
/// `ServiceStartedTime` reports the instant the process came up, carried
/// in the status value, not the current clock.
pub fn render_check_status(status: &ServiceStatus) -> Result<String, Error> {
    let response = Element::builder("CheckStatusResponse")
        .append(Element::leaf("Status", bool_text(status.status)))
        .append(Element::leaf(
            "ServiceStartedTime",
            format_timestamp(status.service_started_time),
        ))
        .append(Element::leaf("DataReady", bool_text(status.data_ready)))
        .build();
    let root = siri_root(false).append(response).build();
    Ok(xml::write_document(&root)?)
}

fn bool_text(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
