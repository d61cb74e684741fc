use chrono::{DateTime, Duration, Utc};

use crate::fleet::VehiclePosition;
use crate::shared::time::format_timestamp;
use crate::shared::xml::{self, Element};
use crate::siri::{Error, SiriConfig, VALIDITY_WINDOW_SECS, siri_root};

/// Render the SIRI-VM vehicle monitoring document for one request.
///
/// Pure in its inputs: the record list, the response instant and the feed
/// config fully determine the output.
pub fn render_vehicle_monitoring(
    vehicles: &[VehiclePosition],
    now: DateTime<Utc>,
    config: &SiriConfig,
) -> Result<String, Error> {
    let exporter = VehicleMonitoringExporter { config, now };
    let root = exporter.export(vehicles)?;
    Ok(xml::write_document(&root)?)
}

struct VehicleMonitoringExporter<'a> {
    config: &'a SiriConfig,
    now: DateTime<Utc>,
}

impl VehicleMonitoringExporter<'_> {
    fn export(&self, vehicles: &[VehiclePosition]) -> Result<Element, Error> {
        let activities = vehicles
            .iter()
            .map(|vehicle| self.export_activity(vehicle))
            .collect::<Result<Vec<_>, Error>>()?;
        let delivery = Element::builder("VehicleMonitoringDelivery")
            .append(self.export_response_timestamp())
            .append(self.export_producer_ref())
            .append(Element::leaf(
                "ValidUntilTime",
                format_timestamp(self.now + Duration::seconds(VALIDITY_WINDOW_SECS)),
            ))
            .append_all(activities)
            .build();
        let service_delivery = Element::builder("ServiceDelivery")
            .append(self.export_response_timestamp())
            .append(self.export_producer_ref())
            .append(delivery)
            .build();
        Ok(siri_root(true).append(service_delivery).build())
    }

    fn export_response_timestamp(&self) -> Element {
        Element::leaf("ResponseTimestamp", format_timestamp(self.now))
    }

    fn export_producer_ref(&self) -> Element {
        Element::leaf("ProducerRef", self.config.producer_ref.as_str())
    }

    fn export_activity(&self, vehicle: &VehiclePosition) -> Result<Element, Error> {
        validate(vehicle)?;
        Ok(Element::builder("VehicleActivity")
            .append(Element::leaf(
                "RecordedAtTime",
                format_timestamp(vehicle.recorded_at_time),
            ))
            .append(Element::leaf(
                "ValidUntilTime",
                format_timestamp(vehicle.valid_until_time()),
            ))
            .append(Element::leaf("ItemIdentifier", item_identifier(vehicle)))
            .append(Self::export_journey(vehicle))
            .build())
    }

    fn export_journey(vehicle: &VehiclePosition) -> Element {
        Element::builder("MonitoredVehicleJourney")
            .append(Element::leaf("LineRef", vehicle.line_ref.as_str()))
            .append(Element::leaf("DirectionRef", vehicle.direction.to_string()))
            .append(Element::leaf(
                "PublishedLineName",
                vehicle.published_line_name.as_str(),
            ))
            .append(Element::leaf("OperatorRef", vehicle.operator_ref.as_str()))
            .append(Element::leaf("OriginRef", vehicle.origin_ref.as_str()))
            .append(Element::leaf("OriginName", vehicle.origin_name.as_str()))
            .append(Element::leaf(
                "DestinationRef",
                vehicle.destination_ref.as_str(),
            ))
            .append_opt(
                vehicle
                    .destination_name
                    .as_deref()
                    .map(|name| Element::leaf("DestinationName", name)),
            )
            .append_opt(
                vehicle
                    .origin_aimed_departure_time
                    .map(|time| Element::leaf("OriginAimedDepartureTime", format_timestamp(time))),
            )
            .append_opt(vehicle.destination_aimed_arrival_time.map(|time| {
                Element::leaf("DestinationAimedArrivalTime", format_timestamp(time))
            }))
            .append(Self::export_location(vehicle))
            .append(Element::leaf("Bearing", vehicle.bearing.to_string()))
            .append_opt(
                vehicle
                    .velocity
                    .map(|velocity| Element::leaf("Velocity", velocity.to_string())),
            )
            .append_opt(
                vehicle
                    .occupancy
                    .map(|occupancy| Element::leaf("Occupancy", occupancy.to_string())),
            )
            .append(Element::leaf("BlockRef", vehicle.block_ref.as_str()))
            .append(Element::leaf(
                "VehicleJourneyRef",
                vehicle.vehicle_journey_ref.as_str(),
            ))
            .append(Element::leaf("VehicleRef", vehicle.vehicle_ref.as_str()))
            .build()
    }

    fn export_location(vehicle: &VehiclePosition) -> Element {
        Element::builder("VehicleLocation")
            .append(Element::leaf("Longitude", vehicle.longitude.to_string()))
            .append(Element::leaf("Latitude", vehicle.latitude.to_string()))
            .build()
    }
}

/// `{OperatorRef}_{LineRef}_{epoch seconds of RecordedAtTime}` — stable
/// for a given record, unlike a running index.
fn item_identifier(vehicle: &VehiclePosition) -> String {
    format!(
        "{}_{}_{}",
        vehicle.operator_ref,
        vehicle.line_ref,
        vehicle.recorded_at_time.timestamp()
    )
}

/// A record missing a mandatory reference is a provider bug; refuse to
/// render rather than emit a non-compliant document.
fn validate(vehicle: &VehiclePosition) -> Result<(), Error> {
    for (field, value) in [
        ("VehicleRef", &vehicle.vehicle_ref),
        ("LineRef", &vehicle.line_ref),
        ("OperatorRef", &vehicle.operator_ref),
    ] {
        if value.is_empty() {
            return Err(Error::MissingField {
                field,
                vehicle_ref: vehicle.vehicle_ref.clone(),
            });
        }
    }
    Ok(())
}
