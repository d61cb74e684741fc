use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

use crate::siri::VALIDITY_WINDOW_SECS;

/// Direction of travel relative to the line definition.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    Inbound,
    #[default]
    Outbound,
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inbound => f.write_str("INBOUND"),
            Self::Outbound => f.write_str("OUTBOUND"),
        }
    }
}

/// SIRI occupancy levels reported by the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Occupancy {
    SeatsAvailable,
    StandingAvailable,
    Full,
}

impl Display for Occupancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SeatsAvailable => f.write_str("seatsAvailable"),
            Self::StandingAvailable => f.write_str("standingAvailable"),
            Self::Full => f.write_str("full"),
        }
    }
}

/// A single point-in-time position report for one vehicle.
///
/// Records are snapshots: produced for one render cycle, never mutated.
/// Optional fields that are `None` are omitted from the rendered feed
/// entirely rather than emitted empty.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct VehiclePosition {
    pub vehicle_ref: String,
    pub line_ref: String,
    pub published_line_name: String,
    pub direction: Direction,
    pub operator_ref: String,
    pub origin_ref: String,
    pub origin_name: String,
    pub destination_ref: String,
    pub destination_name: Option<String>,
    pub origin_aimed_departure_time: Option<DateTime<Utc>>,
    pub destination_aimed_arrival_time: Option<DateTime<Utc>>,
    pub longitude: f64,
    pub latitude: f64,
    pub bearing: f64,
    pub velocity: Option<f64>,
    pub occupancy: Option<Occupancy>,
    pub block_ref: String,
    pub vehicle_journey_ref: String,
    pub recorded_at_time: DateTime<Utc>,
}

impl VehiclePosition {
    /// When this report expires. Always the capture time plus the fixed
    /// validity window, never set independently.
    pub fn valid_until_time(&self) -> DateTime<Utc> {
        self.recorded_at_time + Duration::seconds(VALIDITY_WINDOW_SECS)
    }
}

/// One row of the route seed data the fleet runs on.
///
/// The column layout doubles as the CSV header for seed files loaded with
/// [`Fleet::from_csv_path`](crate::fleet::Fleet::from_csv_path).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Route {
    pub line_ref: String,
    pub published_line_name: String,
    pub direction: Direction,
    pub operator_ref: String,
    pub origin_ref: String,
    pub origin_name: String,
    pub destination_ref: String,
    pub destination_name: String,
    pub origin_departure: String,
    pub destination_arrival: String,
}
