use chrono::{DateTime, NaiveTime, Utc};
use std::{fs::File, io, path::Path};
use thiserror::Error;
use tracing::info;

mod query;
mod record;
pub use query::*;
pub use record::*;

use crate::shared::time::parse_clock_time;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Route {0} has bad clock time {1}, expected HH:MM")]
    BadClockTime(String, String),
    #[error("Route seed is empty")]
    NoRoutes,
}

pub struct FleetConfig {
    /// Prefix for generated vehicle refs, `<prefix>_1000` upwards.
    pub vehicle_prefix: String,
    pub vehicle_count: usize,
    pub block_count: usize,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            vehicle_prefix: "MIDL".into(),
            vehicle_count: 10,
            block_count: 3,
        }
    }
}

/// Anchor positions the simulated vehicles drift around.
const ANCHORS: [(f64, f64, f64); 7] = [
    (52.4786, -1.8945, 45.0),  // Birmingham
    (52.4855, -1.9020, 90.0),  // New Street
    (52.4920, -1.9180, 135.0), // Handsworth
    (52.5010, -1.9350, 180.0), // Smethwick
    (52.5100, -1.9520, 225.0), // West Bromwich
    (52.5180, -1.9700, 270.0), // Dudley
    (52.5250, -1.9880, 315.0), // Walsall
];

struct VehicleSeed {
    vehicle_ref: String,
    block_ref: String,
    route: Route,
    departure: NaiveTime,
    arrival: NaiveTime,
    anchor_latitude: f64,
    anchor_longitude: f64,
    anchor_bearing: f64,
}

/// Sample data provider: a fixed set of vehicles whose positions are
/// derived from the clock, so every render cycle sees one consistent
/// snapshot without any stored mutable state.
pub struct Fleet {
    vehicles: Vec<VehicleSeed>,
}

impl Fleet {
    /// Build a fleet on the default Midland route seed.
    pub fn new(config: &FleetConfig) -> Self {
        Self::with_routes(config, default_routes()).expect("default route seed is valid")
    }

    /// Build a fleet from explicit route rows. Clock times are validated
    /// up front so `positions` never fails.
    pub fn with_routes(config: &FleetConfig, routes: Vec<Route>) -> Result<Self, Error> {
        if routes.is_empty() {
            return Err(Error::NoRoutes);
        }
        let block_count = config.block_count.max(1);
        let mut vehicles = Vec::with_capacity(config.vehicle_count);
        for index in 0..config.vehicle_count {
            let route = routes[index % routes.len()].clone();
            let departure = parse_route_time(&route, &route.origin_departure)?;
            let arrival = parse_route_time(&route, &route.destination_arrival)?;
            let (anchor_latitude, anchor_longitude, anchor_bearing) =
                ANCHORS[index % ANCHORS.len()];
            vehicles.push(VehicleSeed {
                vehicle_ref: format!("{}_{}", config.vehicle_prefix, 1000 + index),
                block_ref: format!("BLOCK_{}", index % block_count + 1),
                route,
                departure,
                arrival,
                anchor_latitude,
                anchor_longitude,
                anchor_bearing,
            });
        }
        Ok(Self { vehicles })
    }

    /// Build a fleet from a CSV seed file with the [`Route`] column
    /// layout.
    pub fn from_csv_path<P: AsRef<Path>>(config: &FleetConfig, path: P) -> Result<Self, Error> {
        let file = File::open(path)?;
        let mut reader = csv::Reader::from_reader(file);
        let mut routes = Vec::new();
        for row in reader.deserialize() {
            let route: Route = row?;
            routes.push(route);
        }
        info!("Loaded {} routes from seed file", routes.len());
        Self::with_routes(config, routes)
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    /// Current positions of every active vehicle. Pure in `now`: the
    /// same instant always yields the same snapshot.
    pub fn positions(&self, now: DateTime<Utc>) -> Vec<VehiclePosition> {
        let today = now.date_naive();
        let tick = now.timestamp();
        self.vehicles
            .iter()
            .enumerate()
            .map(|(index, seed)| {
                let salt = index as i64;
                let latitude = seed.anchor_latitude + drift(tick, salt * 5 + 1) * 0.001;
                let longitude = seed.anchor_longitude + drift(tick, salt * 5 + 2) * 0.001;
                let bearing =
                    round1(seed.anchor_bearing + drift(tick, salt * 5 + 3) * 10.0).rem_euclid(360.0);
                let velocity = (drift(tick, salt * 5 + 4) + 1.0) * 12.5;
                let occupancy = match (tick / 60 + salt).rem_euclid(4) {
                    0 => Some(Occupancy::SeatsAvailable),
                    1 => Some(Occupancy::StandingAvailable),
                    2 => Some(Occupancy::Full),
                    _ => None,
                };
                VehiclePosition {
                    vehicle_ref: seed.vehicle_ref.clone(),
                    line_ref: seed.route.line_ref.clone(),
                    published_line_name: seed.route.published_line_name.clone(),
                    direction: seed.route.direction,
                    operator_ref: seed.route.operator_ref.clone(),
                    origin_ref: seed.route.origin_ref.clone(),
                    origin_name: seed.route.origin_name.clone(),
                    destination_ref: seed.route.destination_ref.clone(),
                    destination_name: Some(seed.route.destination_name.clone()),
                    origin_aimed_departure_time: Some(today.and_time(seed.departure).and_utc()),
                    destination_aimed_arrival_time: Some(today.and_time(seed.arrival).and_utc()),
                    longitude: round4(longitude),
                    latitude: round4(latitude),
                    bearing,
                    velocity: Some(round1(velocity)),
                    occupancy,
                    block_ref: seed.block_ref.clone(),
                    vehicle_journey_ref: format!(
                        "JOURNEY_{}_{}",
                        seed.vehicle_ref,
                        today.format("%Y%m%d")
                    ),
                    recorded_at_time: now,
                }
            })
            .collect()
    }
}

fn parse_route_time(route: &Route, time: &str) -> Result<NaiveTime, Error> {
    parse_clock_time(time)
        .ok_or_else(|| Error::BadClockTime(route.line_ref.clone(), time.to_string()))
}

/// Deterministic stand-in for jitter: a value in [-1, 1] that changes
/// every few seconds and differs per salt.
fn drift(tick: i64, salt: i64) -> f64 {
    let hash = (tick / 5)
        .wrapping_mul(6364136223846793005)
        .wrapping_add(salt.wrapping_mul(1442695040888963407));
    ((hash.rem_euclid(2001)) - 1000) as f64 / 1000.0
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

fn default_routes() -> Vec<Route> {
    vec![
        Route {
            line_ref: "1".into(),
            published_line_name: "1 - Birmingham to Dudley".into(),
            direction: Direction::Outbound,
            operator_ref: "MIDL".into(),
            origin_ref: "430003002".into(),
            origin_name: "Birmingham Moor Street".into(),
            destination_ref: "430008001".into(),
            destination_name: "Dudley Bus Station".into(),
            origin_departure: "08:00".into(),
            destination_arrival: "09:30".into(),
        },
        Route {
            line_ref: "45".into(),
            published_line_name: "45 - Walsall to Birmingham".into(),
            direction: Direction::Inbound,
            operator_ref: "MIDL".into(),
            origin_ref: "430007001".into(),
            origin_name: "Walsall Bus Station".into(),
            destination_ref: "430003002".into(),
            destination_name: "Birmingham Moor Street".into(),
            origin_departure: "07:30".into(),
            destination_arrival: "09:00".into(),
        },
        Route {
            line_ref: "47".into(),
            published_line_name: "47 - West Bromwich to Birmingham".into(),
            direction: Direction::Outbound,
            operator_ref: "MIDL".into(),
            origin_ref: "430009001".into(),
            origin_name: "West Bromwich Bus Station".into(),
            destination_ref: "430003002".into(),
            destination_name: "Birmingham Moor Street".into(),
            origin_departure: "08:15".into(),
            destination_arrival: "09:45".into(),
        },
    ]
}
