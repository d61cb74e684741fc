//! Core of the bodsfeed service: the vehicle position model, query
//! filtering and the SIRI-VM / check-status XML renderers consumed by the
//! HTTP server in `crates/server`.

pub mod fleet;
pub mod shared;
pub mod siri;

pub mod prelude {
    pub use crate::fleet::{Fleet, FleetConfig, VehiclePosition, VehicleQuery};
    pub use crate::siri::{ServiceStatus, SiriConfig};
}
