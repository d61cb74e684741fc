mod monitoring;
mod service;

pub use monitoring::*;
pub use service::*;
