mod health;
mod service_info;

pub use health::*;
pub use service_info::*;
