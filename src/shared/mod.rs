pub mod time;
pub mod xml;

pub use time::*;
