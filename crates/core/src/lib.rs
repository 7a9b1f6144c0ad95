#![forbid(unsafe_code)]

pub mod algo;
pub mod error;
pub mod model;
pub mod time;

pub use error::Error;
pub use time::Clock;
