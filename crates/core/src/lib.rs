#![forbid(unsafe_code)]

pub mod catalog;
pub mod enrollment;
pub mod model;
pub mod stats;
pub mod time;

pub use catalog::Catalog;
pub use time::Clock;
