pub mod board;
pub mod constructs;
pub mod elements;
pub mod error;
pub mod math;

pub use error::{GeoboardError, Result};
