pub mod buildings;
pub mod common;
pub mod errors;
pub mod map;

pub use errors::{ApplicationError, Result};
