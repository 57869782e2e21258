//! Domain layer: models, repository ports, and domain errors.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{RotaError, RotaResult};
