//! Repository ports (storage traits) for the Rotaguard system.

pub mod officer_repository;
pub mod rotation_repository;

pub use officer_repository::{OfficerFilter, OfficerRepository};
pub use rotation_repository::{DutyFilter, RotationRepository};
