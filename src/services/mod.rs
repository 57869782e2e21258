//! Service layer: roster resolution, rotation tracking, and weekly
//! schedule generation.

pub mod roster_resolver;
pub mod rota_service;
pub mod rotation_tracker;
pub mod schedule_generator;

pub use roster_resolver::ResolvedRoster;
pub use rota_service::{GeneratedWeek, RotaService};
pub use rotation_tracker::{RotationTracker, TeamAssignment};
