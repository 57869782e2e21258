//! Rotaguard - Security Officer Rota Manager
//!
//! Rotaguard generates weekly duty rotas for a fixed roster of security
//! officers. Two regular teams alternate day and night shifts from week
//! to week, a sergeant and a dedicated pair follow fixed individual
//! schedules, and the night team rotates two officers at a time through
//! rest days.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Models, repository ports, and domain errors
//! - **Service Layer** (`services`): Roster resolution, rotation tracking,
//!   and weekly schedule generation
//! - **Adapters** (`adapters`): SQLite implementations of the repository ports
//! - **Infrastructure Layer** (`infrastructure`): Configuration loading
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use rotaguard::adapters::sqlite::{initialize_database, SqliteOfficerRepository, SqliteRotationRepository};
//! use rotaguard::services::RotaService;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let pool = initialize_database("sqlite:.rotaguard/rotaguard.db").await?;
//!     let service = RotaService::new(
//!         Arc::new(SqliteOfficerRepository::new(pool.clone())),
//!         Arc::new(SqliteRotationRepository::new(pool)),
//!     );
//!     let week = service.generate_week("2025-03-02".parse()?).await?;
//!     println!("{} records", week.records.len());
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{RotaError, RotaResult};
pub use domain::models::{
    Config, DutyRecord, DutyStatus, Officer, OfficerRole, ShiftKind, Team, WeekRotation,
};
pub use domain::ports::{DutyFilter, OfficerFilter, OfficerRepository, RotationRepository};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{GeneratedWeek, RotaService, RotationTracker, TeamAssignment};
