//! Repository port for officer roster persistence.
//!
//! Ordering contract: every method returning a list yields officers in
//! ascending name order. Positional scheduling rules (the dedicated
//! pair, the Sunday day-team split) depend on this order being stable
//! across runs, so it is part of the port contract rather than an
//! incidental storage detail.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RotaResult;
use crate::domain::models::officer::{Officer, OfficerRole, Team};

/// Filter for listing officers.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfficerFilter {
    pub role: Option<OfficerRole>,
    pub team: Option<Team>,
}

#[async_trait]
pub trait OfficerRepository: Send + Sync {
    /// Create a new officer. Fails with `DuplicateOfficerName` if the
    /// name is already taken.
    async fn create(&self, officer: &Officer) -> RotaResult<()>;

    /// Get an officer by ID.
    async fn get(&self, id: Uuid) -> RotaResult<Option<Officer>>;

    /// Get an officer by name (the roster identity).
    async fn get_by_name(&self, name: &str) -> RotaResult<Option<Officer>>;

    /// Update an existing officer.
    async fn update(&self, officer: &Officer) -> RotaResult<()>;

    /// Delete an officer by ID.
    async fn delete(&self, id: Uuid) -> RotaResult<()>;

    /// List officers matching the filter, ascending by name.
    async fn list(&self, filter: OfficerFilter) -> RotaResult<Vec<Officer>>;

    /// All officers with the given role, ascending by name.
    async fn find_by_role(&self, role: OfficerRole) -> RotaResult<Vec<Officer>>;

    /// All officers with the given role on the given team, ascending by name.
    async fn find_by_role_and_team(&self, role: OfficerRole, team: Team) -> RotaResult<Vec<Officer>>;
}
