//! Officer domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Role of a security officer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfficerRole {
    /// Single supervising officer with a fixed day-shift pattern.
    Sergeant,
    /// One of a fixed pair with individually tailored day-only schedules.
    Dedicated,
    /// Member of one of the two rotating teams.
    Regular,
}

impl OfficerRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sergeant => "sergeant",
            Self::Dedicated => "dedicated",
            Self::Regular => "regular",
        }
    }
}

impl fmt::Display for OfficerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OfficerRole {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sergeant" => Ok(Self::Sergeant),
            "dedicated" => Ok(Self::Dedicated),
            "regular" => Ok(Self::Regular),
            _ => Err(anyhow::anyhow!("Invalid officer role: {s}")),
        }
    }
}

/// One of the two rotating regular teams.
///
/// Serialized as the bare team number (1 or 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Team {
    One,
    Two,
}

impl Team {
    /// The other team. Week N+1 days = opposite of week N days.
    pub fn opposite(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    pub fn as_i64(self) -> i64 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

impl From<Team> for i64 {
    fn from(team: Team) -> Self {
        team.as_i64()
    }
}

impl TryFrom<i64> for Team {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            other => Err(format!("Invalid team number: {other}. Must be 1 or 2")),
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i64())
    }
}

impl FromStr for Team {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s.parse().map_err(|_| anyhow::anyhow!("Invalid team number: {s}"))?;
        Self::try_from(value).map_err(|e| anyhow::anyhow!(e))
    }
}

/// A security officer on the roster.
///
/// `name` is the officer's identity and is unique across the roster.
/// `team` is only meaningful for [`OfficerRole::Regular`] officers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Officer {
    pub id: Uuid,
    pub name: String,
    pub role: OfficerRole,
    pub team: Option<Team>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Officer {
    pub fn new(name: impl Into<String>, role: OfficerRole, team: Option<Team>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            role,
            team,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check roster-entry consistency: a non-empty name, and a team
    /// assignment exactly when the role rotates.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Officer name cannot be empty".to_string());
        }
        match self.role {
            OfficerRole::Regular if self.team.is_none() => {
                Err(format!("Regular officer '{}' must be assigned to team 1 or 2", self.name))
            }
            OfficerRole::Sergeant | OfficerRole::Dedicated if self.team.is_some() => {
                Err(format!("Officer '{}' with role {} does not belong to a rotating team", self.name, self.role))
            }
            _ => Ok(()),
        }
    }
}
