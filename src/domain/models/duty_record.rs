//! Duty record domain model: one officer, one date, one shift.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Day or night shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftKind {
    Day,
    Night,
}

impl ShiftKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "day" => Some(Self::Day),
            "night" => Some(Self::Night),
            _ => None,
        }
    }
}

impl fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether the officer actually works the shift or is rostered off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DutyStatus {
    OnDuty,
    OffDuty,
}

impl DutyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnDuty => "on_duty",
            Self::OffDuty => "off_duty",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "on_duty" => Some(Self::OnDuty),
            "off_duty" => Some(Self::OffDuty),
            _ => None,
        }
    }

    pub fn is_on_duty(&self) -> bool {
        matches!(self, Self::OnDuty)
    }
}

impl fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A duty assignment for an officer on a specific calendar date.
///
/// Generation produces one logical record per officer per date; records
/// are not deduplicated across repeated generation of overlapping
/// ranges, since a week can only be generated once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DutyRecord {
    pub id: Uuid,
    pub officer_id: Uuid,
    pub date: NaiveDate,
    pub shift: ShiftKind,
    pub status: DutyStatus,
    pub created_at: DateTime<Utc>,
}

impl DutyRecord {
    pub fn new(officer_id: Uuid, date: NaiveDate, shift: ShiftKind, status: DutyStatus) -> Self {
        Self {
            id: Uuid::new_v4(),
            officer_id,
            date,
            shift,
            status,
            created_at: Utc::now(),
        }
    }
}
