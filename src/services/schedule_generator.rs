//! Weekly duty generation: one record per officer per day.
//!
//! The week runs Sunday through Saturday. Sunday and Saturday are
//! transition days where the two teams overlap to hand off coverage;
//! Monday through Thursday the night team rotates two officers at a
//! time through a rest window.

use chrono::NaiveDate;

use crate::domain::models::duty_record::{DutyRecord, DutyStatus, ShiftKind};
use crate::services::roster_resolver::ResolvedRoster;

/// Day offsets within the week. Offset 0 is the week start (Sunday).
const SUNDAY: i64 = 0;
const SATURDAY: i64 = 6;

/// Whether the night-team officer at `position` rests on the weekday at
/// `day_index` (0 = Monday .. 3 = Thursday).
///
/// The rest window is the circular interval
/// `[(day_index * 2) % k, (day_index * 2 + 2) % k)` over the team
/// positions. For `k > 2` that is exactly two officers per day,
/// advancing by two each day so the window cycles through the whole
/// team; for `k <= 2` the wraparound covers every position.
fn rests_tonight(position: usize, day_index: usize, team_size: usize) -> bool {
    if team_size == 0 {
        return false;
    }
    let off_start = (day_index * 2) % team_size;
    let off_end = (off_start + 2) % team_size;
    if off_start < off_end {
        position >= off_start && position < off_end
    } else {
        position >= off_start || position < off_end
    }
}

/// Generate the full seven-day batch of duty records for the week
/// starting at `week_start` (a Sunday; validated by the caller).
pub fn generate(week_start: NaiveDate, roster: &ResolvedRoster) -> Vec<DutyRecord> {
    let mut records = Vec::new();

    for day_offset in 0..7 {
        let date = week_start + chrono::Duration::days(day_offset);

        // Sergeant: day shift Sunday-Friday, off Saturday.
        if let Some(sergeant) = &roster.sergeant {
            let status = if day_offset == SATURDAY { DutyStatus::OffDuty } else { DutyStatus::OnDuty };
            records.push(DutyRecord::new(sergeant.id, date, ShiftKind::Day, status));
        }

        // First dedicated officer: day shift Monday-Saturday, off Sunday.
        if let Some(first) = roster.dedicated.first() {
            let status = if day_offset == SUNDAY { DutyStatus::OffDuty } else { DutyStatus::OnDuty };
            records.push(DutyRecord::new(first.id, date, ShiftKind::Day, status));
        }

        // Second dedicated officer: day shift Sunday-Friday, off Saturday.
        if let Some(second) = roster.dedicated.get(1) {
            let status = if day_offset == SATURDAY { DutyStatus::OffDuty } else { DutyStatus::OnDuty };
            records.push(DutyRecord::new(second.id, date, ShiftKind::Day, status));
        }

        match day_offset {
            SUNDAY => {
                // Only the first two day-team officers cover the day
                // shift; the rest are rostered off after the previous
                // week's closing stint.
                for (position, officer) in roster.day_team.iter().enumerate() {
                    let status = if position < 2 { DutyStatus::OnDuty } else { DutyStatus::OffDuty };
                    records.push(DutyRecord::new(officer.id, date, ShiftKind::Day, status));
                }
                for officer in &roster.night_team {
                    records.push(DutyRecord::new(officer.id, date, ShiftKind::Night, DutyStatus::OnDuty));
                }
            }
            SATURDAY => {
                // Transition day: full strength on both shifts ahead of
                // the next week's swap.
                for officer in &roster.day_team {
                    records.push(DutyRecord::new(officer.id, date, ShiftKind::Day, DutyStatus::OnDuty));
                }
                for officer in &roster.night_team {
                    records.push(DutyRecord::new(officer.id, date, ShiftKind::Night, DutyStatus::OnDuty));
                }
            }
            _ => {
                // Monday-Friday: day team at full strength, night team
                // rotating rest Monday-Thursday.
                for officer in &roster.day_team {
                    records.push(DutyRecord::new(officer.id, date, ShiftKind::Day, DutyStatus::OnDuty));
                }

                let day_index = (day_offset - 1) as usize;
                for (position, officer) in roster.night_team.iter().enumerate() {
                    let resting = day_index < 4 && rests_tonight(position, day_index, roster.night_team.len());
                    let status = if resting { DutyStatus::OffDuty } else { DutyStatus::OnDuty };
                    records.push(DutyRecord::new(officer.id, date, ShiftKind::Night, status));
                }
            }
        }
    }

    records
}
