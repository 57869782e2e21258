//! Roster resolution: partition the officer list into scheduling groups.
//!
//! Pure lookup over a roster snapshot, no state. Positional rules
//! downstream (the dedicated pair, the Sunday day-team split) use the
//! order the roster is supplied in, which the repository guarantees to
//! be ascending by name.

use tracing::warn;

use crate::domain::models::officer::{Officer, OfficerRole, Team};

/// The roster partitioned into the groups the generator schedules.
#[derive(Debug, Clone)]
pub struct ResolvedRoster {
    /// The single sergeant, if one is on the roster.
    pub sergeant: Option<Officer>,
    /// The dedicated pair, in roster order. At most two.
    pub dedicated: Vec<Officer>,
    /// Regular officers on this week's day team, in roster order.
    pub day_team: Vec<Officer>,
    /// Regular officers on this week's night team, in roster order.
    pub night_team: Vec<Officer>,
}

/// Partition `roster` for a week where `day_shift_team` works days.
///
/// Missing or surplus role members are not errors: the sergeant slot
/// stays empty, dedicated officers beyond the first two are ignored,
/// and generation simply schedules whoever is present. Unexpected
/// cardinality is logged so the degradation is visible.
pub fn resolve(roster: &[Officer], day_shift_team: Team) -> ResolvedRoster {
    let mut sergeant = None;
    let mut dedicated = Vec::new();
    let mut day_team = Vec::new();
    let mut night_team = Vec::new();

    for officer in roster {
        match officer.role {
            OfficerRole::Sergeant => {
                if sergeant.is_none() {
                    sergeant = Some(officer.clone());
                } else {
                    warn!(officer = %officer.name, "extra sergeant on roster, ignoring");
                }
            }
            OfficerRole::Dedicated => {
                if dedicated.len() < 2 {
                    dedicated.push(officer.clone());
                } else {
                    warn!(officer = %officer.name, "more than two dedicated officers on roster, ignoring");
                }
            }
            OfficerRole::Regular => match officer.team {
                Some(team) if team == day_shift_team => day_team.push(officer.clone()),
                Some(_) => night_team.push(officer.clone()),
                None => {
                    warn!(officer = %officer.name, "regular officer without a team, skipping");
                }
            },
        }
    }

    if sergeant.is_none() {
        warn!("no sergeant on roster, sergeant slots will be empty");
    }
    if dedicated.len() != 2 {
        warn!(count = dedicated.len(), "expected two dedicated officers");
    }

    ResolvedRoster { sergeant, dedicated, day_team, night_team }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn officer(name: &str, role: OfficerRole, team: Option<Team>) -> Officer {
        Officer::new(name, role, team)
    }

    fn sample_roster() -> Vec<Officer> {
        vec![
            officer("Adeyemi", OfficerRole::Dedicated, None),
            officer("Brooks", OfficerRole::Sergeant, None),
            officer("Castillo", OfficerRole::Regular, Some(Team::One)),
            officer("Dawson", OfficerRole::Regular, Some(Team::Two)),
            officer("Ellison", OfficerRole::Regular, Some(Team::One)),
            officer("Farrow", OfficerRole::Dedicated, None),
            officer("Grant", OfficerRole::Regular, Some(Team::Two)),
        ]
    }

    #[test]
    fn test_resolve_partitions_by_role_and_team() {
        let resolved = resolve(&sample_roster(), Team::One);

        assert_eq!(resolved.sergeant.as_ref().unwrap().name, "Brooks");
        assert_eq!(resolved.dedicated.len(), 2);
        assert_eq!(resolved.dedicated[0].name, "Adeyemi");
        assert_eq!(resolved.dedicated[1].name, "Farrow");

        let day: Vec<_> = resolved.day_team.iter().map(|o| o.name.as_str()).collect();
        let night: Vec<_> = resolved.night_team.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(day, vec!["Castillo", "Ellison"]);
        assert_eq!(night, vec!["Dawson", "Grant"]);
    }

    #[test]
    fn test_resolve_swapped_teams() {
        let resolved = resolve(&sample_roster(), Team::Two);

        let day: Vec<_> = resolved.day_team.iter().map(|o| o.name.as_str()).collect();
        let night: Vec<_> = resolved.night_team.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(day, vec!["Dawson", "Grant"]);
        assert_eq!(night, vec!["Castillo", "Ellison"]);
    }

    #[test]
    fn test_resolve_missing_roles() {
        let roster = vec![officer("Castillo", OfficerRole::Regular, Some(Team::One))];
        let resolved = resolve(&roster, Team::One);

        assert!(resolved.sergeant.is_none());
        assert!(resolved.dedicated.is_empty());
        assert_eq!(resolved.day_team.len(), 1);
        assert!(resolved.night_team.is_empty());
    }

    #[test]
    fn test_resolve_caps_surplus_members() {
        let roster = vec![
            officer("Brooks", OfficerRole::Sergeant, None),
            officer("Osei", OfficerRole::Sergeant, None),
            officer("Adeyemi", OfficerRole::Dedicated, None),
            officer("Farrow", OfficerRole::Dedicated, None),
            officer("Quinn", OfficerRole::Dedicated, None),
        ];
        let resolved = resolve(&roster, Team::One);

        assert_eq!(resolved.sergeant.as_ref().unwrap().name, "Brooks");
        assert_eq!(resolved.dedicated.len(), 2);
        assert!(resolved.dedicated.iter().all(|o| o.name != "Quinn"));
    }

    #[test]
    fn test_resolve_skips_teamless_regular() {
        let teamless = officer("Dawson", OfficerRole::Regular, None);
        let resolved = resolve(&[teamless], Team::One);

        assert!(resolved.day_team.is_empty());
        assert!(resolved.night_team.is_empty());
    }
}
