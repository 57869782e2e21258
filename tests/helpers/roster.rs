use rotaguard::adapters::sqlite::SqliteOfficerRepository;
use rotaguard::{Officer, OfficerRepository, OfficerRole, Team};

/// The standard test roster: one sergeant, two dedicated officers,
/// three regulars on team 1 and five on team 2. Names are chosen so
/// that name-ascending order matches the intended positions.
pub struct StandardRoster {
    pub sergeant: Officer,
    pub dedicated: Vec<Officer>,
    pub team_one: Vec<Officer>,
    pub team_two: Vec<Officer>,
}

pub async fn seed_standard_roster(repo: &SqliteOfficerRepository) -> StandardRoster {
    let sergeant = Officer::new("Marlowe", OfficerRole::Sergeant, None);

    let dedicated = vec![
        Officer::new("Devi", OfficerRole::Dedicated, None),
        Officer::new("Ekwueme", OfficerRole::Dedicated, None),
    ];

    let team_one = vec![
        Officer::new("Archer", OfficerRole::Regular, Some(Team::One)),
        Officer::new("Bennett", OfficerRole::Regular, Some(Team::One)),
        Officer::new("Cole", OfficerRole::Regular, Some(Team::One)),
    ];

    let team_two = vec![
        Officer::new("Pryce", OfficerRole::Regular, Some(Team::Two)),
        Officer::new("Quinn", OfficerRole::Regular, Some(Team::Two)),
        Officer::new("Ramsey", OfficerRole::Regular, Some(Team::Two)),
        Officer::new("Sutton", OfficerRole::Regular, Some(Team::Two)),
        Officer::new("Tate", OfficerRole::Regular, Some(Team::Two)),
    ];

    for officer in std::iter::once(&sergeant)
        .chain(&dedicated)
        .chain(&team_one)
        .chain(&team_two)
    {
        repo.create(officer).await.expect("failed to seed officer");
    }

    StandardRoster { sergeant, dedicated, team_one, team_two }
}
