mod helpers;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use rotaguard::adapters::sqlite::{SqliteOfficerRepository, SqliteRotationRepository};
use rotaguard::domain::ports::rotation_repository::DutyFilter;
use rotaguard::{
    DutyRecord, DutyStatus, Officer, OfficerRepository, OfficerRole, RotaError, RotaService,
    ShiftKind, Team,
};
use sqlx::SqlitePool;
use uuid::Uuid;

use helpers::database::{setup_test_db, teardown_test_db};
use helpers::roster::{seed_standard_roster, StandardRoster};

fn sunday() -> NaiveDate {
    // 2025-03-02 is a Sunday
    NaiveDate::from_ymd_opt(2025, 3, 2).unwrap()
}

fn build_service(
    pool: &SqlitePool,
) -> (RotaService<SqliteOfficerRepository, SqliteRotationRepository>, SqliteOfficerRepository) {
    let officer_repo = SqliteOfficerRepository::new(pool.clone());
    let rotation_repo = SqliteRotationRepository::new(pool.clone());
    let service = RotaService::new(Arc::new(officer_repo.clone()), Arc::new(rotation_repo));
    (service, officer_repo)
}

/// Index generated records by officer and date for easy lookup.
fn duty_map(records: &[DutyRecord]) -> HashMap<(Uuid, NaiveDate), (ShiftKind, DutyStatus)> {
    records
        .iter()
        .map(|r| ((r.officer_id, r.date), (r.shift, r.status)))
        .collect()
}

fn status_of(
    map: &HashMap<(Uuid, NaiveDate), (ShiftKind, DutyStatus)>,
    officer: &Officer,
    date: NaiveDate,
) -> (ShiftKind, DutyStatus) {
    *map.get(&(officer.id, date))
        .unwrap_or_else(|| panic!("no record for {} on {date}", officer.name))
}

#[tokio::test]
async fn test_first_week_defaults_to_team_one_days() {
    let pool = setup_test_db().await;
    let (service, officer_repo) = build_service(&pool);
    seed_standard_roster(&officer_repo).await;

    let week = service.generate_week(sunday()).await.expect("failed to generate");

    assert_eq!(week.rotation.day_shift_team, Team::One);
    assert_eq!(week.rotation.night_shift_team(), Team::Two);

    // 11 scheduled officers x 7 days.
    assert_eq!(week.records.len(), 77);

    // Monday: 1 sergeant + 2 dedicated + 3 day team + 5 night team.
    let monday = sunday() + chrono::Duration::days(1);
    let monday_records: Vec<_> = week.records.iter().filter(|r| r.date == monday).collect();
    assert_eq!(monday_records.len(), 11);

    let night_off = monday_records
        .iter()
        .filter(|r| r.shift == ShiftKind::Night && r.status == DutyStatus::OffDuty)
        .count();
    assert_eq!(night_off, 2);

    teardown_test_db(pool).await;
}

#[tokio::test]
async fn test_day_team_alternates_each_week() {
    let pool = setup_test_db().await;
    let (service, officer_repo) = build_service(&pool);
    seed_standard_roster(&officer_repo).await;

    let week1 = service.generate_week(sunday()).await.expect("week 1");
    let week2 = service
        .generate_week(sunday() + chrono::Duration::days(7))
        .await
        .expect("week 2");
    let week3 = service
        .generate_week(sunday() + chrono::Duration::days(14))
        .await
        .expect("week 3");

    assert_eq!(week1.rotation.day_shift_team, Team::One);
    assert_eq!(week2.rotation.day_shift_team, Team::Two);
    assert_eq!(week3.rotation.day_shift_team, Team::One);

    teardown_test_db(pool).await;
}

#[tokio::test]
async fn test_duplicate_week_rejected_without_new_records() {
    let pool = setup_test_db().await;
    let (service, officer_repo) = build_service(&pool);
    seed_standard_roster(&officer_repo).await;

    service.generate_week(sunday()).await.expect("first generation");

    let before = service
        .duties(DutyFilter { week_start: Some(sunday()), ..Default::default() })
        .await
        .expect("failed to list")
        .len();

    let result = service.generate_week(sunday()).await;
    match result {
        Err(RotaError::WeekAlreadyExists(week)) => assert_eq!(week, sunday()),
        other => panic!("expected WeekAlreadyExists, got {other:?}"),
    }

    let after = service
        .duties(DutyFilter { week_start: Some(sunday()), ..Default::default() })
        .await
        .expect("failed to list")
        .len();
    assert_eq!(before, after, "second attempt must not add records");

    teardown_test_db(pool).await;
}

#[tokio::test]
async fn test_rejects_non_sunday_week_start() {
    let pool = setup_test_db().await;
    let (service, officer_repo) = build_service(&pool);
    seed_standard_roster(&officer_repo).await;

    let monday = sunday() + chrono::Duration::days(1);
    let result = service.generate_week(monday).await;

    assert!(matches!(result, Err(RotaError::InvalidWeekStart(_))));

    // Nothing was written.
    let duties = service.duties(DutyFilter::default()).await.expect("failed to list");
    assert!(duties.is_empty());

    teardown_test_db(pool).await;
}

#[tokio::test]
async fn test_resolve_rotation() {
    let pool = setup_test_db().await;
    let (service, officer_repo) = build_service(&pool);
    seed_standard_roster(&officer_repo).await;

    let result = service.resolve_rotation(sunday()).await;
    assert!(matches!(result, Err(RotaError::RotationNotFound(_))));

    service.generate_week(sunday()).await.expect("failed to generate");

    let rotation = service.resolve_rotation(sunday()).await.expect("rotation should exist");
    assert_eq!(rotation.week_start, sunday());
    assert_eq!(rotation.day_shift_team, Team::One);

    teardown_test_db(pool).await;
}

#[tokio::test]
async fn test_sergeant_and_dedicated_patterns() {
    let pool = setup_test_db().await;
    let (service, officer_repo) = build_service(&pool);
    let roster: StandardRoster = seed_standard_roster(&officer_repo).await;

    let week = service.generate_week(sunday()).await.expect("failed to generate");
    let map = duty_map(&week.records);

    for offset in 0..7 {
        let date = sunday() + chrono::Duration::days(offset);

        // Sergeant: day shift all week, off Saturday only.
        let (shift, status) = status_of(&map, &roster.sergeant, date);
        assert_eq!(shift, ShiftKind::Day);
        assert_eq!(status, if offset == 6 { DutyStatus::OffDuty } else { DutyStatus::OnDuty });

        // Dedicated pair: Devi rests Sunday, Ekwueme rests Saturday.
        let (shift, status) = status_of(&map, &roster.dedicated[0], date);
        assert_eq!(shift, ShiftKind::Day);
        assert_eq!(status, if offset == 0 { DutyStatus::OffDuty } else { DutyStatus::OnDuty });

        let (shift, status) = status_of(&map, &roster.dedicated[1], date);
        assert_eq!(shift, ShiftKind::Day);
        assert_eq!(status, if offset == 6 { DutyStatus::OffDuty } else { DutyStatus::OnDuty });
    }

    teardown_test_db(pool).await;
}

#[tokio::test]
async fn test_transition_days() {
    let pool = setup_test_db().await;
    let (service, officer_repo) = build_service(&pool);
    let roster = seed_standard_roster(&officer_repo).await;

    let week = service.generate_week(sunday()).await.expect("failed to generate");
    let map = duty_map(&week.records);

    // Sunday: only the first two day-team officers (by name) work.
    for (position, officer) in roster.team_one.iter().enumerate() {
        let (shift, status) = status_of(&map, officer, sunday());
        assert_eq!(shift, ShiftKind::Day);
        let expected = if position < 2 { DutyStatus::OnDuty } else { DutyStatus::OffDuty };
        assert_eq!(status, expected, "day team position {position}");
    }
    for officer in &roster.team_two {
        let (shift, status) = status_of(&map, officer, sunday());
        assert_eq!(shift, ShiftKind::Night);
        assert_eq!(status, DutyStatus::OnDuty);
    }

    // Saturday: everyone on both shifts.
    let saturday = sunday() + chrono::Duration::days(6);
    for officer in roster.team_one.iter().chain(&roster.team_two) {
        let (_, status) = status_of(&map, officer, saturday);
        assert_eq!(status, DutyStatus::OnDuty);
    }

    teardown_test_db(pool).await;
}

#[tokio::test]
async fn test_night_rest_rotation_cycles_through_team() {
    let pool = setup_test_db().await;
    let (service, officer_repo) = build_service(&pool);
    let roster = seed_standard_roster(&officer_repo).await;

    let week = service.generate_week(sunday()).await.expect("failed to generate");
    let map = duty_map(&week.records);

    // Night team positions by name: Pryce(0) Quinn(1) Ramsey(2) Sutton(3) Tate(4).
    // Expected rest pairs Monday-Thursday, then full strength Friday.
    let expected_off: [&[usize]; 5] = [&[0, 1], &[2, 3], &[4, 0], &[1, 2], &[]];

    for (day_index, off_positions) in expected_off.iter().enumerate() {
        let date = sunday() + chrono::Duration::days(day_index as i64 + 1);
        for (position, officer) in roster.team_two.iter().enumerate() {
            let (shift, status) = status_of(&map, officer, date);
            assert_eq!(shift, ShiftKind::Night);
            let expected = if off_positions.contains(&position) {
                DutyStatus::OffDuty
            } else {
                DutyStatus::OnDuty
            };
            assert_eq!(status, expected, "day_index {day_index} position {position}");
        }
    }

    teardown_test_db(pool).await;
}

#[tokio::test]
async fn test_second_week_swaps_rest_rotation_to_other_team() {
    let pool = setup_test_db().await;
    let (service, officer_repo) = build_service(&pool);
    let roster = seed_standard_roster(&officer_repo).await;

    service.generate_week(sunday()).await.expect("week 1");
    let week2 = service
        .generate_week(sunday() + chrono::Duration::days(7))
        .await
        .expect("week 2");
    let map = duty_map(&week2.records);

    // Week 2: team two works days, team one (3 officers) works nights.
    // Monday rest window over 3 positions is {0, 1}: Archer and Bennett.
    let monday = sunday() + chrono::Duration::days(8);
    let expected = [DutyStatus::OffDuty, DutyStatus::OffDuty, DutyStatus::OnDuty];
    for (officer, want) in roster.team_one.iter().zip(expected) {
        let (shift, status) = status_of(&map, officer, monday);
        assert_eq!(shift, ShiftKind::Night);
        assert_eq!(status, want, "{}", officer.name);
    }

    for officer in &roster.team_two {
        let (shift, status) = status_of(&map, officer, monday);
        assert_eq!(shift, ShiftKind::Day);
        assert_eq!(status, DutyStatus::OnDuty);
    }

    teardown_test_db(pool).await;
}

#[tokio::test]
async fn test_generates_without_special_roles() {
    let pool = setup_test_db().await;
    let (service, officer_repo) = build_service(&pool);

    // Regulars only: no sergeant, no dedicated pair.
    for (name, team) in [("Archer", Team::One), ("Bennett", Team::One), ("Pryce", Team::Two)] {
        let officer = Officer::new(name, OfficerRole::Regular, Some(team));
        officer_repo.create(&officer).await.expect("failed to seed officer");
    }

    let week = service.generate_week(sunday()).await.expect("failed to generate");

    // 3 officers x 7 days, nothing for the absent roles.
    assert_eq!(week.records.len(), 21);

    teardown_test_db(pool).await;
}

#[tokio::test]
async fn test_returned_records_match_persisted() {
    let pool = setup_test_db().await;
    let (service, officer_repo) = build_service(&pool);
    seed_standard_roster(&officer_repo).await;

    let week = service.generate_week(sunday()).await.expect("failed to generate");

    let stored = service
        .duties(DutyFilter { week_start: Some(sunday()), ..Default::default() })
        .await
        .expect("failed to list");

    assert_eq!(stored.len(), week.records.len());

    let returned = duty_map(&week.records);
    let persisted = duty_map(&stored);
    assert_eq!(returned, persisted);

    teardown_test_db(pool).await;
}
