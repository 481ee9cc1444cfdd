// Ranking tests; pure computation, no database involved

use fittrack_backend::services::leaderboard_service::{LeaderboardService, UserTotals};
use uuid::Uuid;

fn totals(user: u128, team: Option<u128>, activities: i32, calories: i32) -> UserTotals {
    UserTotals {
        user_id: Uuid::from_u128(user),
        team_id: team.map(Uuid::from_u128),
        total_activities: activities,
        total_calories: calories,
    }
}

#[test]
fn empty_input_yields_empty_leaderboard() {
    let ranked = LeaderboardService::rank_totals(vec![]);
    assert!(ranked.is_empty());
}

#[test]
fn ranks_are_contiguous_and_ordered_by_calories() {
    let ranked = LeaderboardService::rank_totals(vec![
        totals(1, Some(10), 3, 700),
        totals(2, Some(10), 5, 1500),
        totals(3, Some(11), 1, 100),
        totals(4, None, 0, 0),
    ]);

    assert_eq!(ranked.len(), 4);
    let ranks: Vec<i32> = ranked.iter().map(|e| e.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3, 4]);

    for pair in ranked.windows(2) {
        assert!(pair[0].total_calories >= pair[1].total_calories);
    }
    assert_eq!(ranked[0].user_id, Uuid::from_u128(2));
    assert_eq!(ranked[3].user_id, Uuid::from_u128(4));
}

#[test]
fn points_mirror_calories() {
    let ranked = LeaderboardService::rank_totals(vec![
        totals(1, None, 5, 1500),
        totals(2, None, 2, 450),
    ]);
    for entry in &ranked {
        assert_eq!(entry.total_points, entry.total_calories);
    }
}

#[test]
fn equal_totals_break_ties_by_user_id() {
    let ranked = LeaderboardService::rank_totals(vec![
        totals(7, None, 5, 1500),
        totals(3, None, 5, 1500),
        totals(5, None, 5, 1500),
    ]);

    let order: Vec<Uuid> = ranked.iter().map(|e| e.user_id).collect();
    assert_eq!(
        order,
        vec![Uuid::from_u128(3), Uuid::from_u128(5), Uuid::from_u128(7)]
    );
    assert_eq!(
        ranked.iter().map(|e| e.rank).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
}

#[test]
fn users_without_activities_rank_last_with_zero_totals() {
    let ranked = LeaderboardService::rank_totals(vec![
        totals(1, Some(10), 0, 0),
        totals(2, Some(10), 5, 1500),
    ]);

    assert_eq!(ranked[1].user_id, Uuid::from_u128(1));
    assert_eq!(ranked[1].total_activities, 0);
    assert_eq!(ranked[1].total_calories, 0);
    assert_eq!(ranked[1].total_points, 0);
}

#[test]
fn team_reference_is_carried_through() {
    let ranked = LeaderboardService::rank_totals(vec![
        totals(1, Some(42), 1, 200),
        totals(2, None, 1, 100),
    ]);
    assert_eq!(ranked[0].team_id, Some(Uuid::from_u128(42)));
    assert_eq!(ranked[1].team_id, None);
}
