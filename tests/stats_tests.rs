mod common;

use common::{add_flight, date};
use dronelog::core::del::DeleteLogic;
use dronelog::core::report::{render_overall, render_totals};
use dronelog::core::stats::StatsLogic;
use dronelog::db::pool::DbPool;
use dronelog::db::stats::totals_by;
use dronelog::models::{GroupBy, GroupTotal};

fn seeded_pool() -> DbPool {
    let mut pool = DbPool::in_memory().unwrap();
    add_flight(&mut pool, "2025-06-02", "10:00", "11:30", "Joao Scotti", "DJI Mini 2");
    add_flight(&mut pool, "2025-06-10", "09:00", "10:00", "Arnold Hoyer", "DJI Mini 2");
    add_flight(&mut pool, "2025-07-01", "14:00", "14:45", "Joao Scotti", "DJI Mavic 3 Enterprise");
    add_flight(&mut pool, "2025-07-03", "07:10", "07:30", "Michael Lloyd", "DJI Mini 3 - Manchester");
    pool
}

fn sum(totals: &[GroupTotal]) -> f64 {
    totals.iter().map(|t| t.hours).sum()
}

#[test]
fn test_totals_by_pilot() {
    let pool = seeded_pool();
    let totals = totals_by(&pool.conn, GroupBy::Pilot, &None).unwrap();

    assert_eq!(
        totals,
        vec![
            GroupTotal {
                key: "Arnold Hoyer".to_string(),
                hours: 1.0,
                flights: 1
            },
            GroupTotal {
                key: "Joao Scotti".to_string(),
                hours: 2.25,
                flights: 2
            },
            GroupTotal {
                key: "Michael Lloyd".to_string(),
                hours: 0.33,
                flights: 1
            },
        ]
    );
}

#[test]
fn test_totals_by_drone() {
    let pool = seeded_pool();
    let totals = totals_by(&pool.conn, GroupBy::Drone, &None).unwrap();

    let keys: Vec<&str> = totals.iter().map(|t| t.key.as_str()).collect();
    assert_eq!(
        keys,
        vec!["DJI Mavic 3 Enterprise", "DJI Mini 2", "DJI Mini 3 - Manchester"]
    );

    let mini2 = &totals[1];
    assert_eq!(mini2.hours, 2.5);
    assert_eq!(mini2.flights, 2);
}

#[test]
fn test_groupings_partition_the_same_total() {
    let pool = seeded_pool();
    let stats = StatsLogic::compute(&pool, None).unwrap();

    assert_eq!(stats.total_flights, 4);
    assert!((stats.total_hours - 3.58).abs() < 1e-9);
    assert!((sum(&stats.by_pilot) - stats.total_hours).abs() < 1e-9);
    assert!((sum(&stats.by_drone) - stats.total_hours).abs() < 1e-9);

    let pilot_flights: i64 = stats.by_pilot.iter().map(|t| t.flights).sum();
    let drone_flights: i64 = stats.by_drone.iter().map(|t| t.flights).sum();
    assert_eq!(pilot_flights, 4);
    assert_eq!(drone_flights, 4);
}

#[test]
fn test_delete_decreases_totals() {
    let mut pool = seeded_pool();
    let before = StatsLogic::compute(&pool, None).unwrap();

    let removed = DeleteLogic::apply(&mut pool, 1).unwrap();
    assert_eq!(removed.duration, 1.5);

    let after = StatsLogic::compute(&pool, None).unwrap();
    assert_eq!(after.total_flights, before.total_flights - 1);
    assert!((before.total_hours - after.total_hours - removed.duration).abs() < 1e-9);

    let joao = after
        .by_pilot
        .iter()
        .find(|t| t.key == "Joao Scotti")
        .unwrap();
    assert_eq!(joao.hours, 0.75);
    assert_eq!(joao.flights, 1);
}

#[test]
fn test_stats_with_range() {
    let pool = seeded_pool();
    let july = Some((date("2025-07-01"), date("2025-07-31")));
    let stats = StatsLogic::compute(&pool, july).unwrap();

    assert_eq!(stats.total_flights, 2);
    assert!((stats.total_hours - 1.08).abs() < 1e-9);
    assert!(stats.by_pilot.iter().all(|t| t.key != "Arnold Hoyer"));
}

#[test]
fn test_empty_store_has_no_groups() {
    let pool = DbPool::in_memory().unwrap();
    let stats = StatsLogic::compute(&pool, None).unwrap();

    assert!(stats.is_empty());
    assert!(stats.by_pilot.is_empty());
    assert!(stats.by_drone.is_empty());
    assert_eq!(stats.total_hours, 0.0);
}

#[test]
fn test_render_totals_table() {
    let pool = seeded_pool();
    let stats = StatsLogic::compute(&pool, None).unwrap();

    let table = render_totals(GroupBy::Pilot, &stats.by_pilot, '-');
    let plain = dronelog::utils::table::strip_ansi(&table);

    assert!(plain.starts_with("Pilot"));
    assert!(plain.contains("Joao Scotti"));
    assert!(plain.contains("2.25"));
    assert!(plain.contains("02h 15m"));

    assert_eq!(render_overall(&stats), "Total: 4 flights, 3.58 h (03h 35m)");
}
