//! Tests for the bucketed schedule summary.

use slot_grid::summary::BUCKET_MINUTES;
use slot_grid::{Block, ScheduleSummary, SlotGrid};

#[test]
fn fresh_grid_has_full_buckets() {
    let summary = ScheduleSummary::of(&SlotGrid::new());
    assert_eq!(summary.periods.len(), 8);
    for (i, row) in summary.periods.iter().enumerate() {
        assert_eq!(row.period, i as u32 + 1);
        assert_eq!(row.buckets.len(), 6);
        assert!(row.buckets.iter().all(|b| b.free == BUCKET_MINUTES));
    }
    let last = summary.periods[0].buckets[5];
    assert_eq!((last.first_minute, last.last_minute), (50, 59));
}

#[test]
fn partial_reservations_split_across_buckets() {
    let mut grid = SlotGrid::new();
    grid.reserve_block(3, 15, 26).unwrap();

    let summary = ScheduleSummary::of(&grid);
    let free: Vec<u32> = summary.periods[2].buckets.iter().map(|b| b.free).collect();
    assert_eq!(free, vec![10, 5, 0, 0, 9, 10]);
}

#[test]
fn display_renders_table() {
    let mut grid = SlotGrid::new();
    grid.reserve_block(1, 0, 20).unwrap();

    let text = ScheduleSummary::of(&grid).to_string();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Current Schedule Status:");
    assert_eq!(lines[1], "Period | Minutes Available");
    assert_eq!(lines[2], "-------|------------------");
    assert_eq!(
        lines[3],
        "   1   | 0-9(0/10) 10-19(0/10) 20-29(10/10) 30-39(10/10) 40-49(10/10) 50-59(10/10)"
    );
    assert_eq!(lines.len(), 11);
}

#[test]
fn summary_serializes_to_json() {
    let summary = ScheduleSummary::of(&SlotGrid::new());
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["periods"][7]["period"], 8);
    assert_eq!(json["periods"][7]["buckets"][0]["free"], 10);
}

#[test]
fn summary_lists_free_runs_per_period() {
    let mut grid = SlotGrid::new();
    grid.reserve_block(3, 15, 26).unwrap();
    grid.reserve_block(5, 0, 60).unwrap();

    let summary = ScheduleSummary::of(&grid);
    assert_eq!(
        summary.periods[2].free_runs,
        vec![
            Block { period: 3, start: 0, duration: 15 },
            Block { period: 3, start: 41, duration: 19 },
        ]
    );
    assert!(summary.periods[4].free_runs.is_empty());
    assert_eq!(summary.periods[0].free_runs.len(), 1);

    // The text table is unaffected.
    assert!(!summary.to_string().contains("free_runs"));
}
