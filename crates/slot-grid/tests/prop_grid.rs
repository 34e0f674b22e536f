//! Property-based tests for the slot grid using proptest.
//!
//! Each test replays a random sequence of reservations and checks an invariant
//! that must hold for any schedule, not just the hand-written scenarios.

use proptest::prelude::*;
use slot_grid::SlotGrid;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// A reservation `(period, start, duration)` that always fits.
fn arb_reservation() -> impl Strategy<Value = (u32, u32, u32)> {
    (1u32..=8, 0u32..60).prop_flat_map(|(period, start)| {
        (Just(period), Just(start), 1u32..=(60 - start))
    })
}

fn arb_grid() -> impl Strategy<Value = SlotGrid> {
    prop::collection::vec(arb_reservation(), 0..12).prop_map(|reservations| {
        let mut grid = SlotGrid::new();
        for (period, start, duration) in reservations {
            grid.reserve_block(period, start, duration).unwrap();
        }
        grid
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Minute-by-minute scan used as the reference for the earliest fit.
fn naive_find(grid: &SlotGrid, period: u32, duration: u32) -> Option<u32> {
    (0..=60 - duration).find(|&start| {
        (start..start + duration).all(|m| grid.is_minute_free(period, m).unwrap())
    })
}

fn snapshot(grid: &SlotGrid) -> Vec<bool> {
    (1..=8)
        .flat_map(|p| (0..60).map(move |m| (p, m)))
        .map(|(p, m)| grid.is_minute_free(p, m).unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn find_matches_naive_scan(grid in arb_grid(), period in 1u32..=8, duration in 1u32..=60) {
        prop_assert_eq!(grid.find_free_block(period, duration), naive_find(&grid, period, duration));
    }

    #[test]
    fn reservation_never_frees_a_minute(grid in arb_grid(), (period, start, duration) in arb_reservation()) {
        let before = snapshot(&grid);
        let mut after_grid = grid.clone();
        after_grid.reserve_block(period, start, duration).unwrap();
        let after = snapshot(&after_grid);

        for (was, now) in before.iter().zip(&after) {
            prop_assert!(*was || !*now, "a reserved minute became free");
        }
        for m in start..start + duration {
            prop_assert!(!after_grid.is_minute_free(period, m).unwrap());
        }
    }

    #[test]
    fn reservation_is_idempotent(grid in arb_grid(), (period, start, duration) in arb_reservation()) {
        let mut once = grid.clone();
        once.reserve_block(period, start, duration).unwrap();
        let mut twice = once.clone();
        twice.reserve_block(period, start, duration).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn appointment_reserves_first_fit_or_nothing(
        grid in arb_grid(),
        start_period in 1u32..=8,
        span in 0u32..8,
        duration in 1u32..=60,
    ) {
        let end_period = (start_period + span).min(8);
        let expected = (start_period..=end_period)
            .find_map(|p| naive_find(&grid, p, duration).map(|s| (p, s)));

        let mut booked = grid.clone();
        let ok = booked.make_appointment(start_period, end_period, duration);
        prop_assert_eq!(ok, expected.is_some());

        match expected {
            Some((period, start)) => {
                let mut reference = grid.clone();
                reference.reserve_block(period, start, duration).unwrap();
                prop_assert_eq!(booked, reference);
            }
            None => prop_assert_eq!(booked, grid),
        }
    }

    #[test]
    fn free_runs_cover_free_minutes(grid in arb_grid(), period in 1u32..=8) {
        let runs = grid.free_runs(period);
        let total: u32 = runs.iter().map(|b| b.duration).sum();
        prop_assert_eq!(Some(total), grid.free_minutes(period));
        for pair in runs.windows(2) {
            prop_assert!(pair[0].end() < pair[1].start, "runs must be separated by a reserved minute");
        }
    }
}
