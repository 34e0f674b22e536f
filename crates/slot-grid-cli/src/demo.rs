//! Scripted walkthrough of the allocator, printed to stdout.

use anyhow::Result;
use slot_grid::{ScheduleSummary, SlotGrid};

use crate::script::format_start;

fn heading(title: &str) {
    println!("{}", title);
    println!("{}", "-".repeat(title.len()));
}

/// Period 2: only [25,30) free. Period 3: [15,41) reserved.
/// Period 4: [0,5) and [30,44) reserved.
fn appointment_scenario() -> Result<SlotGrid> {
    let mut grid = SlotGrid::new();
    grid.reserve_block(2, 0, 25)?;
    grid.reserve_block(2, 30, 30)?;
    grid.reserve_block(3, 15, 26)?;
    grid.reserve_block(4, 0, 5)?;
    grid.reserve_block(4, 30, 14)?;
    Ok(grid)
}

pub fn run() -> Result<()> {
    println!("=== SLOT GRID DEMO ===");
    println!("8 periods, 60 minutes each\n");

    let mut grid = SlotGrid::new();

    heading("1. Construction");
    println!("period 1, minute 0 free: {}", grid.is_minute_free(1, 0)?);
    println!("period 8, minute 59 free: {}", grid.is_minute_free(8, 59)?);
    println!();

    heading("2. Reservations");
    grid.reserve_block(2, 0, 10)?;
    grid.reserve_block(2, 15, 15)?;
    grid.reserve_block(2, 45, 5)?;
    grid.reserve_block(3, 15, 26)?;
    grid.reserve_block(4, 0, 5)?;
    grid.reserve_block(4, 30, 14)?;
    println!("period 2: minutes 0-9, 15-29, 45-49 reserved");
    println!("period 3: minutes 15-40 reserved");
    println!("period 4: minutes 0-4, 30-43 reserved");
    println!();

    heading("3. find_free_block");
    for (duration, expected) in [(15, "30"), (9, "30"), (20, "-1"), (5, "10")] {
        println!(
            "find_free_block(2, {}) -> {} (expected {})",
            duration,
            format_start(grid.find_free_block(2, duration)),
            expected
        );
    }
    println!();

    heading("4. make_appointment");
    for (start_period, end_period, duration, expected) in
        [(2, 4, 22, true), (3, 4, 3, true), (2, 4, 30, false)]
    {
        let mut grid = appointment_scenario()?;
        let booked = grid.book(start_period, end_period, duration);
        let placement = booked
            .map(|b| format!(", period {} minutes {}-{}", b.period, b.start, b.end() - 1))
            .unwrap_or_default();
        println!(
            "make_appointment({}, {}, {}) -> {} (expected {}){}",
            start_period,
            end_period,
            duration,
            booked.is_some(),
            expected,
            placement
        );
    }
    println!();

    heading("5. Edge cases");
    let mut grid = SlotGrid::new();
    println!(
        "find_free_block(1, 60) -> {} (full period)",
        format_start(grid.find_free_block(1, 60))
    );
    println!(
        "find_free_block(8, 1) -> {} (minimum duration)",
        format_start(grid.find_free_block(8, 1))
    );
    println!(
        "make_appointment(1, 8, 45) -> {} (across all periods)",
        grid.make_appointment(1, 8, 45)
    );
    println!(
        "make_appointment(5, 5, 30) -> {} (single period)",
        grid.make_appointment(5, 5, 30)
    );
    for (period, duration, note) in [
        (0, 10, "invalid period"),
        (9, 10, "invalid period"),
        (5, 0, "invalid duration"),
        (5, 61, "invalid duration"),
    ] {
        println!(
            "find_free_block({}, {}) -> {} ({})",
            period,
            duration,
            format_start(grid.find_free_block(period, duration)),
            note
        );
    }
    println!(
        "make_appointment(5, 2, 10) -> {} (start after end)",
        grid.make_appointment(5, 2, 10)
    );
    match grid.is_minute_free(0, 10) {
        Ok(free) => println!("is_minute_free(0, 10) -> {}", free),
        Err(err) => println!("is_minute_free(0, 10) -> error: {}", err),
    }
    println!();

    heading("6. Schedule");
    let mut grid = SlotGrid::new();
    for (start_period, end_period, duration) in [(1, 2, 20), (3, 4, 15), (5, 6, 30), (7, 8, 10)] {
        match grid.book(start_period, end_period, duration) {
            Some(b) => println!(
                "make_appointment({}, {}, {}) -> true, period {} minutes {}-{}",
                start_period,
                end_period,
                duration,
                b.period,
                b.start,
                b.end() - 1
            ),
            None => println!(
                "make_appointment({}, {}, {}) -> false",
                start_period, end_period, duration
            ),
        }
    }
    println!();
    println!("{}", ScheduleSummary::of(&grid));

    println!("=== DEMO COMPLETE ===");
    Ok(())
}
