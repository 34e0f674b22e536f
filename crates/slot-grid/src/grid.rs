//! The slot grid: availability for eight periods of sixty minutes each.
//!
//! Each period is stored as a 64-bit mask where bit `m` is set while minute `m`
//! is free. Reservations clear bits and nothing ever sets them again, so the
//! free set of every period only shrinks over the lifetime of a grid.

use serde::Serialize;
use tracing::debug;

use crate::error::{Result, SlotError};

/// Number of periods in a day.
pub const PERIODS: u32 = 8;
/// Periods are numbered from 1.
pub const FIRST_PERIOD: u32 = 1;
/// Minutes in each period, numbered `0..MINUTES_PER_PERIOD`.
pub const MINUTES_PER_PERIOD: u32 = 60;

const ALL_FREE: u64 = (1u64 << MINUTES_PER_PERIOD) - 1;

/// A contiguous run of minutes inside one period: `[start, start + duration)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Block {
    pub period: u32,
    pub start: u32,
    pub duration: u32,
}

impl Block {
    /// First minute after the block (exclusive end).
    pub fn end(&self) -> u32 {
        self.start + self.duration
    }
}

/// Availability state for one schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotGrid {
    free: [u64; PERIODS as usize],
}

impl Default for SlotGrid {
    fn default() -> Self {
        Self::new()
    }
}

fn valid_period(period: u32) -> bool {
    (FIRST_PERIOD..FIRST_PERIOD + PERIODS).contains(&period)
}

fn valid_duration(duration: u32) -> bool {
    (1..=MINUTES_PER_PERIOD).contains(&duration)
}

/// Bit mask covering `[start, start + duration)`. Callers guarantee the run
/// fits in a period.
fn run_mask(start: u32, duration: u32) -> u64 {
    ((1u64 << duration) - 1) << start
}

impl SlotGrid {
    /// A grid with every minute of every period free.
    pub fn new() -> Self {
        Self {
            free: [ALL_FREE; PERIODS as usize],
        }
    }

    fn row(&self, period: u32) -> u64 {
        self.free[(period - FIRST_PERIOD) as usize]
    }

    /// Whether `minute` of `period` is still free.
    ///
    /// Fails with [`SlotError::InvalidArgument`] unless `1 <= period <= 8` and
    /// `minute <= 59`.
    pub fn is_minute_free(&self, period: u32, minute: u32) -> Result<bool> {
        if !valid_period(period) || minute >= MINUTES_PER_PERIOD {
            return Err(SlotError::InvalidArgument(format!(
                "is_minute_free: period {} minute {} is outside the grid",
                period, minute
            )));
        }
        Ok(self.row(period) & (1u64 << minute) != 0)
    }

    /// Mark `[start, start + duration)` of `period` as reserved.
    ///
    /// The range is overwritten unconditionally: minutes that are already
    /// reserved stay reserved and no overlap check is made. Only
    /// [`make_appointment`](Self::make_appointment) guarantees a block that
    /// does not collide with earlier reservations.
    ///
    /// Fails with [`SlotError::InvalidArgument`] unless the period is in
    /// `1..=8`, `start <= 59`, `1 <= duration <= 60` and the block ends at or
    /// before minute 60.
    pub fn reserve_block(&mut self, period: u32, start: u32, duration: u32) -> Result<()> {
        if !valid_period(period)
            || start >= MINUTES_PER_PERIOD
            || !valid_duration(duration)
            || start + duration > MINUTES_PER_PERIOD
        {
            return Err(SlotError::InvalidArgument(format!(
                "reserve_block: period {} start {} duration {} does not fit in the grid",
                period, start, duration
            )));
        }
        self.clear(Block {
            period,
            start,
            duration,
        });
        Ok(())
    }

    fn clear(&mut self, block: Block) {
        self.free[(block.period - FIRST_PERIOD) as usize] &= !run_mask(block.start, block.duration);
        debug!(
            period = block.period,
            start = block.start,
            duration = block.duration,
            "reserved block"
        );
    }

    /// Earliest start minute in `period` from which `duration` consecutive
    /// minutes are all free.
    ///
    /// Returns `None` when no such run exists, and also when `period` or
    /// `duration` is out of range.
    pub fn find_free_block(&self, period: u32, duration: u32) -> Option<u32> {
        if !valid_period(period) || !valid_duration(duration) {
            return None;
        }
        let row = self.row(period);
        (0..=MINUTES_PER_PERIOD - duration).find(|&start| {
            let mask = run_mask(start, duration);
            row & mask == mask
        })
    }

    /// Reserve the first free run of `duration` minutes found while scanning
    /// periods `start_period..=end_period` in order, and return it.
    ///
    /// Only the first period with room is used. Returns `None` without
    /// touching the grid when no period in the range has room or when the
    /// arguments are out of range (including `start_period > end_period`).
    pub fn book(&mut self, start_period: u32, end_period: u32, duration: u32) -> Option<Block> {
        if !valid_period(start_period)
            || !valid_period(end_period)
            || start_period > end_period
            || !valid_duration(duration)
        {
            return None;
        }

        let block = (start_period..=end_period).find_map(|period| {
            self.find_free_block(period, duration).map(|start| Block {
                period,
                start,
                duration,
            })
        });

        match block {
            Some(block) => self.clear(block),
            None => debug!(
                start_period,
                end_period, duration, "no free block in period range"
            ),
        }
        block
    }

    /// Same search as [`book`](Self::book), reporting only whether a block was
    /// reserved.
    pub fn make_appointment(&mut self, start_period: u32, end_period: u32, duration: u32) -> bool {
        self.book(start_period, end_period, duration).is_some()
    }

    /// Number of free minutes left in `period`, or `None` for an invalid period.
    pub fn free_minutes(&self, period: u32) -> Option<u32> {
        valid_period(period).then(|| self.row(period).count_ones())
    }

    /// Free minutes in `[start, end)` of a valid period. `end` is clamped to
    /// the period length.
    pub(crate) fn free_in_range(&self, period: u32, start: u32, end: u32) -> u32 {
        let end = end.min(MINUTES_PER_PERIOD);
        if start >= end {
            return 0;
        }
        (self.row(period) & run_mask(start, end - start)).count_ones()
    }

    /// Maximal runs of free minutes in `period`, in ascending order.
    ///
    /// Empty for an invalid period or a fully reserved one.
    pub fn free_runs(&self, period: u32) -> Vec<Block> {
        if !valid_period(period) {
            return Vec::new();
        }
        let row = self.row(period);
        let mut runs = Vec::new();
        let mut run_start: Option<u32> = None;

        for minute in 0..=MINUTES_PER_PERIOD {
            let free = minute < MINUTES_PER_PERIOD && row & (1u64 << minute) != 0;
            match (free, run_start) {
                (true, None) => run_start = Some(minute),
                (false, Some(start)) => {
                    runs.push(Block {
                        period,
                        start,
                        duration: minute - start,
                    });
                    run_start = None;
                }
                _ => {}
            }
        }
        runs
    }
}
