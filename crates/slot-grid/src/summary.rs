//! Presentation view of a grid: free-minute counts per 10-minute bucket and
//! the free runs of each period.
//!
//! Nothing in the allocator depends on this module; it exists so drivers and
//! debugging sessions can print a compact picture of a schedule.

use std::fmt;

use serde::Serialize;

use crate::grid::{Block, SlotGrid, FIRST_PERIOD, MINUTES_PER_PERIOD, PERIODS};

/// Width of one bucket in minutes.
pub const BUCKET_MINUTES: u32 = 10;

/// Free minutes within `[first_minute, last_minute]` of a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bucket {
    pub first_minute: u32,
    pub last_minute: u32,
    pub free: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodSummary {
    pub period: u32,
    pub buckets: Vec<Bucket>,
    /// Maximal free runs; not part of the text table.
    pub free_runs: Vec<Block>,
}

/// Bucketed availability for all periods, in period order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleSummary {
    pub periods: Vec<PeriodSummary>,
}

impl ScheduleSummary {
    pub fn of(grid: &SlotGrid) -> Self {
        let periods = (FIRST_PERIOD..FIRST_PERIOD + PERIODS)
            .map(|period| PeriodSummary {
                period,
                buckets: (0..MINUTES_PER_PERIOD)
                    .step_by(BUCKET_MINUTES as usize)
                    .map(|first_minute| {
                        let end = (first_minute + BUCKET_MINUTES).min(MINUTES_PER_PERIOD);
                        Bucket {
                            first_minute,
                            last_minute: end - 1,
                            free: grid.free_in_range(period, first_minute, end),
                        }
                    })
                    .collect(),
                free_runs: grid.free_runs(period),
            })
            .collect();
        Self { periods }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}({}/{})",
            self.first_minute, self.last_minute, self.free, BUCKET_MINUTES
        )
    }
}

impl fmt::Display for ScheduleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current Schedule Status:")?;
        writeln!(f, "Period | Minutes Available")?;
        writeln!(f, "-------|------------------")?;
        for row in &self.periods {
            write!(f, "   {}   |", row.period)?;
            for bucket in &row.buckets {
                write!(f, " {}", bucket)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
