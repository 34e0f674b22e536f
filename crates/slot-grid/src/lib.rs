//! # slot-grid
//!
//! Minute-granular slot allocator for a single resource.
//!
//! A day is split into eight fixed periods, numbered 1 through 8, and each
//! period into sixty one-minute slots numbered 0 through 59. Every slot starts
//! free and can only ever move to reserved; there is no release operation.
//!
//! ## Quick start
//!
//! ```rust
//! use slot_grid::SlotGrid;
//!
//! let mut grid = SlotGrid::new();
//! grid.reserve_block(2, 0, 10).unwrap();
//!
//! assert_eq!(grid.find_free_block(2, 15), Some(10));
//! assert!(grid.make_appointment(2, 4, 15));
//! assert!(!grid.is_minute_free(2, 24).unwrap());
//! ```
//!
//! ## Error policy
//!
//! Two policies coexist. [`SlotGrid::is_minute_free`] and
//! [`SlotGrid::reserve_block`] treat out-of-range arguments as a broken
//! contract and return [`SlotError::InvalidArgument`]. [`SlotGrid::find_free_block`]
//! and [`SlotGrid::make_appointment`] fold bad input into their ordinary
//! "nothing found" result (`None` / `false`).
//!
//! ## Modules
//!
//! - [`grid`] — `SlotGrid` state, reservation and earliest-fit search
//! - [`summary`] — Per-period free-minute counts in 10-minute buckets, for display
//! - [`error`] — Error types

pub mod error;
pub mod grid;
pub mod summary;

pub use error::SlotError;
pub use grid::{Block, SlotGrid, FIRST_PERIOD, MINUTES_PER_PERIOD, PERIODS};
pub use summary::ScheduleSummary;
