//! Line-oriented scripts for driving a grid from a file or stdin.
//!
//! ```text
//! # comment
//! reserve 2 0 10
//! find 2 15
//! appoint 2 4 22
//! free 4 5
//! show
//! ```

use std::io::Write;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use serde::Serialize;
use slot_grid::{Block, ScheduleSummary, SlotGrid};
use tracing::debug;

/// One parsed script line.
///
/// `find` and `appoint` accept any integer: values outside the grid are an
/// ordinary "nothing found" for them, so they are carried as `i64` and only
/// narrowed when executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Free { period: u32, minute: u32 },
    Reserve { period: u32, start: u32, duration: u32 },
    Find { period: i64, duration: i64 },
    Appoint { start_period: i64, end_period: i64, duration: i64 },
    Show,
}

/// Result of executing one command.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Outcome {
    Free { free: bool },
    Reserve,
    Find { start: Option<u32> },
    Appoint { ok: bool, block: Option<Block> },
    Show(ScheduleSummary),
}

/// Render a search result the way callers of the original API expect it:
/// the start minute, or `-1` when nothing was found.
pub fn format_start(start: Option<u32>) -> String {
    start.map_or_else(|| "-1".to_string(), |s| s.to_string())
}

impl Outcome {
    fn to_text(&self) -> String {
        match self {
            Outcome::Free { free } => free.to_string(),
            Outcome::Reserve => "ok".to_string(),
            Outcome::Find { start } => format_start(*start),
            Outcome::Appoint { ok, .. } => ok.to_string(),
            Outcome::Show(summary) => summary.to_string().trim_end().to_string(),
        }
    }
}

fn parse_args<T, const N: usize>(op: &str, args: &[&str], expected: &str) -> Result<[T; N]>
where
    T: FromStr + Default + Copy,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    if args.len() != N {
        bail!("'{}' takes {} arguments, got {}", op, N, args.len());
    }
    let mut out = [T::default(); N];
    for (slot, raw) in out.iter_mut().zip(args) {
        *slot = raw
            .parse()
            .with_context(|| format!("'{}' is not {}", raw, expected))?;
    }
    Ok(out)
}

fn numbers<const N: usize>(op: &str, args: &[&str]) -> Result<[u32; N]> {
    parse_args(op, args, "a non-negative integer")
}

fn integers<const N: usize>(op: &str, args: &[&str]) -> Result<[i64; N]> {
    parse_args(op, args, "an integer")
}

/// Narrow lenient arguments to the grid's type. `None` when any value is
/// negative or too large, which no valid period, minute or duration can be.
fn narrow<const N: usize>(values: [i64; N]) -> Option<[u32; N]> {
    let mut out = [0u32; N];
    for (slot, value) in out.iter_mut().zip(values) {
        *slot = u32::try_from(value).ok()?;
    }
    Some(out)
}

/// Parse one line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Command>> {
    let line = line.split('#').next().unwrap_or_default().trim();
    let mut words = line.split_whitespace();
    let Some(op) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let command = match op {
        "free" => {
            let [period, minute] = numbers(op, &args)?;
            Command::Free { period, minute }
        }
        "reserve" => {
            let [period, start, duration] = numbers(op, &args)?;
            Command::Reserve {
                period,
                start,
                duration,
            }
        }
        "find" => {
            let [period, duration] = integers(op, &args)?;
            Command::Find { period, duration }
        }
        "appoint" => {
            let [start_period, end_period, duration] = integers(op, &args)?;
            Command::Appoint {
                start_period,
                end_period,
                duration,
            }
        }
        "show" => {
            numbers::<0>(op, &args)?;
            Command::Show
        }
        other => bail!(
            "Unknown command: '{}'. Available commands: free, reserve, find, appoint, show",
            other
        ),
    };
    Ok(Some(command))
}

/// Apply a command to the grid. Contract violations from `free` and `reserve`
/// surface as errors; `find` and `appoint` never fail.
pub fn execute(grid: &mut SlotGrid, command: Command) -> Result<Outcome> {
    let outcome = match command {
        Command::Free { period, minute } => Outcome::Free {
            free: grid.is_minute_free(period, minute)?,
        },
        Command::Reserve {
            period,
            start,
            duration,
        } => {
            grid.reserve_block(period, start, duration)?;
            Outcome::Reserve
        }
        Command::Find { period, duration } => Outcome::Find {
            start: narrow([period, duration])
                .and_then(|[period, duration]| grid.find_free_block(period, duration)),
        },
        Command::Appoint {
            start_period,
            end_period,
            duration,
        } => {
            let block = narrow([start_period, end_period, duration]).and_then(
                |[start_period, end_period, duration]| {
                    grid.book(start_period, end_period, duration)
                },
            );
            Outcome::Appoint {
                ok: block.is_some(),
                block,
            }
        }
        Command::Show => Outcome::Show(ScheduleSummary::of(grid)),
    };
    Ok(outcome)
}

/// Run every line of `source` against a fresh grid, writing one result per
/// command to `out`. Stops at the first failing line.
pub fn run<W: Write>(source: &str, json: bool, out: &mut W) -> Result<SlotGrid> {
    let mut grid = SlotGrid::new();

    for (index, line) in source.lines().enumerate() {
        let line_no = index + 1;
        let Some(command) =
            parse_line(line).with_context(|| format!("Script error on line {}", line_no))?
        else {
            continue;
        };
        debug!(line = line_no, ?command, "executing");

        let outcome = execute(&mut grid, command)
            .with_context(|| format!("Script error on line {}", line_no))?;

        if json {
            serde_json::to_writer(&mut *out, &outcome)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", outcome.to_text())?;
        }
    }

    Ok(grid)
}
