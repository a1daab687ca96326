//! End-to-end runs: line source → decoder → `DigPlan` → area → sink.
//!
//! The library holds no logger. Results leave through a caller-supplied
//! `ReportSink`, and every malformed line aborts the run.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use crate::dig::{decode_line, DecodeMode, DigPlan};
use crate::error::Error;

/// Run configuration.
#[derive(Clone, Debug, Default)]
pub struct SolveCfg {
    /// Dig plan to read. Required; `solve` fails with `Error::MissingInput` without it.
    pub data: Option<PathBuf>,
    pub mode: DecodeMode,
}

/// Outcome of one run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Report {
    pub mode: DecodeMode,
    /// Lines decoded.
    pub moves: usize,
    pub area: u128,
}

/// Destination for run results.
pub trait ReportSink {
    fn report(&mut self, report: &Report);
}

impl ReportSink for Vec<Report> {
    fn report(&mut self, report: &Report) {
        self.push(*report);
    }
}

/// Compute the lagoon area from in-memory lines.
pub fn solve_lines<I, S>(
    lines: I,
    mode: DecodeMode,
    sink: &mut dyn ReportSink,
) -> Result<u128, Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    run(lines.into_iter().map(Ok), mode, sink)
}

/// Compute the lagoon area from a buffered reader, one move per line.
pub fn solve_reader<R: BufRead>(
    reader: R,
    mode: DecodeMode,
    sink: &mut dyn ReportSink,
) -> Result<u128, Error> {
    run(reader.lines().map(|l| l.map_err(Error::from)), mode, sink)
}

/// Compute the lagoon area of the configured dig plan file.
pub fn solve(cfg: &SolveCfg, sink: &mut dyn ReportSink) -> Result<u128, Error> {
    let path = cfg.data.as_ref().ok_or(Error::MissingInput)?;
    let file = File::open(path)?;
    solve_reader(BufReader::new(file), cfg.mode, sink)
}

/// Decode lines one at a time into a `DigPlan`, then report its area.
fn run<I, S>(lines: I, mode: DecodeMode, sink: &mut dyn ReportSink) -> Result<u128, Error>
where
    I: Iterator<Item = Result<S, Error>>,
    S: AsRef<str>,
{
    let mut plan = DigPlan::new();
    let mut moves = 0;
    for (idx, line) in lines.enumerate() {
        let line = line?;
        let mv = decode_line(line.as_ref(), mode).map_err(|source| Error::Parse {
            line: idx + 1,
            source,
        })?;
        plan.push(mv);
        moves += 1;
    }
    let area = plan.area();
    sink.report(&Report { mode, moves, area });
    Ok(area)
}
