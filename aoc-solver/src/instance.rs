//! Parsed puzzles with wall-clock timing

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// UTC wall-clock bounds of one parse or solve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub started: DateTime<Utc>,
    pub finished: DateTime<Utc>,
}

impl Timing {
    /// Run `work` and note when it started and finished
    pub fn measure<T>(work: impl FnOnce() -> T) -> (T, Timing) {
        let started = Utc::now();
        let value = work();
        let finished = Utc::now();
        (value, Timing { started, finished })
    }

    pub fn duration(&self) -> TimeDelta {
        self.finished - self.started
    }

    fn micros(&self) -> i64 {
        self.duration().num_microseconds().unwrap_or_default()
    }
}

/// One answered part
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub answer: String,
    pub timing: Timing,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.timing.duration()
    }
}

/// A puzzle input parsed by `S`, ready to answer parts `1..=S::PARTS`
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    parsed: Timing,
    shared: S::SharedData<'a>,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let (shared, parsed) = Timing::measure(|| S::parse(input));
        let shared = shared?;
        tracing::debug!(year, day, micros = parsed.micros(), "parsed puzzle input");
        Ok(Self {
            year,
            day,
            parsed,
            shared,
        })
    }

    /// Data the parser produced, including anything parts cached in it
    pub fn shared(&self) -> &S::SharedData<'a> {
        &self.shared
    }
}

/// Object-safe view of a [`SolverInstance`], as handed out by the registry
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn report(solver: &mut dyn DynSolver) -> Result<(), aoc_solver::SolveError> {
///     println!("{}/{:02} parsed in {}", solver.year(), solver.day(), solver.parse_duration());
///     for part in 1..=solver.parts() {
///         let result = solver.solve(part)?;
///         println!("part {}: {} ({})", part, result.answer, result.duration());
///     }
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Answer `part`, rejecting anything outside `1..=parts()` with
    /// [`SolveError::PartOutOfRange`]
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    /// When the input was parsed
    fn parse_timing(&self) -> Timing;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    fn parts(&self) -> u8;

    fn parse_duration(&self) -> TimeDelta {
        self.parse_timing().duration()
    }
}

impl<S: SolverExt> DynSolver for SolverInstance<'_, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let (answer, timing) =
            Timing::measure(|| S::solve_part_checked_range(&mut self.shared, part));
        let answer = answer?;
        tracing::trace!(
            year = self.year,
            day = self.day,
            part,
            micros = timing.micros(),
            "solved part"
        );
        Ok(SolveResult { answer, timing })
    }

    fn parse_timing(&self) -> Timing {
        self.parsed
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}
