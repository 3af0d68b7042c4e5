//! Sequential executor for running solvers

use crate::config::Config;
use crate::error::CliError;
use crate::inputs::InputStore;
use aoc_solver::{SolverError, SolverRegistry};
use chrono::TimeDelta;
use std::ops::RangeInclusive;
use tracing::{debug, info};

/// Result from a single solved part
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: String,
    /// Set on the first part run by each solver, which paid for the parse
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Runs the selected solvers one after another
pub struct Executor {
    registry: SolverRegistry,
    inputs: InputStore,
    year: u16,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Self {
        Self {
            registry,
            inputs: InputStore::new(config.input_file.clone(), config.input_dir.clone()),
            year: config.year,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
        }
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .iter_info()
            .filter(|info| info.year == self.year)
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on the part filter and solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // Empty range - intentional
            None => 1..=max_parts,
        }
    }

    /// Work items whose input file is not there
    pub fn missing_inputs<'w>(&self, work_items: &'w [WorkItem]) -> Vec<&'w WorkItem> {
        work_items
            .iter()
            .filter(|w| !self.inputs.contains(w.year, w.day))
            .collect()
    }

    /// Run every work item in order, handing each answer to `on_result`.
    ///
    /// Each solver parses its input once and answers its parts in order. The
    /// first failure stops the run.
    pub fn execute<F>(&self, work_items: &[WorkItem], mut on_result: F) -> Result<(), CliError>
    where
        F: FnMut(SolverResult),
    {
        for work in work_items {
            let (year, day) = (work.year, work.day);
            let input = self.inputs.read(year, day)?;
            debug!(
                year,
                day,
                path = %self.inputs.input_path(year, day).display(),
                bytes = input.len(),
                "read puzzle input"
            );

            let mut solver = self
                .registry
                .create_solver(year, day, &input)
                .map_err(|source| CliError::Solver { year, day, source })?;
            let mut parse_duration = Some(solver.parse_duration());

            for part in work.parts.clone() {
                info!(year, day, part, "solving");
                let solved = solver.solve(part).map_err(|e| CliError::Solver {
                    year,
                    day,
                    source: SolverError::Solve(e),
                })?;
                on_result(SolverResult {
                    year,
                    day,
                    part,
                    solve_duration: solved.duration(),
                    answer: solved.answer,
                    parse_duration: parse_duration.take(),
                });
            }
        }
        Ok(())
    }
}
