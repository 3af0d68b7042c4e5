//! Error types for the solver library

use thiserror::Error;

/// Error type for parsing puzzle input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input as a whole doesn't match the expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// A single line of input is malformed
    #[error("Invalid input on line {line}: {message}")]
    InvalidLine {
        /// 1-based line number within the input
        line: usize,
        /// What was wrong with the line
        message: String,
    },
    /// Required data is missing from input
    #[error("Missing data: {0}")]
    MissingData(String),
}

impl ParseError {
    /// Build a [`ParseError::InvalidLine`] from anything displayable
    pub fn at_line(line: usize, message: impl std::fmt::Display) -> Self {
        ParseError::InvalidLine {
            line,
            message: message.to_string(),
        }
    }
}

/// Error type for solving a specific part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part number has no implementation
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The requested part number is out of range (exceeds `Solver::PARTS`)
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// The parsed input is well-formed but cannot be answered by this part
    #[error("Unsupported input: {0}")]
    Unsupported(String),
}

/// Error type for solver operations
#[derive(Debug, Error)]
pub enum SolverError {
    /// No solver registered for the given year and day
    #[error("Solver not found for year {0} day {1}")]
    NotFound(u16, u8),
    /// Year or day lies outside the supported calendar
    #[error("Year {0} day {1} is outside the supported range")]
    InvalidYearDay(u16, u8),
    /// Error occurred during parsing
    #[error("{0}")]
    Parse(#[from] ParseError),
    /// Error occurred during solving
    #[error("{0}")]
    Solve(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// Attempted to register a solver for a year-day combination that already exists
    #[error("Duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
    /// Year or day lies outside the supported calendar
    #[error("Cannot register year {0} day {1}: outside the supported range")]
    InvalidYearDay(u16, u8),
}
