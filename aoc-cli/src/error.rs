//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Puzzle input could not be read
    #[error("{0}")]
    Input(#[from] InputError),

    /// A solver rejected its input or failed a part
    #[error("{year}/{day:02}: {source}")]
    Solver {
        year: u16,
        day: u8,
        #[source]
        source: aoc_solver::SolverError,
    },

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// Logging could not be set up
    #[error("Logging setup failed: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

/// Input-specific errors
#[derive(Error, Debug)]
pub enum InputError {
    /// No input file where one was expected
    #[error("Missing input for {year}/{day:02}: {} not found", .path.display())]
    Missing { year: u16, day: u8, path: PathBuf },

    /// IO error
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
