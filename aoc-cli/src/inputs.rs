//! Puzzle input lookup on the local filesystem

use crate::error::InputError;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Where puzzle inputs are read from
///
/// Directory layout: `{input_dir}/{year}_day{day:02}.txt`
pub struct InputStore {
    source: InputSource,
}

enum InputSource {
    /// One file serving the single selected solver
    File(PathBuf),
    Directory(PathBuf),
}

impl InputStore {
    /// Prefer `input_file` when given, otherwise look inside `input_dir`
    pub fn new(input_file: Option<PathBuf>, input_dir: PathBuf) -> Self {
        let source = match input_file {
            Some(path) => InputSource::File(path),
            None => InputSource::Directory(input_dir),
        };
        Self { source }
    }

    /// Get the input path for a specific year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        match &self.source {
            InputSource::File(path) => path.clone(),
            InputSource::Directory(dir) => dir.join(format!("{}_day{:02}.txt", year, day)),
        }
    }

    /// Check if an input exists
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).is_file()
    }

    /// Read the whole input for a year/day
    pub fn read(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.input_path(year, day);
        fs::read_to_string(&path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => InputError::Missing { year, day, path },
            _ => InputError::Io { path, source },
        })
    }
}
