//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Year to run
    pub year: u16,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Explicit input file, for single-solver runs
    pub input_file: Option<PathBuf>,
    /// Directory of `{year}_day{day:02}.txt` inputs
    pub input_dir: PathBuf,
    /// Quiet mode
    pub quiet: bool,
    /// Log level used when RUST_LOG is unset
    pub log_level: LevelFilter,
}

impl Config {
    /// Build config from CLI args, expanding `~` in paths
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        if let Some(tag) = args.tags.iter().find(|tag| tag.trim().is_empty()) {
            return Err(CliError::Config(format!("Invalid tag {tag:?}: tags must not be empty")));
        }

        Ok(Config {
            year: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input_file: args.input.as_deref().map(expand_tilde),
            input_dir: expand_tilde(&args.input_dir),
            quiet: args.quiet,
            log_level: log_level(args.verbose),
        })
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_expand_tilde() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(expand_tilde(Path::new("~/aoc/inputs")), home.join("aoc/inputs"));
        assert_eq!(expand_tilde(Path::new("~")), home);
        assert_eq!(expand_tilde(Path::new("inputs")), PathBuf::from("inputs"));
        assert_eq!(expand_tilde(Path::new("/tmp/~x")), PathBuf::from("/tmp/~x"));
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(log_level(0), LevelFilter::WARN);
        assert_eq!(log_level(1), LevelFilter::INFO);
        assert_eq!(log_level(2), LevelFilter::DEBUG);
        assert_eq!(log_level(3), LevelFilter::TRACE);
        assert_eq!(log_level(9), LevelFilter::TRACE);
    }

    #[test]
    fn test_from_args() {
        let args = Args::try_parse_from(["aoc", "-d", "5", "-i", "input.txt", "-v"]).unwrap();
        let config = Config::from_args(args).unwrap();
        assert_eq!(config.year, 2023);
        assert_eq!(config.day_filter, Some(5));
        assert_eq!(config.input_file, Some(PathBuf::from("input.txt")));
        assert_eq!(config.log_level, LevelFilter::INFO);
    }

    #[test]
    fn test_rejects_empty_tag() {
        let args = Args::try_parse_from(["aoc", "--tags", "range-map,,parsing"]).unwrap();
        assert!(matches!(Config::from_args(args), Err(CliError::Config(_))));
    }
}
