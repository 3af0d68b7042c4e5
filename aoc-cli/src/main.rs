//! AOC CLI - Command-line interface for running Advent of Code solvers

mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;

// Import aoc-2023 to link the solver plugins
use aoc_2023 as _;

use aoc_solver::SolverRegistryBuilder;
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::Executor;
use output::OutputFormatter;
use tracing::{info, warn};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    setup_tracing(config.log_level)?;

    // Build registry with tag filtering (only once)
    let registry = build_registry(&config.tags)?;
    info!(solvers = registry.len(), "registered solvers");

    let executor = Executor::new(registry, &config);
    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }
    if config.input_file.is_some() && work_items.len() > 1 {
        return Err(CliError::Config(format!(
            "--input needs a selection of exactly one solver, {} matched",
            work_items.len()
        )));
    }

    for work in executor.missing_inputs(&work_items) {
        warn!(year = work.year, day = work.day, "puzzle input not found");
    }

    info!(solvers = work_items.len(), "running solvers");
    let formatter = OutputFormatter::new(config.quiet);
    let mut results = Vec::new();
    executor.execute(&work_items, |result| {
        formatter.print_result(&result);
        results.push(result);
    })?;

    formatter.print_summary(&results);
    Ok(())
}

/// Logs go to stderr; RUST_LOG takes precedence over `-v`
fn setup_tracing(default_level: LevelFilter) -> Result<(), CliError> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();
    let fmt = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_filter(env_filter);
    tracing_subscriber::registry().with(fmt).try_init()?;
    Ok(())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<aoc_solver::SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
