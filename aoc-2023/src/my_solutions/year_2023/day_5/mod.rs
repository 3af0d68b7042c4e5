//! Day 5: If You Give A Seed A Fertilizer
//!
//! Seeds pass through seven range-remapping stages on their way to a
//! location. Both parts want the lowest location; part 2 reads the seed list
//! as ranges far too large to walk, so the stages are flattened into a single
//! seed-to-location table and whole ranges are mapped at once.

mod almanac;
mod query;


pub use almanac::{
    Almanac, Fertilizer, Humidity, Light, Location, Seed, SeedTrace, Soil, Temperature, Water,
};
pub use query::{min_location, min_location_brute_force, min_location_by_stages, seed_ranges};

use crate::utils::range_map::RangeMapTable;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use tracing::{debug, trace};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 5, tags = ["range-map", "parsing"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    almanac: Almanac,
    flattened: Option<RangeMapTable<Seed, Location>>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Almanac::parse(input).map(|almanac| SharedData {
            almanac,
            flattened: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (almanac, flattened) = flattened_once(shared);
        almanac
            .seeds()
            .iter()
            .map(|&seed| {
                let location = flattened.lookup(seed);
                trace!(path = %almanac.trace(seed), "seed location");
                location
            })
            .min()
            .map(|location| location.to_string())
            .ok_or_else(|| SolveError::Unsupported("no seeds listed".to_string()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (almanac, flattened) = flattened_once(shared);
        let ranges = seed_ranges(almanac.seeds())?;
        debug!(
            ranges = ranges.len(),
            entries = flattened.len(),
            "mapping seed ranges"
        );
        min_location(flattened, &ranges)
            .map(|location| location.to_string())
            .ok_or_else(|| SolveError::Unsupported("every seed range is empty".to_string()))
    }
}

/// Flattens the stages on first use; both parts share the table.
fn flattened_once(shared: &mut SharedData) -> (&Almanac, &RangeMapTable<Seed, Location>) {
    let SharedData { almanac, flattened } = shared;
    let flattened = flattened.get_or_insert_with(|| almanac.flatten());
    (almanac, flattened)
}
