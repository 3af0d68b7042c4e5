use super::almanac::{Almanac, Location, Seed};
use crate::utils::range_map::{Interval, RangeMapTable};
use aoc_solver::SolveError;
use itertools::Itertools;
use std::cmp::Ordering;

/// Reads the seed list as `<start> <length>` pairs.
///
/// Zero-length pairs hold no seeds and are skipped.
pub fn seed_ranges(values: &[i64]) -> Result<Vec<Interval>, SolveError> {
    if values.len() % 2 == 1 {
        return Err(SolveError::Unsupported(format!(
            "seed ranges come in start/length pairs, found {} numbers",
            values.len()
        )));
    }

    values
        .iter()
        .copied()
        .tuples::<(i64, i64)>()
        .filter_map(|(start, len)| match len.cmp(&0) {
            Ordering::Less => Some(Err(SolveError::Unsupported(format!(
                "seed range at {start} has negative length {len}"
            )))),
            Ordering::Equal => None,
            Ordering::Greater => Some(Interval::with_len(start, len).ok_or_else(|| {
                SolveError::Unsupported(format!("seed range at {start} overflows"))
            })),
        })
        .collect()
}

/// Lowest location reachable from `ranges`, found by mapping whole ranges
/// through the flattened table.
pub fn min_location(flattened: &RangeMapTable<Seed, Location>, ranges: &[Interval]) -> Option<i64> {
    ranges
        .iter()
        .flat_map(|&range| flattened.image(range))
        .map(|locations| locations.start())
        .min()
}

/// Lowest location reachable from `ranges`, one seed at a time
pub fn min_location_brute_force(
    flattened: &RangeMapTable<Seed, Location>,
    ranges: &[Interval],
) -> Option<i64> {
    ranges
        .iter()
        .flat_map(Interval::values)
        .map(|seed| flattened.lookup(seed))
        .min()
}

/// Like [`min_location_brute_force`], without flattening the stages first
pub fn min_location_by_stages(almanac: &Almanac, ranges: &[Interval]) -> Option<i64> {
    ranges
        .iter()
        .flat_map(Interval::values)
        .map(|seed| almanac.location(seed))
        .min()
}
