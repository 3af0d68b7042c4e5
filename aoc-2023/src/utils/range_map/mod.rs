//! Interval translation tables and their composition
//!
//! A [`RangeMapTable`] translates integers through a list of [`RangeMap`]
//! rules, each moving one contiguous source [`Interval`] onto a destination
//! interval of the same length. Values no rule covers pass through unchanged.
//!
//! Tables are tagged with the [`Unit`]s they translate between, so stages can
//! only be chained when the output of one is the input of the next:
//!
//! ```
//! use aoc_2023::utils::range_map::{RangeMap, RangeMapTable, Unit};
//!
//! enum Celsius {}
//! enum Kelvin {}
//! enum Rank {}
//! impl Unit for Celsius { const NAME: &'static str = "celsius"; }
//! impl Unit for Kelvin { const NAME: &'static str = "kelvin"; }
//! impl Unit for Rank { const NAME: &'static str = "rank"; }
//!
//! let to_kelvin: RangeMapTable<Celsius, Kelvin> =
//!     [RangeMap::new(273, 0, 100).unwrap()].into_iter().collect();
//! let to_rank: RangeMapTable<Kelvin, Rank> =
//!     [RangeMap::new(0, 300, 10).unwrap()].into_iter().collect();
//!
//! let direct = to_kelvin.then(&to_rank);
//! assert_eq!(direct.lookup(30), 3);
//! assert_eq!(direct.lookup(-5), -5);
//! assert_eq!(direct.lookup(302), 2);
//! // to_rank.then(&to_kelvin) does not type-check.
//! ```

mod compose;
mod interval;
mod map;
mod table;

#[cfg(test)]
mod tests;

pub use compose::compose;
pub use interval::Interval;
pub use map::RangeMap;
pub use table::{RangeMapTable, Unit};
