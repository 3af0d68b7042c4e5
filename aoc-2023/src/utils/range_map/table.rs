//! Ordered collections of range maps forming one translation stage

use super::{compose, Interval, RangeMap};
use std::fmt;
use std::marker::PhantomData;

/// Names one side of a translation stage (e.g. `seed`, `soil`).
///
/// Implemented by zero-sized marker types that tag [`RangeMapTable`]s so
/// stages can only be chained in a matching order.
pub trait Unit {
    const NAME: &'static str;
}

/// Lookup-or-identity translation from `S` values to `D` values
///
/// A value is translated by the first entry whose source interval contains
/// it; values no entry covers map to themselves. Sources may overlap, in
/// which case the earlier entry shadows the later one.
pub struct RangeMapTable<S, D> {
    entries: Vec<RangeMap>,
    units: PhantomData<fn(S) -> D>,
}

impl<S, D> RangeMapTable<S, D> {
    pub fn new(entries: Vec<RangeMap>) -> Self {
        Self {
            entries,
            units: PhantomData,
        }
    }

    /// The table without entries: every value maps to itself
    pub fn identity() -> Self {
        Self::new(Vec::new())
    }

    pub fn entries(&self) -> &[RangeMap] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Translate a single value. Total: uncovered values pass through.
    pub fn lookup(&self, value: i64) -> i64 {
        self.entries
            .iter()
            .find_map(|map| map.translate(value))
            .unwrap_or(value)
    }

    /// Translate every value of `interval` at once.
    ///
    /// Returns disjoint-source pieces: one translated interval per entry the
    /// input overlaps, plus the uncovered gaps unchanged. Their total length
    /// equals `interval.len()`.
    pub fn image(&self, interval: Interval) -> Vec<Interval> {
        let mut image = Vec::new();
        let mut pending = vec![interval];

        while let Some(region) = pending.pop() {
            let hit = self.entries.iter().find_map(|map| {
                map.source()
                    .intersect(&region)
                    .map(|overlap| (map, overlap))
            });
            match hit {
                Some((map, overlap)) => {
                    image.push(map.map_interval(overlap));
                    let (below, above) = region.split_around(&overlap);
                    pending.extend(below);
                    pending.extend(above);
                }
                None => image.push(region),
            }
        }
        image
    }

    /// Compose with the following stage, producing a direct `S` to `E` table
    pub fn then<E>(&self, next: &RangeMapTable<D, E>) -> RangeMapTable<S, E> {
        compose(self, next)
    }

    /// Cut away every part of a source that an earlier entry already covers.
    ///
    /// Lookup is unchanged and the remaining sources are pairwise disjoint, so
    /// the entries can be reordered freely afterwards.
    pub fn without_shadowed(&self) -> Self {
        let mut visible: Vec<RangeMap> = Vec::with_capacity(self.entries.len());
        for map in &self.entries {
            let mut kept = Vec::new();
            let mut pending = vec![map.source()];
            while let Some(region) = pending.pop() {
                let shadow = visible
                    .iter()
                    .find_map(|earlier| earlier.source().intersect(&region));
                match shadow {
                    Some(overlap) => {
                        let (below, above) = region.split_around(&overlap);
                        pending.extend(below);
                        pending.extend(above);
                    }
                    None => kept.push(map.restrict_to_source(region)),
                }
            }
            visible.extend(kept);
        }
        Self::new(visible)
    }

    /// Order entries by destination start (then source start).
    ///
    /// Shadowed parts are dropped first, so lookup results are unaffected.
    pub fn sort_by_destination(&mut self) {
        self.entries = self.without_shadowed().entries;
        self.entries
            .sort_by_key(|map| (map.destination_start(), map.source().start()));
    }
}

impl<S: Unit, D: Unit> RangeMapTable<S, D> {
    /// Section header naming this stage, e.g. `seed-to-soil map:`
    pub fn header() -> String {
        format!("{}-to-{} map:", S::NAME, D::NAME)
    }
}

impl<S, D> FromIterator<RangeMap> for RangeMapTable<S, D> {
    fn from_iter<I: IntoIterator<Item = RangeMap>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<S, D> Default for RangeMapTable<S, D> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<S, D> Clone for RangeMapTable<S, D> {
    fn clone(&self) -> Self {
        Self::new(self.entries.clone())
    }
}

impl<S, D> PartialEq for RangeMapTable<S, D> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<S, D> Eq for RangeMapTable<S, D> {}

impl<S, D> fmt::Debug for RangeMapTable<S, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.entries).finish()
    }
}

/// Renders the table the way puzzle input lists it: header, then one
/// `<destination> <source> <length>` line per entry.
impl<S: Unit, D: Unit> fmt::Display for RangeMapTable<S, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Self::header())?;
        for map in &self.entries {
            write!(f, "\n{map}")?;
        }
        Ok(())
    }
}
