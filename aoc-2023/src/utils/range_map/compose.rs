//! Composition of two adjacent translation stages

use super::{RangeMap, RangeMapTable};

/// Compose `first` (A to B) with `second` (B to C) into one A to C table.
///
/// The result agrees with looking a value up in `first` and then in
/// `second`, for every value. Its entries come from three kinds of regions:
///
/// 1. parts of a `first` entry whose B-side lands in a `second` source:
///    translated twice;
/// 2. parts of a `first` entry whose B-side no `second` entry covers:
///    `second` is the identity there, so the `first` translation stands;
/// 3. parts of a `second` source that no `first` source covers: `first` is
///    the identity there, so A = B and the `second` translation applies.
///
/// Values in none of these regions are left to the identity fallback.
/// Leftover fragments are tracked on explicit worklists, so stack depth does
/// not grow with the number of splits.
pub fn compose<A, B, C>(
    first: &RangeMapTable<A, B>,
    second: &RangeMapTable<B, C>,
) -> RangeMapTable<A, C> {
    let mut composed = Vec::with_capacity(first.len() + second.len());

    for map in first.entries() {
        let mut pending = vec![*map];
        while let Some(fragment) = pending.pop() {
            let destination = fragment.destination();
            let hit = second.entries().iter().find_map(|next| {
                destination
                    .intersect(&next.source())
                    .map(|overlap| (next, overlap))
            });
            match hit {
                Some((next, overlap)) => {
                    let matched = fragment.restrict_to_destination(overlap);
                    composed.push(RangeMap::from_parts(
                        matched.source(),
                        next.map_interval(overlap).start(),
                    ));
                    let (below, above) = destination.split_around(&overlap);
                    pending.extend(below.map(|part| fragment.restrict_to_destination(part)));
                    pending.extend(above.map(|part| fragment.restrict_to_destination(part)));
                }
                None => composed.push(fragment),
            }
        }
    }

    for next in second.entries() {
        let mut pending = vec![next.source()];
        while let Some(region) = pending.pop() {
            let covered = first
                .entries()
                .iter()
                .find_map(|map| map.source().intersect(&region));
            match covered {
                Some(overlap) => {
                    let (below, above) = region.split_around(&overlap);
                    pending.extend(below);
                    pending.extend(above);
                }
                None => composed.push(next.restrict_to_source(region)),
            }
        }
    }

    RangeMapTable::new(composed)
}
