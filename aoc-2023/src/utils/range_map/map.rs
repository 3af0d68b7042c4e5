//! Single interval translation rule

use super::Interval;
use std::fmt;

/// Maps every value of a source interval onto a destination interval of the
/// same length, preserving order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeMap {
    source: Interval,
    destination_start: i64,
}

#[allow(clippy::len_without_is_empty)]
impl RangeMap {
    /// Build from the puzzle's `<destination> <source> <length>` triple.
    ///
    /// Returns `None` for non-positive lengths, or when either end would
    /// overflow `i64`.
    pub fn new(destination_start: i64, source_start: i64, len: i64) -> Option<Self> {
        let source = Interval::with_len(source_start, len)?;
        Interval::with_len(destination_start, len)?;
        Some(Self {
            source,
            destination_start,
        })
    }

    /// Caller guarantees `destination_start + source.len()` fits in `i64`.
    pub(super) fn from_parts(source: Interval, destination_start: i64) -> Self {
        Self {
            source,
            destination_start,
        }
    }

    pub fn source(&self) -> Interval {
        self.source
    }

    pub fn destination_start(&self) -> i64 {
        self.destination_start
    }

    pub fn destination(&self) -> Interval {
        Interval {
            start: self.destination_start,
            end: self.destination_start + self.source.len(),
        }
    }

    pub fn len(&self) -> i64 {
        self.source.len()
    }

    /// Translated value, or `None` when `value` is outside the source interval
    pub fn translate(&self, value: i64) -> Option<i64> {
        self.source
            .contains(value)
            .then(|| self.destination_start + (value - self.source.start))
    }

    /// Image of `part`, which must lie within the source interval
    pub fn map_interval(&self, part: Interval) -> Interval {
        debug_assert!(self.source.intersect(&part) == Some(part));
        let start = self.destination_start + (part.start - self.source.start);
        Interval {
            start,
            end: start + part.len(),
        }
    }

    /// Same translation, limited to `part` of the source interval
    pub fn restrict_to_source(&self, part: Interval) -> RangeMap {
        RangeMap::from_parts(part, self.map_interval(part).start)
    }

    /// Same translation, limited to the sources landing in `part` of the
    /// destination interval
    pub fn restrict_to_destination(&self, part: Interval) -> RangeMap {
        debug_assert!(self.destination().intersect(&part) == Some(part));
        let start = self.source.start + (part.start - self.destination_start);
        RangeMap::from_parts(
            Interval {
                start,
                end: start + part.len(),
            },
            part.start,
        )
    }
}

/// Puzzle layout: `<destination> <source> <length>`
impl fmt::Display for RangeMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.destination_start,
            self.source.start,
            self.len()
        )
    }
}
