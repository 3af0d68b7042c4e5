//! Half-open integer intervals

use std::fmt;
use std::ops::Range;

/// A non-empty half-open interval `[start, end)`
///
/// Construction never yields an empty interval, so every `Interval` in
/// circulation has `len() > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Interval {
    pub(super) start: i64,
    pub(super) end: i64,
}

#[allow(clippy::len_without_is_empty)]
impl Interval {
    /// `[start, start + len)`; `None` if `len <= 0` or the end overflows
    pub fn with_len(start: i64, len: i64) -> Option<Self> {
        if len <= 0 {
            return None;
        }
        start.checked_add(len).map(|end| Self { start, end })
    }

    /// `[start, end)`; `None` if `start >= end`
    pub fn from_bounds(start: i64, end: i64) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    /// Exclusive end
    pub fn end(&self) -> i64 {
        self.end
    }

    pub fn len(&self) -> i64 {
        self.end - self.start
    }

    pub fn contains(&self, value: i64) -> bool {
        self.start <= value && value < self.end
    }

    /// The common sub-interval, if the two overlap by at least one value
    pub fn intersect(&self, other: &Interval) -> Option<Interval> {
        Self::from_bounds(self.start.max(other.start), self.end.min(other.end))
    }

    /// The parts of `self` lying below and above `other`.
    ///
    /// ```
    /// use aoc_2023::utils::range_map::Interval;
    ///
    /// let whole = Interval::from_bounds(0, 10).unwrap();
    /// let middle = Interval::from_bounds(3, 5).unwrap();
    /// assert_eq!(
    ///     whole.split_around(&middle),
    ///     (Interval::from_bounds(0, 3), Interval::from_bounds(5, 10))
    /// );
    /// assert_eq!(middle.split_around(&whole), (None, None));
    /// ```
    pub fn split_around(&self, other: &Interval) -> (Option<Interval>, Option<Interval>) {
        (
            Self::from_bounds(self.start, other.start.min(self.end)),
            Self::from_bounds(other.end.max(self.start), self.end),
        )
    }

    /// Every value in the interval, in ascending order
    pub fn values(&self) -> Range<i64> {
        self.start..self.end
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
