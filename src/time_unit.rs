use std::fmt;
use std::hash::Hash;

use thiserror::Error;

/// A fixed-ratio duration granularity.
///
/// Variants are declared from finest to coarsest and the derived ordering follows the
/// declaration, so `Nanoseconds < Days`. Conversions depend on that ordering.
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{parameter} is out of range: {value}")]
pub struct UnitOutOfRange {
    pub parameter: &'static str,
    pub value: usize,
}

impl TimeUnit {
    pub const COUNT: usize = 7;

    pub const ALL: [TimeUnit; TimeUnit::COUNT] = [
        TimeUnit::Nanoseconds,
        TimeUnit::Microseconds,
        TimeUnit::Milliseconds,
        TimeUnit::Seconds,
        TimeUnit::Minutes,
        TimeUnit::Hours,
        TimeUnit::Days,
    ];

    /// Zero-based position of the unit, 0 for nanoseconds up to 6 for days.
    pub fn rank(self) -> usize {
        self as usize
    }

    pub fn from_rank(rank: usize) -> Result<Self, UnitOutOfRange> {
        Self::ALL.get(rank).copied().ok_or(UnitOutOfRange {
            parameter: "rank",
            value: rank,
        })
    }

    /// Short label of the unit, e.g. "ms" or "day".
    pub fn unit(self) -> &'static str {
        match self {
            TimeUnit::Nanoseconds => "ns",
            TimeUnit::Microseconds => "us",
            TimeUnit::Milliseconds => "ms",
            TimeUnit::Seconds => "s",
            TimeUnit::Minutes => "min",
            TimeUnit::Hours => "h",
            TimeUnit::Days => "day",
        }
    }
}

impl TryFrom<usize> for TimeUnit {
    type Error = UnitOutOfRange;

    fn try_from(rank: usize) -> Result<Self, Self::Error> {
        TimeUnit::from_rank(rank)
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.unit())
    }
}

/// Label lookup for a unit that only exists as a raw rank, e.g. one read back from
/// storage. Unknown ranks are reported against the `unit` parameter.
pub fn unit_for_rank(rank: usize) -> Result<&'static str, UnitOutOfRange> {
    TimeUnit::from_rank(rank)
        .map(TimeUnit::unit)
        .map_err(|_| UnitOutOfRange {
            parameter: "unit",
            value: rank,
        })
}
