use lazy_static::lazy_static;
use log::debug;

use crate::TimeUnit;

type FactorMatrix = [[i64; TimeUnit::COUNT]; TimeUnit::COUNT];

// STEP_FACTORS[i] is the number of rank-i ticks in one rank-(i + 1) tick.
const STEP_FACTORS: [i64; TimeUnit::COUNT - 1] = [
    1000, // ns per us
    1000, // us per ms
    1000, // ms per s
    60,   // s per min
    60,   // min per h
    24,   // h per day
];

lazy_static! {
    // Only cells with source > target are populated. The rest stay zero and are never read.
    static ref CONVERSION_FACTORS: FactorMatrix = build_conversion_factors();
}

fn build_conversion_factors() -> FactorMatrix {
    let mut matrix = [[0; TimeUnit::COUNT]; TimeUnit::COUNT];
    for source in 0..TimeUnit::COUNT {
        let mut cumulative = 1;
        for target in (0..source).rev() {
            cumulative *= STEP_FACTORS[target];
            matrix[source][target] = cumulative;
        }
    }
    debug!(
        "built {}x{} time unit conversion table",
        TimeUnit::COUNT,
        TimeUnit::COUNT
    );
    matrix
}

/// Number of `target` ticks in one `source` tick, or `None` if `source` is finer than
/// `target` and the ratio is not an integer.
pub fn conversion_factor(source: TimeUnit, target: TimeUnit) -> Option<i64> {
    if source == target {
        Some(1)
    } else if source > target {
        Some(CONVERSION_FACTORS[source.rank()][target.rank()])
    } else {
        None
    }
}

/// Converts `value` expressed in `source` units to `target` units.
///
/// Converting to a coarser unit truncates toward zero, so 90 seconds is 1 minute and
/// -90 seconds is -1 minute. Converting to a finer unit wraps on overflow; use
/// [`checked_convert`] when the input may be large enough for that to matter.
pub fn convert(source: TimeUnit, target: TimeUnit, value: i64) -> i64 {
    if source == target {
        return value;
    }
    let (s, t) = (source.rank(), target.rank());
    if s > t {
        value.wrapping_mul(CONVERSION_FACTORS[s][t])
    } else {
        value / CONVERSION_FACTORS[t][s]
    }
}

/// Like [`convert`], but returns `None` instead of wrapping when the result does not fit.
pub fn checked_convert(source: TimeUnit, target: TimeUnit, value: i64) -> Option<i64> {
    if source == target {
        return Some(value);
    }
    let (s, t) = (source.rank(), target.rank());
    if s > t {
        value.checked_mul(CONVERSION_FACTORS[s][t])
    } else {
        Some(value / CONVERSION_FACTORS[t][s])
    }
}

impl TimeUnit {
    pub fn convert(self, target: TimeUnit, value: i64) -> i64 {
        convert(self, target, value)
    }

    pub fn to_nanoseconds(self, value: i64) -> i64 {
        convert(self, TimeUnit::Nanoseconds, value)
    }

    pub fn to_microseconds(self, value: i64) -> i64 {
        convert(self, TimeUnit::Microseconds, value)
    }

    pub fn to_milliseconds(self, value: i64) -> i64 {
        convert(self, TimeUnit::Milliseconds, value)
    }

    pub fn to_seconds(self, value: i64) -> i64 {
        convert(self, TimeUnit::Seconds, value)
    }

    pub fn to_minutes(self, value: i64) -> i64 {
        convert(self, TimeUnit::Minutes, value)
    }

    pub fn to_hours(self, value: i64) -> i64 {
        convert(self, TimeUnit::Hours, value)
    }

    pub fn to_days(self, value: i64) -> i64 {
        convert(self, TimeUnit::Days, value)
    }
}
