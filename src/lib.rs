pub use conversion::{checked_convert, conversion_factor, convert};
pub use time_unit::{unit_for_rank, TimeUnit, UnitOutOfRange};

mod conversion;
mod time_unit;
