//! Reading and validating fleet descriptions.
//!
//! A fleet description has one [`ShipRecord`] per line. The checks in this module run
//! over the raw records, before any coordinate conversion and before anything is
//! written to a board.

pub use self::{
    record::{parse_records, ShipRecord},
    validate::{
        check_bounds, check_composition, check_orientation, check_sizes, validate,
        ShipPlacement,
    },
};

#[cfg(feature = "rng_gen")]
pub use self::random::random_fleet;

#[cfg(feature = "rng_gen")]
mod random;
mod record;
mod validate;
