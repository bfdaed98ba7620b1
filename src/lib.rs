/// Utilities for tests and benchmarks
#[doc(hidden)]
pub mod _test_util;
pub mod traits;

/// Exact arithmetic
pub mod algebra;

/// Decoding of numerals in bases up to 36
pub mod numeral;

/// Secret reconstruction algorithms
pub mod rec;

/// Share sets and their JSON representation
pub mod share;

pub use rec::{
    majority::{reconstruct, Consensus, FailedRec, MajorityRec},
    point::Point,
};
pub use rug::Integer;
