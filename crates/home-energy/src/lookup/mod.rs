//! Offline generation of precomputed cost and emissions tables.
//!
//! Every combination of household size, postcode and categorical answers for
//! one sub-system is priced and written as a CSV row. The generator memoizes
//! region lookups per postcode and results per input combination; both caches
//! live and die with one generator.

mod generator;
mod table;

pub use generator::{CacheStats, LookupError, LookupGenerator, DEFAULT_POSTCODES};
pub use table::LookupTable;
