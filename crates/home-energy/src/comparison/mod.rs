//! Fuel-switching comparisons: per-field savings options and the
//! whole-household report, plus the HTTP surface over them.

pub mod options;
pub mod report;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use options::{
    reduction_percentage, savings_options, Footprint, SavingsOption, SavingsOptions,
};
pub use report::{HouseholdReport, SubsystemSavings};
pub use router::comparison_router;
pub use service::ComparisonService;
