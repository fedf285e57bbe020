//! Household energy cost and emissions estimator.
//!
//! Questionnaire answers are converted into a yearly fuel usage profile,
//! priced against a regional tariff, and compared against fuel-switching
//! alternatives.

pub mod comparison;
pub mod config;
pub mod error;
pub mod household;
pub mod lookup;
pub mod pricing;
pub mod telemetry;

pub use comparison::{comparison_router, ComparisonService, HouseholdReport, SavingsOption};
pub use error::AppError;
pub use household::{FuelUsageProfile, HouseholdAnswers, YourHome};
pub use lookup::{LookupGenerator, LookupTable};
pub use pricing::{EmissionsFactors, RegionResolver, StubRegionResolver, TariffPlan};
