//! Tariffs, emissions factors, and postcode-based region lookups.

pub mod emissions;
pub mod plan;
pub mod region;

pub use emissions::{EmissionsFactors, EmissionsSource};
pub use plan::{
    DieselPrice, ElectricityPlan, LpgPlan, NaturalGasPlan, PetrolPrice, TariffPlan, WoodPrice,
};
pub use region::{ClimateZone, DistributionZone, RegionResolver, StubRegionResolver};
