use serde::{Deserialize, Serialize};

use super::options::{Footprint, SavingsOption};
use crate::household::FuelUsageProfile;
use crate::pricing::ClimateZone;

/// Effect of switching one sub-system to its submitted alternative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SubsystemSavings {
    /// False when no alternative was submitted; savings are then zero.
    pub switched: bool,
    pub savings: f64,
    pub emissions_reduction_percentage: f64,
}

impl SubsystemSavings {
    pub fn unchanged() -> Self {
        Self::default()
    }

    pub fn switched(option: SavingsOption) -> Self {
        Self {
            switched: true,
            savings: option.savings,
            emissions_reduction_percentage: option.emissions_reduction_percentage,
        }
    }
}

/// Current household footprint against the household with every submitted
/// alternative applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseholdReport {
    pub plan_name: String,
    pub climate_zone: ClimateZone,
    pub usage_profile: FuelUsageProfile,
    pub alternative_usage_profile: FuelUsageProfile,
    pub current: Footprint,
    pub alternative: Footprint,
    pub heating: SubsystemSavings,
    pub hot_water: SubsystemSavings,
    pub cooktop: SubsystemSavings,
    pub driving: SubsystemSavings,
    pub overall: SavingsOption,
}
