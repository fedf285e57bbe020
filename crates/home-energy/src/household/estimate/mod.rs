//! Answer-to-profile converters.
//!
//! Each sub-system maps its categorical answers onto a yearly
//! [`FuelUsageProfile`] through lookup tables held in
//! [`EstimationParameters`]. A table that lacks an entry for a valid answer
//! is a data bug and surfaces as [`EstimateError::UnrecognizedCategory`];
//! converters never fall back to zero usage.

mod cooktop;
mod driving;
mod heating;
mod hot_water;
mod parameters;
mod solar;

pub use parameters::{ApplianceFactor, EstimationParameters, VehicleFactor};

use super::answers::YourHome;
use super::choices::Choice;
use super::profile::FuelUsageProfile;
use crate::pricing::ClimateZone;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EstimateError {
    #[error("unrecognized {field} category: {value}")]
    UnrecognizedCategory { field: &'static str, value: String },
}

/// Inputs shared by every converter for one household.
#[derive(Debug, Clone, Copy)]
pub struct EstimationContext<'a> {
    pub parameters: &'a EstimationParameters,
    pub climate_zone: ClimateZone,
}

impl<'a> EstimationContext<'a> {
    pub fn new(parameters: &'a EstimationParameters, climate_zone: ClimateZone) -> Self {
        Self {
            parameters,
            climate_zone,
        }
    }

    /// Ratio applied to "average household" energy figures.
    pub fn household_scale(&self, home: &YourHome) -> f64 {
        (1.0 + f64::from(home.people_in_house()))
            / (1.0 + self.parameters.average_household_size)
    }
}

/// Converts one sub-system's answers into its yearly fuel usage.
pub trait EstimateUsage {
    fn estimate(
        &self,
        home: &YourHome,
        context: &EstimationContext<'_>,
    ) -> Result<FuelUsageProfile, EstimateError>;
}

pub(crate) fn lookup<C: Choice, V: Copy>(
    table: &HashMap<C, V>,
    field: &'static str,
    key: C,
) -> Result<V, EstimateError> {
    table
        .get(&key)
        .copied()
        .ok_or_else(|| EstimateError::UnrecognizedCategory {
            field,
            value: key.label().to_string(),
        })
}
