use super::{lookup, EstimateError, EstimateUsage, EstimationContext};
use crate::household::answers::{HotWaterAnswers, YourHome};
use crate::household::profile::FuelUsageProfile;

impl EstimateUsage for HotWaterAnswers {
    fn estimate(
        &self,
        home: &YourHome,
        context: &EstimationContext<'_>,
    ) -> Result<FuelUsageProfile, EstimateError> {
        let factor = lookup(
            &context.parameters.hot_water,
            "hot_water_heating_source",
            self.hot_water_heating_source,
        )?;
        let usage = lookup(
            &context.parameters.hot_water_usage,
            "hot_water_usage",
            self.hot_water_usage,
        )?;

        let kwh = factor.standard_household_kwh * usage * context.household_scale(home);
        Ok(FuelUsageProfile::default().with_supply(factor.channel, kwh))
    }
}
