use super::{lookup, EstimateError, EstimateUsage, EstimationContext};
use crate::household::answers::{CooktopAnswers, YourHome};
use crate::household::profile::FuelUsageProfile;

impl EstimateUsage for CooktopAnswers {
    fn estimate(
        &self,
        home: &YourHome,
        context: &EstimationContext<'_>,
    ) -> Result<FuelUsageProfile, EstimateError> {
        let factor = lookup(&context.parameters.cooktop, "cooktop", self.cooktop)?;
        let kwh = factor.standard_household_kwh * context.household_scale(home);
        Ok(FuelUsageProfile::default().with_supply(factor.channel, kwh))
    }
}
