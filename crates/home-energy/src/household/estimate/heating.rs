use super::{lookup, EstimateError, EstimateUsage, EstimationContext};
use crate::household::answers::{HeatingAnswers, YourHome};
use crate::household::profile::FuelUsageProfile;

impl EstimateUsage for HeatingAnswers {
    fn estimate(
        &self,
        home: &YourHome,
        context: &EstimationContext<'_>,
    ) -> Result<FuelUsageProfile, EstimateError> {
        let parameters = context.parameters;
        let factor = lookup(
            &parameters.space_heating,
            "main_heating_source",
            self.main_heating_source,
        )?;
        let daytime = lookup(
            &parameters.heating_during_day,
            "heating_during_day",
            self.heating_during_day,
        )?;
        let insulation = lookup(
            &parameters.insulation,
            "insulation_quality",
            self.insulation_quality,
        )?;

        let kwh = factor.standard_household_kwh
            * daytime
            * insulation
            * context.household_scale(home);
        Ok(FuelUsageProfile::default().with_supply(factor.channel, kwh))
    }
}
