use super::{lookup, EstimateError, EstimateUsage, EstimationContext};
use crate::household::answers::{SolarAnswers, YourHome};
use crate::household::profile::{FuelChannel, FuelUsageProfile};
use crate::household::DAYS_IN_YEAR;

/// Generation offsets day-rate consumption, so it is reported as negative usage.
impl EstimateUsage for SolarAnswers {
    fn estimate(
        &self,
        _home: &YourHome,
        context: &EstimationContext<'_>,
    ) -> Result<FuelUsageProfile, EstimateError> {
        if !self.has_solar {
            return Ok(FuelUsageProfile::default());
        }

        let kwh_per_day = lookup(
            &context.parameters.solar_kwh_per_day,
            "climate_zone",
            context.climate_zone,
        )?;
        Ok(FuelUsageProfile::default()
            .with_usage(FuelChannel::ElectricityDay, -kwh_per_day * DAYS_IN_YEAR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::household::estimate::EstimationParameters;
    use crate::pricing::ClimateZone;

    #[test]
    fn generation_depends_on_climate_zone() {
        let parameters = EstimationParameters::standard();
        let home = YourHome::new(2, "0000").expect("valid home");
        let solar = SolarAnswers { has_solar: true };

        let north = solar
            .estimate(&home, &EstimationContext::new(&parameters, ClimateZone::Cz1))
            .expect("solar estimates");
        let south = solar
            .estimate(&home, &EstimationContext::new(&parameters, ClimateZone::Cz6))
            .expect("solar estimates");

        assert_eq!(north.day_kwh, -30.0 * DAYS_IN_YEAR);
        assert_eq!(south.day_kwh, -5.0 * DAYS_IN_YEAR);
        assert_eq!(north.elx_connection_days, 0.0);
    }

    #[test]
    fn no_panels_means_no_generation() {
        let parameters = EstimationParameters::standard();
        let home = YourHome::new(2, "0000").expect("valid home");
        let profile = SolarAnswers { has_solar: false }
            .estimate(&home, &EstimationContext::new(&parameters, ClimateZone::Cz1))
            .expect("solar estimates");
        assert_eq!(profile, FuelUsageProfile::default());
    }

    #[test]
    fn unknown_zone_is_an_error() {
        let mut parameters = EstimationParameters::standard();
        parameters.solar_kwh_per_day.remove(&ClimateZone::Cz3);
        let home = YourHome::new(2, "0000").expect("valid home");

        let err = SolarAnswers { has_solar: true }
            .estimate(&home, &EstimationContext::new(&parameters, ClimateZone::Cz3))
            .expect_err("missing zone fails");
        assert_eq!(
            err,
            EstimateError::UnrecognizedCategory {
                field: "climate_zone",
                value: "CZ3".to_string(),
            }
        );
    }
}
