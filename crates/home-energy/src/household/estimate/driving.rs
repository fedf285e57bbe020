use super::{lookup, EstimateError, EstimateUsage, EstimationContext};
use crate::household::answers::{DrivingAnswers, YourHome};
use crate::household::profile::{FuelChannel, FuelUsageProfile};
use crate::household::WEEKS_IN_YEAR;

/// Vehicle fuel follows distance driven, then household size like every other
/// converter. Electricity is routed to the night rate and adds no connection days.
impl EstimateUsage for DrivingAnswers {
    fn estimate(
        &self,
        home: &YourHome,
        context: &EstimationContext<'_>,
    ) -> Result<FuelUsageProfile, EstimateError> {
        let parameters = context.parameters;
        let vehicle = lookup(&parameters.vehicles, "vehicle_type", self.vehicle_type)?;
        let size = lookup(&parameters.vehicle_size, "vehicle_size", self.vehicle_size)?;
        let weekly_km = lookup(
            &parameters.weekly_distance_km,
            "km_per_week",
            self.km_per_week,
        )?;

        let hundreds_of_km =
            weekly_km * WEEKS_IN_YEAR / 100.0 * size * context.household_scale(home);
        Ok(FuelUsageProfile::default()
            .with_usage(
                FuelChannel::Petrol,
                vehicle.petrol_litres_per_100km * hundreds_of_km,
            )
            .with_usage(
                FuelChannel::Diesel,
                vehicle.diesel_litres_per_100km * hundreds_of_km,
            )
            .with_usage(
                FuelChannel::ElectricityNight,
                vehicle.kwh_per_100km * hundreds_of_km,
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::household::choices::{VehicleSize, VehicleType, WeeklyDistance};
    use crate::household::estimate::EstimationParameters;
    use crate::pricing::ClimateZone;
    use approx::assert_relative_eq;

    fn estimate(vehicle_type: VehicleType, km_per_week: WeeklyDistance) -> FuelUsageProfile {
        estimate_for(1, vehicle_type, km_per_week)
    }

    fn estimate_for(
        people: u8,
        vehicle_type: VehicleType,
        km_per_week: WeeklyDistance,
    ) -> FuelUsageProfile {
        let parameters = EstimationParameters::standard();
        let context = EstimationContext::new(&parameters, ClimateZone::Cz2);
        let home = YourHome::new(people, "4000").expect("valid home");
        DrivingAnswers {
            vehicle_type,
            alternative_vehicle_type: None,
            vehicle_size: VehicleSize::Medium,
            km_per_week,
        }
        .estimate(&home, &context)
        .expect("driving estimates")
    }

    fn one_person_scale() -> f64 {
        2.0 / (1.0 + EstimationParameters::standard().average_household_size)
    }

    #[test]
    fn petrol_car_burns_petrol_only() {
        let profile = estimate(VehicleType::Petrol, WeeklyDistance::TwoHundred);
        assert_relative_eq!(
            profile.petrol_litres,
            8.0 * 200.0 * WEEKS_IN_YEAR / 100.0 * one_person_scale(),
            max_relative = 1e-9
        );
        assert_eq!(profile.diesel_litres, 0.0);
        assert_eq!(profile.total_electricity_kwh(), 0.0);
        assert_eq!(profile.elx_connection_days, 0.0);
    }

    #[test]
    fn electric_car_charges_overnight() {
        let profile = estimate(VehicleType::Electric, WeeklyDistance::OneHundred);
        assert!(profile.night_kwh > 0.0);
        assert_eq!(profile.day_kwh, 0.0);
        assert_eq!(profile.petrol_litres, 0.0);
    }

    #[test]
    fn plug_in_hybrid_splits_between_petrol_and_electricity() {
        let profile = estimate(VehicleType::PluginHybrid, WeeklyDistance::ThreeHundred);
        assert!(profile.petrol_litres > 0.0);
        assert!(profile.night_kwh > 0.0);
    }

    #[test]
    fn distance_drives_consumption() {
        let short = estimate(VehicleType::Diesel, WeeklyDistance::FiftyOrLess);
        let long = estimate(VehicleType::Diesel, WeeklyDistance::FourHundredOrMore);
        assert_relative_eq!(long.diesel_litres / short.diesel_litres, 8.0, max_relative = 1e-9);
    }

    #[test]
    fn larger_households_drive_more() {
        let single = estimate_for(1, VehicleType::Petrol, WeeklyDistance::OneHundred);
        let six = estimate_for(6, VehicleType::Petrol, WeeklyDistance::OneHundred);
        assert_relative_eq!(
            six.petrol_litres / single.petrol_litres,
            7.0 / 2.0,
            max_relative = 1e-9
        );
    }
}
