//! Fallback answers used when a section of the questionnaire is missing.

use super::answers::{
    CooktopAnswers, DrivingAnswers, HeatingAnswers, Household, HotWaterAnswers, SolarAnswers,
    YourHome,
};
use super::choices::{
    CooktopType, HeatingDuringDay, HeatingSource, HotWaterSource, HotWaterUsage,
    InsulationQuality, VehicleSize, VehicleType, WeeklyDistance,
};
use super::profile::FuelUsageProfile;

pub const DEFAULT_PEOPLE_IN_HOUSE: u8 = 4;
pub const DEFAULT_POSTCODE: &str = "0000";

pub fn your_home() -> YourHome {
    YourHome::from_parts(DEFAULT_PEOPLE_IN_HOUSE, DEFAULT_POSTCODE)
}

pub fn heating() -> HeatingAnswers {
    HeatingAnswers {
        main_heating_source: HeatingSource::ElectricHeater,
        alternative_main_heating_source: None,
        heating_during_day: HeatingDuringDay::ThreeToFourDays,
        insulation_quality: InsulationQuality::ModeratelyInsulated,
    }
}

pub fn hot_water() -> HotWaterAnswers {
    HotWaterAnswers {
        hot_water_usage: HotWaterUsage::Average,
        hot_water_heating_source: HotWaterSource::ElectricCylinder,
        alternative_hot_water_heating_source: None,
    }
}

pub fn cooktop() -> CooktopAnswers {
    CooktopAnswers {
        cooktop: CooktopType::PipedGas,
        alternative_cooktop: None,
    }
}

pub fn driving() -> DrivingAnswers {
    DrivingAnswers {
        vehicle_type: VehicleType::Petrol,
        alternative_vehicle_type: None,
        vehicle_size: VehicleSize::Medium,
        km_per_week: WeeklyDistance::TwoHundred,
    }
}

pub fn solar() -> SolarAnswers {
    SolarAnswers { has_solar: false }
}

pub fn household() -> Household {
    Household {
        your_home: your_home(),
        heating: heating(),
        hot_water: hot_water(),
        cooktop: cooktop(),
        driving: driving(),
        solar: solar(),
    }
}

/// Electricity-only reference profile used to sanity check tariffs.
pub fn usage_profile() -> FuelUsageProfile {
    FuelUsageProfile {
        elx_connection_days: 365.0,
        day_kwh: 2000.0,
        night_kwh: 1000.0,
        controlled_kwh: 500.0,
        ..FuelUsageProfile::default()
    }
}
