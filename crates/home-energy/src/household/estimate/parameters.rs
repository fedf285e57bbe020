use crate::household::choices::{
    CooktopType, HeatingDuringDay, HeatingSource, HotWaterSource, HotWaterUsage,
    InsulationQuality, VehicleSize, VehicleType, WeeklyDistance,
};
use crate::household::profile::FuelChannel;
use crate::household::AVERAGE_HOUSEHOLD_SIZE;
use crate::pricing::ClimateZone;
use std::collections::HashMap;

/// Energy an appliance draws for an average-sized household, and where it draws it from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApplianceFactor {
    pub standard_household_kwh: f64,
    pub channel: FuelChannel,
}

impl ApplianceFactor {
    pub const fn new(standard_household_kwh: f64, channel: FuelChannel) -> Self {
        Self {
            standard_household_kwh,
            channel,
        }
    }
}

/// Consumption per 100 km. Vehicle electricity is charged overnight.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VehicleFactor {
    pub petrol_litres_per_100km: f64,
    pub diesel_litres_per_100km: f64,
    pub kwh_per_100km: f64,
}

/// Lookup tables driving every converter. Loaded once and shared read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimationParameters {
    pub average_household_size: f64,
    pub cooktop: HashMap<CooktopType, ApplianceFactor>,
    pub space_heating: HashMap<HeatingSource, ApplianceFactor>,
    pub heating_during_day: HashMap<HeatingDuringDay, f64>,
    pub insulation: HashMap<InsulationQuality, f64>,
    pub hot_water: HashMap<HotWaterSource, ApplianceFactor>,
    pub hot_water_usage: HashMap<HotWaterUsage, f64>,
    pub vehicles: HashMap<VehicleType, VehicleFactor>,
    pub vehicle_size: HashMap<VehicleSize, f64>,
    pub weekly_distance_km: HashMap<WeeklyDistance, f64>,
    pub solar_kwh_per_day: HashMap<ClimateZone, f64>,
}

impl EstimationParameters {
    /// New Zealand figures used by the public questionnaire.
    pub fn standard() -> Self {
        use FuelChannel::*;

        let cooktop = HashMap::from([
            (CooktopType::ElectricInduction, ApplianceFactor::new(294.0, ElectricityDay)),
            (CooktopType::ElectricResistance, ApplianceFactor::new(325.0, ElectricityDay)),
            (CooktopType::PipedGas, ApplianceFactor::new(760.0, NaturalGas)),
            (CooktopType::BottledGas, ApplianceFactor::new(760.0, Lpg)),
        ]);

        let space_heating = HashMap::from([
            (HeatingSource::PipedGasHeater, ApplianceFactor::new(6300.0, NaturalGas)),
            (HeatingSource::BottledGasHeater, ApplianceFactor::new(6300.0, Lpg)),
            (HeatingSource::HeatPump, ApplianceFactor::new(1700.0, ElectricityDay)),
            (HeatingSource::DuctedHeatPump, ApplianceFactor::new(2300.0, ElectricityDay)),
            (HeatingSource::ElectricHeater, ApplianceFactor::new(5000.0, ElectricityDay)),
            (HeatingSource::WoodBurner, ApplianceFactor::new(7500.0, Wood)),
        ]);

        let heating_during_day = HashMap::from([
            (HeatingDuringDay::Never, 0.75),
            (HeatingDuringDay::OneToTwoDays, 0.85),
            (HeatingDuringDay::ThreeToFourDays, 1.0),
            (HeatingDuringDay::FiveToSevenDays, 1.15),
        ]);

        let insulation = HashMap::from([
            (InsulationQuality::NotWellInsulated, 1.25),
            (InsulationQuality::ModeratelyInsulated, 1.0),
            (InsulationQuality::WellInsulated, 0.8),
        ]);

        let hot_water = HashMap::from([
            (HotWaterSource::ElectricCylinder, ApplianceFactor::new(3100.0, ElectricityControlled)),
            (HotWaterSource::PipedGasCylinder, ApplianceFactor::new(4000.0, NaturalGas)),
            (HotWaterSource::PipedGasInstantaneous, ApplianceFactor::new(3300.0, NaturalGas)),
            (HotWaterSource::BottledGasInstantaneous, ApplianceFactor::new(3300.0, Lpg)),
            (HotWaterSource::HeatPump, ApplianceFactor::new(1000.0, ElectricityControlled)),
        ]);

        let hot_water_usage = HashMap::from([
            (HotWaterUsage::Low, 0.7),
            (HotWaterUsage::Average, 1.0),
            (HotWaterUsage::High, 1.3),
        ]);

        let vehicles = HashMap::from([
            (
                VehicleType::Petrol,
                VehicleFactor {
                    petrol_litres_per_100km: 8.0,
                    ..VehicleFactor::default()
                },
            ),
            (
                VehicleType::Diesel,
                VehicleFactor {
                    diesel_litres_per_100km: 7.5,
                    ..VehicleFactor::default()
                },
            ),
            (
                VehicleType::Hybrid,
                VehicleFactor {
                    petrol_litres_per_100km: 5.0,
                    ..VehicleFactor::default()
                },
            ),
            (
                VehicleType::PluginHybrid,
                VehicleFactor {
                    petrol_litres_per_100km: 2.0,
                    kwh_per_100km: 10.0,
                    ..VehicleFactor::default()
                },
            ),
            (
                VehicleType::Electric,
                VehicleFactor {
                    kwh_per_100km: 18.0,
                    ..VehicleFactor::default()
                },
            ),
        ]);

        let vehicle_size = HashMap::from([
            (VehicleSize::Small, 0.8),
            (VehicleSize::Medium, 1.0),
            (VehicleSize::Large, 1.25),
        ]);

        let weekly_distance_km = HashMap::from([
            (WeeklyDistance::FiftyOrLess, 50.0),
            (WeeklyDistance::OneHundred, 100.0),
            (WeeklyDistance::TwoHundred, 200.0),
            (WeeklyDistance::ThreeHundred, 300.0),
            (WeeklyDistance::FourHundredOrMore, 400.0),
        ]);

        let solar_kwh_per_day = HashMap::from([
            (ClimateZone::Cz1, 30.0),
            (ClimateZone::Cz2, 25.0),
            (ClimateZone::Cz3, 20.0),
            (ClimateZone::Cz4, 15.0),
            (ClimateZone::Cz5, 10.0),
            (ClimateZone::Cz6, 5.0),
        ]);

        Self {
            average_household_size: AVERAGE_HOUSEHOLD_SIZE,
            cooktop,
            space_heating,
            heating_during_day,
            insulation,
            hot_water,
            hot_water_usage,
            vehicles,
            vehicle_size,
            weekly_distance_km,
            solar_kwh_per_day,
        }
    }
}

impl Default for EstimationParameters {
    fn default() -> Self {
        Self::standard()
    }
}
