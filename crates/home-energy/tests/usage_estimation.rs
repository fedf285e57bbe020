use approx::assert_relative_eq;
use home_energy::household::{
    aggregate, defaults, ChannelPresence, CooktopAnswers, CooktopType, DrivingAnswers,
    EstimateUsage, EstimationContext, EstimationParameters, FuelChannel, FuelUsageProfile,
    HeatingAnswers, HeatingDuringDay, HeatingSource, HotWaterAnswers, HotWaterSource,
    HotWaterUsage, InsulationQuality, SolarAnswers, VehicleSize, VehicleType, WeeklyDistance,
    YourHome, DAYS_IN_YEAR,
};
use home_energy::pricing::{ClimateZone, RegionResolver, StubRegionResolver};

fn context_for<'a>(parameters: &'a EstimationParameters, home: &YourHome) -> EstimationContext<'a> {
    EstimationContext::new(
        parameters,
        StubRegionResolver.resolve_climate_zone(home.postcode()),
    )
}

#[test]
fn piped_gas_cooktop_for_four_people() {
    let parameters = EstimationParameters::standard();
    let home = YourHome::new(4, "0000").expect("valid home");
    let cooktop = CooktopAnswers {
        cooktop: CooktopType::PipedGas,
        alternative_cooktop: None,
    };

    let profile = cooktop
        .estimate(&home, &context_for(&parameters, &home))
        .expect("cooktop estimates");

    assert_relative_eq!(profile.natural_gas_kwh, 1030.0, max_relative = 0.01);
    assert_eq!(profile.natural_gas_connection_days, DAYS_IN_YEAR);
    assert_eq!(profile.total_electricity_kwh(), 0.0);
    assert_eq!(profile.elx_connection_days, 0.0);
    assert_eq!(profile.lpg_kwh, 0.0);
    assert_eq!(profile.lpg_tank_rental_days, 0.0);
}

#[test]
fn heating_scales_with_household_and_habits() {
    let parameters = EstimationParameters::standard();
    let small = YourHome::new(1, "0000").expect("valid home");
    let large = YourHome::new(6, "0000").expect("valid home");
    let heating = HeatingAnswers {
        main_heating_source: HeatingSource::HeatPump,
        alternative_main_heating_source: None,
        heating_during_day: HeatingDuringDay::FiveToSevenDays,
        insulation_quality: InsulationQuality::NotWellInsulated,
    };

    let small_profile = heating
        .estimate(&small, &context_for(&parameters, &small))
        .expect("heating estimates");
    let large_profile = heating
        .estimate(&large, &context_for(&parameters, &large))
        .expect("heating estimates");

    assert_relative_eq!(
        large_profile.day_kwh / small_profile.day_kwh,
        7.0 / 2.0,
        max_relative = 1e-9
    );
    let expected = 1700.0 * 1.15 * 1.25 * (2.0 / 3.69);
    assert_relative_eq!(small_profile.day_kwh, expected, max_relative = 1e-9);
}

#[test]
fn wood_burner_uses_the_wood_channel_without_a_connection() {
    let parameters = EstimationParameters::standard();
    let home = defaults::your_home();
    let heating = defaults::heating().with_main_heating_source(HeatingSource::WoodBurner);

    let profile = heating
        .estimate(&home, &context_for(&parameters, &home))
        .expect("heating estimates");

    assert!(profile.wood_kwh > 0.0);
    assert_eq!(profile.elx_connection_days, 0.0);
    assert_eq!(profile.natural_gas_connection_days, 0.0);
}

#[test]
fn hot_water_heat_pump_uses_controlled_rate() {
    let parameters = EstimationParameters::standard();
    let home = defaults::your_home();
    let hot_water = HotWaterAnswers {
        hot_water_usage: HotWaterUsage::High,
        hot_water_heating_source: HotWaterSource::HeatPump,
        alternative_hot_water_heating_source: None,
    };

    let profile = hot_water
        .estimate(&home, &context_for(&parameters, &home))
        .expect("hot water estimates");

    assert!(profile.controlled_kwh > 0.0);
    assert_eq!(profile.day_kwh, 0.0);
    assert_eq!(profile.elx_connection_days, DAYS_IN_YEAR);
}

#[test]
fn plug_in_hybrid_draws_petrol_and_overnight_electricity() {
    let parameters = EstimationParameters::standard();
    let home = defaults::your_home();
    let driving = DrivingAnswers {
        vehicle_type: VehicleType::PluginHybrid,
        alternative_vehicle_type: None,
        vehicle_size: VehicleSize::Large,
        km_per_week: WeeklyDistance::OneHundred,
    };

    let context = context_for(&parameters, &home);
    let profile = driving.estimate(&home, &context).expect("driving estimates");

    let scale = context.household_scale(&home);
    let hundreds_of_km = 100.0 * DAYS_IN_YEAR / 7.0 / 100.0 * 1.25 * scale;
    assert_relative_eq!(profile.petrol_litres, 2.0 * hundreds_of_km, max_relative = 1e-9);
    assert_relative_eq!(profile.night_kwh, 10.0 * hundreds_of_km, max_relative = 1e-9);
    assert_eq!(profile.diesel_litres, 0.0);
}

#[test]
fn solar_yield_depends_on_climate_zone() {
    let parameters = EstimationParameters::standard();
    let solar = SolarAnswers { has_solar: true };
    let north = YourHome::new(2, "0000").expect("valid home");
    let south = YourHome::new(2, "9016").expect("valid home");

    let north_profile = solar
        .estimate(&north, &context_for(&parameters, &north))
        .expect("solar estimates");
    let south_profile = solar
        .estimate(&south, &context_for(&parameters, &south))
        .expect("solar estimates");

    assert_relative_eq!(north_profile.day_kwh, -30.0 * DAYS_IN_YEAR);
    assert_relative_eq!(south_profile.day_kwh, -25.0 * DAYS_IN_YEAR);

    let without = SolarAnswers { has_solar: false }
        .estimate(&north, &EstimationContext::new(&parameters, ClimateZone::Cz6))
        .expect("solar estimates");
    assert_eq!(without, FuelUsageProfile::default());
}

#[test]
fn aggregating_one_profile_reproduces_its_usage() {
    let parameters = EstimationParameters::standard();
    let home = defaults::your_home();
    let profile = defaults::hot_water()
        .with_hot_water_heating_source(HotWaterSource::BottledGasInstantaneous)
        .estimate(&home, &context_for(&parameters, &home))
        .expect("hot water estimates");

    let profiles = [profile];
    let household = aggregate(&profiles, ChannelPresence::from_profiles(&profiles));

    for channel in FuelChannel::ordered() {
        assert_eq!(household.usage(channel), profile.usage(channel), "{channel:?}");
    }
    assert_eq!(household.lpg_tank_rental_days, profile.lpg_tank_rental_days);
}

#[test]
fn unrecognized_category_names_the_value() {
    let mut parameters = EstimationParameters::standard();
    parameters.hot_water.remove(&HotWaterSource::PipedGasCylinder);
    let home = defaults::your_home();
    let hot_water = defaults::hot_water()
        .with_hot_water_heating_source(HotWaterSource::PipedGasCylinder);

    let error = hot_water
        .estimate(&home, &context_for(&parameters, &home))
        .expect_err("missing entry fails");

    assert!(error.to_string().contains("Piped gas hot water cylinder"));
}
