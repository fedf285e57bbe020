use crate::infra::{load_answers, standard_service};
use clap::{Args, ValueEnum};
use home_energy::config::AppConfig;
use home_energy::error::AppError;
use home_energy::household::Choice;
use home_energy::lookup::{LookupGenerator, LookupTable, DEFAULT_POSTCODES};
use home_energy::telemetry;
use home_energy::HouseholdReport;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Args, Debug, Default)]
pub(crate) struct EstimateArgs {
    /// JSON file with questionnaire answers; missing sections use defaults
    #[arg(long)]
    pub(crate) answers: Option<PathBuf>,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct LookupArgs {
    /// Directory for the CSV tables (defaults to APP_LOOKUP_DIR)
    #[arg(long)]
    pub(crate) output_dir: Option<PathBuf>,
    /// First postcode to include
    #[arg(
        long,
        default_value_t = DEFAULT_POSTCODES.start,
        value_parser = clap::value_parser!(u16).range(0..10000)
    )]
    pub(crate) postcode_start: u16,
    /// Postcode after the last one included
    #[arg(
        long,
        default_value_t = DEFAULT_POSTCODES.end,
        value_parser = clap::value_parser!(u16).range(0..=10000)
    )]
    pub(crate) postcode_end: u16,
    /// Which table to generate
    #[arg(long, value_enum, default_value_t = TableChoice::All)]
    pub(crate) table: TableChoice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum TableChoice {
    Heating,
    HotWater,
    Cooktop,
    Vehicle,
    All,
}

impl TableChoice {
    fn tables(self) -> Vec<LookupTable> {
        match self {
            Self::Heating => vec![LookupTable::Heating],
            Self::HotWater => vec![LookupTable::HotWater],
            Self::Cooktop => vec![LookupTable::Cooktop],
            Self::Vehicle => vec![LookupTable::Vehicle],
            Self::All => LookupTable::ordered().to_vec(),
        }
    }
}

pub(crate) fn run_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let answers = load_answers(args.answers.as_deref())?;
    let report = standard_service().household_report(answers)?;

    if args.json {
        let rendered = serde_json::to_string_pretty(&report).map_err(AppError::Render)?;
        println!("{rendered}");
    } else {
        render_household_report(&report);
    }
    Ok(())
}

pub(crate) fn run_lookup(args: LookupArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let output_dir = args.output_dir.unwrap_or(config.lookup.output_dir);
    let postcodes = args.postcode_start..args.postcode_end;
    if postcodes.is_empty() {
        warn!(?postcodes, "empty postcode range; tables will only contain headers");
    }

    let service = standard_service();
    let mut generator = LookupGenerator::with_postcodes(&service, postcodes);
    for table in args.table.tables() {
        generator.write_file(table, &output_dir)?;
    }

    let stats = generator.cache_stats();
    info!(
        region_hits = stats.region_hits,
        region_misses = stats.region_misses,
        result_hits = stats.result_hits,
        result_misses = stats.result_misses,
        "lookup generation finished"
    );
    println!("Lookup tables written to {}", output_dir.display());
    Ok(())
}

pub(crate) fn render_household_report(report: &HouseholdReport) {
    println!("Household energy report");
    println!(
        "Plan: {} (climate zone {})",
        report.plan_name,
        report.climate_zone.label()
    );

    println!("\nCurrent household");
    println!("- Annual cost: ${:.2}", report.current.cost);
    println!("- Annual emissions: {:.1} kg CO2e", report.current.emissions);

    let profile = &report.usage_profile;
    println!("\nYearly usage");
    println!(
        "- Electricity: {:.0} kWh day, {:.0} kWh night, {:.0} kWh controlled",
        profile.day_kwh, profile.night_kwh, profile.controlled_kwh
    );
    println!("- Natural gas: {:.0} kWh", profile.natural_gas_kwh);
    println!("- LPG: {:.0} kWh", profile.lpg_kwh);
    println!("- Wood: {:.0} kWh", profile.wood_kwh);
    println!(
        "- Vehicle fuel: {:.0} L petrol, {:.0} L diesel",
        profile.petrol_litres, profile.diesel_litres
    );

    println!("\nSwitching savings");
    for (name, savings) in [
        ("Heating", &report.heating),
        ("Hot water", &report.hot_water),
        ("Cooktop", &report.cooktop),
        ("Driving", &report.driving),
    ] {
        if savings.switched {
            println!(
                "- {}: ${:.2} per year, {:.1}% less emissions",
                name, savings.savings, savings.emissions_reduction_percentage
            );
        } else {
            println!("- {}: no alternative given", name);
        }
    }

    println!(
        "\nOverall: ${:.2} per year, {:.1}% less emissions",
        report.overall.savings, report.overall.emissions_reduction_percentage
    );
}
