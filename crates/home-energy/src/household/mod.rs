//! Questionnaire answers and the yearly fuel usage they imply.

pub mod aggregate;
pub mod answers;
pub mod choices;
pub mod defaults;
pub mod estimate;
pub mod profile;

pub use aggregate::{aggregate, household_profile, ChannelPresence};
pub use answers::{
    AnswerError, Candidate, CooktopAnswers, CooktopField, DrivingAnswers, DrivingField,
    HeatingAnswers, HeatingField, HotWaterAnswers, HotWaterField, Household, HouseholdAnswers,
    SolarAnswers, SwitchableAnswers, YourHome, MAX_PEOPLE_IN_HOUSE, MIN_PEOPLE_IN_HOUSE,
};
pub use choices::{
    Choice, CooktopType, HeatingDuringDay, HeatingSource, HotWaterSource, HotWaterUsage,
    InsulationQuality, VehicleSize, VehicleType, WeeklyDistance,
};
pub use estimate::{
    ApplianceFactor, EstimateError, EstimateUsage, EstimationContext, EstimationParameters,
    VehicleFactor,
};
pub use profile::{Connection, FuelChannel, FuelUsageProfile};

pub const DAYS_IN_YEAR: f64 = 365.25;
pub const WEEKS_IN_YEAR: f64 = DAYS_IN_YEAR / 7.0;
/// Mean New Zealand household size; converter tables are quoted for this size.
pub const AVERAGE_HOUSEHOLD_SIZE: f64 = 2.69;
