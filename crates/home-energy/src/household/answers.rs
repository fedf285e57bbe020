use super::choices::{
    Choice, CooktopType, HeatingDuringDay, HeatingSource, HotWaterSource, HotWaterUsage,
    InsulationQuality, VehicleSize, VehicleType, WeeklyDistance,
};
use super::defaults;
use super::estimate::EstimateUsage;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_PEOPLE_IN_HOUSE: u8 = 1;
pub const MAX_PEOPLE_IN_HOUSE: u8 = 6;

/// Answers about the home itself. Validated on construction and on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "YourHomeInput")]
pub struct YourHome {
    people_in_house: u8,
    postcode: String,
}

#[derive(Deserialize)]
struct YourHomeInput {
    people_in_house: u8,
    postcode: String,
}

impl TryFrom<YourHomeInput> for YourHome {
    type Error = AnswerError;

    fn try_from(input: YourHomeInput) -> Result<Self, Self::Error> {
        Self::new(input.people_in_house, &input.postcode)
    }
}

impl YourHome {
    pub fn new(people_in_house: u8, postcode: &str) -> Result<Self, AnswerError> {
        if !(MIN_PEOPLE_IN_HOUSE..=MAX_PEOPLE_IN_HOUSE).contains(&people_in_house) {
            return Err(AnswerError::PeopleOutOfRange(people_in_house));
        }

        let postcode = postcode.trim();
        if postcode.len() != 4 || !postcode.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AnswerError::InvalidPostcode(postcode.to_string()));
        }

        Ok(Self {
            people_in_house,
            postcode: postcode.to_string(),
        })
    }

    /// Builds a home from values already known to be in range.
    pub(super) fn from_parts(people_in_house: u8, postcode: &str) -> Self {
        Self {
            people_in_house,
            postcode: postcode.to_string(),
        }
    }

    pub fn people_in_house(&self) -> u8 {
        self.people_in_house
    }

    pub fn postcode(&self) -> &str {
        &self.postcode
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    #[error("people_in_house must be between 1 and 6, got {0}")]
    PeopleOutOfRange(u8),
    #[error("postcode must be four digits, got '{0}'")]
    InvalidPostcode(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatingAnswers {
    pub main_heating_source: HeatingSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_main_heating_source: Option<HeatingSource>,
    pub heating_during_day: HeatingDuringDay,
    pub insulation_quality: InsulationQuality,
}

impl HeatingAnswers {
    pub fn with_main_heating_source(&self, value: HeatingSource) -> Self {
        Self {
            main_heating_source: value,
            ..self.clone()
        }
    }

    pub fn with_heating_during_day(&self, value: HeatingDuringDay) -> Self {
        Self {
            heating_during_day: value,
            ..self.clone()
        }
    }

    pub fn with_insulation_quality(&self, value: InsulationQuality) -> Self {
        Self {
            insulation_quality: value,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotWaterAnswers {
    pub hot_water_usage: HotWaterUsage,
    pub hot_water_heating_source: HotWaterSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_hot_water_heating_source: Option<HotWaterSource>,
}

impl HotWaterAnswers {
    pub fn with_hot_water_usage(&self, value: HotWaterUsage) -> Self {
        Self {
            hot_water_usage: value,
            ..self.clone()
        }
    }

    pub fn with_hot_water_heating_source(&self, value: HotWaterSource) -> Self {
        Self {
            hot_water_heating_source: value,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CooktopAnswers {
    pub cooktop: CooktopType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_cooktop: Option<CooktopType>,
}

impl CooktopAnswers {
    pub fn with_cooktop(&self, value: CooktopType) -> Self {
        Self {
            cooktop: value,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrivingAnswers {
    pub vehicle_type: VehicleType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_vehicle_type: Option<VehicleType>,
    pub vehicle_size: VehicleSize,
    pub km_per_week: WeeklyDistance,
}

impl DrivingAnswers {
    pub fn with_vehicle_type(&self, value: VehicleType) -> Self {
        Self {
            vehicle_type: value,
            ..self.clone()
        }
    }

    pub fn with_vehicle_size(&self, value: VehicleSize) -> Self {
        Self {
            vehicle_size: value,
            ..self.clone()
        }
    }

    pub fn with_km_per_week(&self, value: WeeklyDistance) -> Self {
        Self {
            km_per_week: value,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolarAnswers {
    #[serde(rename = "hasSolar")]
    pub has_solar: bool,
}

/// Everything a user may have submitted. Any section can be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HouseholdAnswers {
    pub your_home: Option<YourHome>,
    pub heating: Option<HeatingAnswers>,
    pub hot_water: Option<HotWaterAnswers>,
    pub cooktop: Option<CooktopAnswers>,
    pub driving: Option<DrivingAnswers>,
    pub solar: Option<SolarAnswers>,
}

impl HouseholdAnswers {
    /// Fill missing sections with the standard defaults.
    pub fn resolve(self) -> Household {
        Household {
            your_home: self.your_home.unwrap_or_else(defaults::your_home),
            heating: self.heating.unwrap_or_else(defaults::heating),
            hot_water: self.hot_water.unwrap_or_else(defaults::hot_water),
            cooktop: self.cooktop.unwrap_or_else(defaults::cooktop),
            driving: self.driving.unwrap_or_else(defaults::driving),
            solar: self.solar.unwrap_or_else(defaults::solar),
        }
    }
}

/// A complete household: every sub-system answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Household {
    pub your_home: YourHome,
    pub heating: HeatingAnswers,
    pub hot_water: HotWaterAnswers,
    pub cooktop: CooktopAnswers,
    pub driving: DrivingAnswers,
    pub solar: SolarAnswers,
}

impl Household {
    /// The same household with every supplied `alternative_*` answer applied.
    pub fn switched(&self) -> Self {
        Self {
            your_home: self.your_home.clone(),
            heating: self.heating.switched().unwrap_or_else(|| self.heating.clone()),
            hot_water: self
                .hot_water
                .switched()
                .unwrap_or_else(|| self.hot_water.clone()),
            cooktop: self.cooktop.switched().unwrap_or_else(|| self.cooktop.clone()),
            driving: self.driving.switched().unwrap_or_else(|| self.driving.clone()),
            solar: self.solar,
        }
    }
}

/// One what-if value for a categorical field, with the answers it produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<A> {
    pub label: &'static str,
    pub answers: A,
}

fn candidates<C: Choice, A>(build: impl Fn(C) -> A) -> Vec<Candidate<A>> {
    C::ordered()
        .iter()
        .map(|&value| Candidate {
            label: value.label(),
            answers: build(value),
        })
        .collect()
}

/// Sub-system answers whose categorical fields can be swapped one at a time.
pub trait SwitchableAnswers: EstimateUsage + Clone + Send + Sync + 'static {
    /// Closed set of categorical field names on the answers.
    type Field: Copy + fmt::Debug + DeserializeOwned + Send + Sync + 'static;

    const SUBSYSTEM: &'static str;
    /// The fuel-choice field offered as a switching option by default.
    const PRIMARY_FIELD: Self::Field;
    /// Every categorical field, in declaration order.
    const FIELDS: &'static [Self::Field];

    /// Every legal value of `field`, current value included, in declared order.
    fn candidates(&self, field: Self::Field) -> Vec<Candidate<Self>>;

    /// The answers with the primary field set to the submitted alternative, if any.
    fn switched(&self) -> Option<Self>;

    /// Label of the current value of `field`.
    fn field_label(&self, field: Self::Field) -> &'static str;

    /// Labels of every categorical field, in declaration order.
    fn labels(&self) -> Vec<&'static str> {
        Self::FIELDS
            .iter()
            .map(|field| self.field_label(*field))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatingField {
    MainHeatingSource,
    HeatingDuringDay,
    InsulationQuality,
}

impl SwitchableAnswers for HeatingAnswers {
    type Field = HeatingField;

    const SUBSYSTEM: &'static str = "heating";
    const PRIMARY_FIELD: HeatingField = HeatingField::MainHeatingSource;
    const FIELDS: &'static [HeatingField] = &[
        HeatingField::MainHeatingSource,
        HeatingField::HeatingDuringDay,
        HeatingField::InsulationQuality,
    ];

    fn candidates(&self, field: HeatingField) -> Vec<Candidate<Self>> {
        match field {
            HeatingField::MainHeatingSource => candidates(|v| self.with_main_heating_source(v)),
            HeatingField::HeatingDuringDay => candidates(|v| self.with_heating_during_day(v)),
            HeatingField::InsulationQuality => candidates(|v| self.with_insulation_quality(v)),
        }
    }

    fn switched(&self) -> Option<Self> {
        self.alternative_main_heating_source
            .map(|source| self.with_main_heating_source(source))
    }

    fn field_label(&self, field: HeatingField) -> &'static str {
        match field {
            HeatingField::MainHeatingSource => self.main_heating_source.label(),
            HeatingField::HeatingDuringDay => self.heating_during_day.label(),
            HeatingField::InsulationQuality => self.insulation_quality.label(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotWaterField {
    HotWaterUsage,
    HotWaterHeatingSource,
}

impl SwitchableAnswers for HotWaterAnswers {
    type Field = HotWaterField;

    const SUBSYSTEM: &'static str = "hot_water";
    const PRIMARY_FIELD: HotWaterField = HotWaterField::HotWaterHeatingSource;
    const FIELDS: &'static [HotWaterField] = &[
        HotWaterField::HotWaterUsage,
        HotWaterField::HotWaterHeatingSource,
    ];

    fn candidates(&self, field: HotWaterField) -> Vec<Candidate<Self>> {
        match field {
            HotWaterField::HotWaterUsage => candidates(|v| self.with_hot_water_usage(v)),
            HotWaterField::HotWaterHeatingSource => {
                candidates(|v| self.with_hot_water_heating_source(v))
            }
        }
    }

    fn switched(&self) -> Option<Self> {
        self.alternative_hot_water_heating_source
            .map(|source| self.with_hot_water_heating_source(source))
    }

    fn field_label(&self, field: HotWaterField) -> &'static str {
        match field {
            HotWaterField::HotWaterUsage => self.hot_water_usage.label(),
            HotWaterField::HotWaterHeatingSource => self.hot_water_heating_source.label(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CooktopField {
    Cooktop,
}

impl SwitchableAnswers for CooktopAnswers {
    type Field = CooktopField;

    const SUBSYSTEM: &'static str = "cooktop";
    const PRIMARY_FIELD: CooktopField = CooktopField::Cooktop;
    const FIELDS: &'static [CooktopField] = &[CooktopField::Cooktop];

    fn candidates(&self, field: CooktopField) -> Vec<Candidate<Self>> {
        match field {
            CooktopField::Cooktop => candidates(|v| self.with_cooktop(v)),
        }
    }

    fn switched(&self) -> Option<Self> {
        self.alternative_cooktop.map(|cooktop| self.with_cooktop(cooktop))
    }

    fn field_label(&self, field: CooktopField) -> &'static str {
        match field {
            CooktopField::Cooktop => self.cooktop.label(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrivingField {
    VehicleType,
    VehicleSize,
    KmPerWeek,
}

impl SwitchableAnswers for DrivingAnswers {
    type Field = DrivingField;

    const SUBSYSTEM: &'static str = "driving";
    const PRIMARY_FIELD: DrivingField = DrivingField::VehicleType;
    const FIELDS: &'static [DrivingField] = &[
        DrivingField::VehicleType,
        DrivingField::VehicleSize,
        DrivingField::KmPerWeek,
    ];

    fn candidates(&self, field: DrivingField) -> Vec<Candidate<Self>> {
        match field {
            DrivingField::VehicleType => candidates(|v| self.with_vehicle_type(v)),
            DrivingField::VehicleSize => candidates(|v| self.with_vehicle_size(v)),
            DrivingField::KmPerWeek => candidates(|v| self.with_km_per_week(v)),
        }
    }

    fn switched(&self) -> Option<Self> {
        self.alternative_vehicle_type
            .map(|vehicle| self.with_vehicle_type(vehicle))
    }

    fn field_label(&self, field: DrivingField) -> &'static str {
        match field {
            DrivingField::VehicleType => self.vehicle_type.label(),
            DrivingField::VehicleSize => self.vehicle_size.label(),
            DrivingField::KmPerWeek => self.km_per_week.label(),
        }
    }
}
