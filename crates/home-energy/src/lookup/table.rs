use serde::{Deserialize, Serialize};

/// One CSV output, named after the sub-system it prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LookupTable {
    Heating,
    HotWater,
    Cooktop,
    Vehicle,
}

impl LookupTable {
    pub const fn ordered() -> [Self; 4] {
        [Self::Heating, Self::HotWater, Self::Cooktop, Self::Vehicle]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Heating => "heating",
            Self::HotWater => "hot-water",
            Self::Cooktop => "cooktop",
            Self::Vehicle => "vehicle",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Self::Heating => "heating_lookup_table.csv",
            Self::HotWater => "hot_water_lookup_table.csv",
            Self::Cooktop => "cooktop_lookup_table.csv",
            Self::Vehicle => "vehicle_lookup_table.csv",
        }
    }

    /// Answer columns, in the same order the answers report their labels.
    pub fn answer_columns(self) -> &'static [&'static str] {
        match self {
            Self::Heating => &["main_heating_source", "heating_during_day", "insulation_quality"],
            Self::HotWater => &["hot_water_usage", "hot_water_heating_source"],
            Self::Cooktop => &["cooktop_type"],
            Self::Vehicle => &["vehicle_type", "vehicle_size", "km_per_week"],
        }
    }

    pub fn header(self) -> Vec<&'static str> {
        let mut header = vec!["people_in_house", "postcode"];
        header.extend_from_slice(self.answer_columns());
        header.extend_from_slice(&["annual_cost", "annual_co2e"]);
        header
    }
}
