use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// Closed set of questionnaire answers for one categorical field.
///
/// `ordered` lists every legal value in the order the questionnaire presents
/// them, which is also the order savings options are reported in.
pub trait Choice: Copy + Eq + Hash + fmt::Debug + 'static {
    fn ordered() -> &'static [Self];
    fn label(self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeatingSource {
    #[serde(rename = "Piped gas heater")]
    PipedGasHeater,
    #[serde(rename = "Bottled gas heater")]
    BottledGasHeater,
    #[serde(rename = "Heat pump")]
    HeatPump,
    #[serde(rename = "Heat pump (ducted)")]
    DuctedHeatPump,
    #[serde(rename = "Electric heater")]
    ElectricHeater,
    #[serde(rename = "Wood burner")]
    WoodBurner,
}

impl Choice for HeatingSource {
    fn ordered() -> &'static [Self] {
        &[
            Self::PipedGasHeater,
            Self::BottledGasHeater,
            Self::HeatPump,
            Self::DuctedHeatPump,
            Self::ElectricHeater,
            Self::WoodBurner,
        ]
    }

    fn label(self) -> &'static str {
        match self {
            Self::PipedGasHeater => "Piped gas heater",
            Self::BottledGasHeater => "Bottled gas heater",
            Self::HeatPump => "Heat pump",
            Self::DuctedHeatPump => "Heat pump (ducted)",
            Self::ElectricHeater => "Electric heater",
            Self::WoodBurner => "Wood burner",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeatingDuringDay {
    #[serde(rename = "Never")]
    Never,
    #[serde(rename = "1-2 days a week")]
    OneToTwoDays,
    #[serde(rename = "3-4 days a week")]
    ThreeToFourDays,
    #[serde(rename = "5-7 days a week")]
    FiveToSevenDays,
}

impl Choice for HeatingDuringDay {
    fn ordered() -> &'static [Self] {
        &[
            Self::Never,
            Self::OneToTwoDays,
            Self::ThreeToFourDays,
            Self::FiveToSevenDays,
        ]
    }

    fn label(self) -> &'static str {
        match self {
            Self::Never => "Never",
            Self::OneToTwoDays => "1-2 days a week",
            Self::ThreeToFourDays => "3-4 days a week",
            Self::FiveToSevenDays => "5-7 days a week",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InsulationQuality {
    #[serde(rename = "Not well insulated")]
    NotWellInsulated,
    #[serde(rename = "Moderately insulated")]
    ModeratelyInsulated,
    #[serde(rename = "Well insulated")]
    WellInsulated,
}

impl Choice for InsulationQuality {
    fn ordered() -> &'static [Self] {
        &[
            Self::NotWellInsulated,
            Self::ModeratelyInsulated,
            Self::WellInsulated,
        ]
    }

    fn label(self) -> &'static str {
        match self {
            Self::NotWellInsulated => "Not well insulated",
            Self::ModeratelyInsulated => "Moderately insulated",
            Self::WellInsulated => "Well insulated",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HotWaterUsage {
    Low,
    Average,
    High,
}

impl Choice for HotWaterUsage {
    fn ordered() -> &'static [Self] {
        &[Self::Low, Self::Average, Self::High]
    }

    fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Average => "Average",
            Self::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HotWaterSource {
    #[serde(rename = "Electric hot water cylinder")]
    ElectricCylinder,
    #[serde(rename = "Piped gas hot water cylinder")]
    PipedGasCylinder,
    #[serde(rename = "Piped gas instantaneous")]
    PipedGasInstantaneous,
    #[serde(rename = "Bottled gas instantaneous")]
    BottledGasInstantaneous,
    #[serde(rename = "Hot water heat pump")]
    HeatPump,
}

impl Choice for HotWaterSource {
    fn ordered() -> &'static [Self] {
        &[
            Self::ElectricCylinder,
            Self::PipedGasCylinder,
            Self::PipedGasInstantaneous,
            Self::BottledGasInstantaneous,
            Self::HeatPump,
        ]
    }

    fn label(self) -> &'static str {
        match self {
            Self::ElectricCylinder => "Electric hot water cylinder",
            Self::PipedGasCylinder => "Piped gas hot water cylinder",
            Self::PipedGasInstantaneous => "Piped gas instantaneous",
            Self::BottledGasInstantaneous => "Bottled gas instantaneous",
            Self::HeatPump => "Hot water heat pump",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CooktopType {
    #[serde(rename = "Electric induction")]
    ElectricInduction,
    #[serde(rename = "Piped gas")]
    PipedGas,
    #[serde(rename = "Bottled gas")]
    BottledGas,
    #[serde(rename = "Electric (coil or ceramic)")]
    ElectricResistance,
}

impl Choice for CooktopType {
    fn ordered() -> &'static [Self] {
        &[
            Self::ElectricInduction,
            Self::PipedGas,
            Self::BottledGas,
            Self::ElectricResistance,
        ]
    }

    fn label(self) -> &'static str {
        match self {
            Self::ElectricInduction => "Electric induction",
            Self::PipedGas => "Piped gas",
            Self::BottledGas => "Bottled gas",
            Self::ElectricResistance => "Electric (coil or ceramic)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleType {
    Petrol,
    Diesel,
    Hybrid,
    #[serde(rename = "Plug-in hybrid")]
    PluginHybrid,
    Electric,
}

impl Choice for VehicleType {
    fn ordered() -> &'static [Self] {
        &[
            Self::Petrol,
            Self::Diesel,
            Self::Hybrid,
            Self::PluginHybrid,
            Self::Electric,
        ]
    }

    fn label(self) -> &'static str {
        match self {
            Self::Petrol => "Petrol",
            Self::Diesel => "Diesel",
            Self::Hybrid => "Hybrid",
            Self::PluginHybrid => "Plug-in hybrid",
            Self::Electric => "Electric",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleSize {
    Small,
    Medium,
    Large,
}

impl Choice for VehicleSize {
    fn ordered() -> &'static [Self] {
        &[Self::Small, Self::Medium, Self::Large]
    }

    fn label(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeeklyDistance {
    #[serde(rename = "50 or less")]
    FiftyOrLess,
    #[serde(rename = "100")]
    OneHundred,
    #[serde(rename = "200")]
    TwoHundred,
    #[serde(rename = "300")]
    ThreeHundred,
    #[serde(rename = "400 or more")]
    FourHundredOrMore,
}

impl Choice for WeeklyDistance {
    fn ordered() -> &'static [Self] {
        &[
            Self::FiftyOrLess,
            Self::OneHundred,
            Self::TwoHundred,
            Self::ThreeHundred,
            Self::FourHundredOrMore,
        ]
    }

    fn label(self) -> &'static str {
        match self {
            Self::FiftyOrLess => "50 or less",
            Self::OneHundred => "100",
            Self::TwoHundred => "200",
            Self::ThreeHundred => "300",
            Self::FourHundredOrMore => "400 or more",
        }
    }
}
