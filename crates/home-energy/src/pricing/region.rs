use super::plan::{ElectricityPlan, TariffPlan};
use crate::household::Choice;
use serde::{Deserialize, Serialize};

/// Climate zone used for solar yield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClimateZone {
    #[serde(rename = "CZ1")]
    Cz1,
    #[serde(rename = "CZ2")]
    Cz2,
    #[serde(rename = "CZ3")]
    Cz3,
    #[serde(rename = "CZ4")]
    Cz4,
    #[serde(rename = "CZ5")]
    Cz5,
    #[serde(rename = "CZ6")]
    Cz6,
}

impl Choice for ClimateZone {
    fn ordered() -> &'static [Self] {
        &[
            Self::Cz1,
            Self::Cz2,
            Self::Cz3,
            Self::Cz4,
            Self::Cz5,
            Self::Cz6,
        ]
    }

    fn label(self) -> &'static str {
        match self {
            Self::Cz1 => "CZ1",
            Self::Cz2 => "CZ2",
            Self::Cz3 => "CZ3",
            Self::Cz4 => "CZ4",
            Self::Cz5 => "CZ5",
            Self::Cz6 => "CZ6",
        }
    }
}

/// Electricity distribution business a postcode is served by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistributionZone {
    #[serde(rename = "EDB1")]
    Edb1,
    #[serde(rename = "EDB2")]
    Edb2,
}

impl DistributionZone {
    pub fn label(self) -> &'static str {
        match self {
            Self::Edb1 => "EDB1",
            Self::Edb2 => "EDB2",
        }
    }
}

/// Maps a postcode to the tariff plan and climate zone applied to it.
///
/// Implementations must be deterministic for a given postcode; the lookup
/// generator caches on that assumption.
pub trait RegionResolver: Send + Sync {
    fn resolve_plan(&self, postcode: &str) -> TariffPlan;
    fn resolve_climate_zone(&self, postcode: &str) -> ClimateZone;
}

/// Placeholder mapping until real distribution-zone data is wired in.
/// Postcode `0000` lands in EDB1/CZ1 with a cheaper day rate; everything
/// else lands in EDB2/CZ2.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubRegionResolver;

impl StubRegionResolver {
    pub fn distribution_zone(&self, postcode: &str) -> DistributionZone {
        if postcode == "0000" {
            DistributionZone::Edb1
        } else {
            DistributionZone::Edb2
        }
    }
}

impl RegionResolver for StubRegionResolver {
    fn resolve_plan(&self, postcode: &str) -> TariffPlan {
        let zone = self.distribution_zone(postcode);
        let nzd_per_day_kwh = match zone {
            DistributionZone::Edb1 => 0.15,
            DistributionZone::Edb2 => 0.20,
        };
        TariffPlan {
            name: format!("Basic Household Energy Plan ({})", zone.label()),
            electricity: ElectricityPlan {
                nzd_per_day_kwh,
                ..ElectricityPlan::basic()
            },
            ..TariffPlan::basic()
        }
    }

    fn resolve_climate_zone(&self, postcode: &str) -> ClimateZone {
        match self.distribution_zone(postcode) {
            DistributionZone::Edb1 => ClimateZone::Cz1,
            DistributionZone::Edb2 => ClimateZone::Cz2,
        }
    }
}
