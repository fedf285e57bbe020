use crate::household::{Connection, FuelChannel, FuelUsageProfile};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectricityPlan {
    pub name: String,
    pub nzd_per_day_kwh: f64,
    pub nzd_per_night_kwh: f64,
    pub nzd_per_controlled_kwh: f64,
    pub daily_charge: f64,
}

impl ElectricityPlan {
    pub fn basic() -> Self {
        Self {
            name: "Basic Electricity Plan".to_string(),
            nzd_per_day_kwh: 0.20,
            nzd_per_night_kwh: 0.18,
            nzd_per_controlled_kwh: 0.15,
            daily_charge: 1.25,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NaturalGasPlan {
    pub name: String,
    pub nzd_per_kwh: f64,
    pub daily_charge: f64,
}

impl NaturalGasPlan {
    pub fn basic() -> Self {
        Self {
            name: "Basic Natural Gas Plan".to_string(),
            nzd_per_kwh: 0.10,
            daily_charge: 1.5,
        }
    }
}

/// Bottled gas. The daily charge is the annual bottle rental spread per day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LpgPlan {
    pub name: String,
    pub nzd_per_kwh: f64,
    pub daily_charge: f64,
}

impl LpgPlan {
    pub fn basic() -> Self {
        Self {
            name: "Basic LPG Plan".to_string(),
            nzd_per_kwh: 0.25,
            daily_charge: 80.0 / crate::household::DAYS_IN_YEAR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WoodPrice {
    pub name: String,
    pub nzd_per_kwh: f64,
}

impl WoodPrice {
    pub fn basic() -> Self {
        Self {
            name: "Basic Wood Price".to_string(),
            nzd_per_kwh: 0.10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetrolPrice {
    pub name: String,
    pub nzd_per_litre: f64,
}

impl PetrolPrice {
    pub fn basic() -> Self {
        Self {
            name: "Basic Petrol Price".to_string(),
            nzd_per_litre: 2.80,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DieselPrice {
    pub name: String,
    pub nzd_per_litre: f64,
}

impl DieselPrice {
    pub fn basic() -> Self {
        Self {
            name: "Basic Diesel Price".to_string(),
            nzd_per_litre: 2.10,
        }
    }
}

/// Prices for every fuel channel a household can draw on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TariffPlan {
    pub name: String,
    pub electricity: ElectricityPlan,
    pub natural_gas: NaturalGasPlan,
    pub lpg: LpgPlan,
    pub wood: WoodPrice,
    pub petrol: PetrolPrice,
    pub diesel: DieselPrice,
}

impl TariffPlan {
    pub fn basic() -> Self {
        Self {
            name: "Basic Household Energy Plan".to_string(),
            electricity: ElectricityPlan::basic(),
            natural_gas: NaturalGasPlan::basic(),
            lpg: LpgPlan::basic(),
            wood: WoodPrice::basic(),
            petrol: PetrolPrice::basic(),
            diesel: DieselPrice::basic(),
        }
    }

    pub fn unit_price(&self, channel: FuelChannel) -> f64 {
        match channel {
            FuelChannel::ElectricityDay => self.electricity.nzd_per_day_kwh,
            FuelChannel::ElectricityNight => self.electricity.nzd_per_night_kwh,
            FuelChannel::ElectricityControlled => self.electricity.nzd_per_controlled_kwh,
            FuelChannel::NaturalGas => self.natural_gas.nzd_per_kwh,
            FuelChannel::Lpg => self.lpg.nzd_per_kwh,
            FuelChannel::Wood => self.wood.nzd_per_kwh,
            FuelChannel::Petrol => self.petrol.nzd_per_litre,
            FuelChannel::Diesel => self.diesel.nzd_per_litre,
        }
    }

    pub fn daily_charge(&self, connection: Connection) -> f64 {
        match connection {
            Connection::Electricity => self.electricity.daily_charge,
            Connection::NaturalGas => self.natural_gas.daily_charge,
            Connection::LpgTanks => self.lpg.daily_charge,
        }
    }

    /// Annual cost in NZD. Not rounded.
    pub fn cost(&self, profile: &FuelUsageProfile) -> f64 {
        let variable: f64 = FuelChannel::ordered()
            .into_iter()
            .map(|channel| profile.usage(channel) * self.unit_price(channel))
            .sum();
        let fixed: f64 = Connection::ordered()
            .into_iter()
            .map(|connection| profile.connection_days(connection) * self.daily_charge(connection))
            .sum();
        variable + fixed
    }
}

impl Default for TariffPlan {
    fn default() -> Self {
        Self::basic()
    }
}
