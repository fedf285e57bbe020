use super::DAYS_IN_YEAR;
use serde::{Deserialize, Serialize};

/// One priced and (possibly) emitting energy carrier.
///
/// Every channel has a matching usage field on [`FuelUsageProfile`], a unit
/// price on the tariff plan, and an emissions source. The matches over this
/// enum are exhaustive, so adding a channel fails to compile until all three
/// are extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelChannel {
    ElectricityDay,
    ElectricityNight,
    ElectricityControlled,
    NaturalGas,
    Lpg,
    Wood,
    Petrol,
    Diesel,
}

impl FuelChannel {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::ElectricityDay,
            Self::ElectricityNight,
            Self::ElectricityControlled,
            Self::NaturalGas,
            Self::Lpg,
            Self::Wood,
            Self::Petrol,
            Self::Diesel,
        ]
    }

    /// Fixed-charge connection a household needs to draw on this channel.
    pub const fn connection(self) -> Option<Connection> {
        match self {
            Self::ElectricityDay | Self::ElectricityNight | Self::ElectricityControlled => {
                Some(Connection::Electricity)
            }
            Self::NaturalGas => Some(Connection::NaturalGas),
            Self::Lpg => Some(Connection::LpgTanks),
            Self::Wood | Self::Petrol | Self::Diesel => None,
        }
    }
}

/// Connections that carry a daily charge independent of consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Connection {
    Electricity,
    NaturalGas,
    LpgTanks,
}

impl Connection {
    pub const fn ordered() -> [Self; 3] {
        [Self::Electricity, Self::NaturalGas, Self::LpgTanks]
    }

    /// Chargeable days per year once the connection exists. LPG is billed
    /// per bottle and households rotate two bottles.
    pub fn yearly_days(self) -> f64 {
        match self {
            Self::Electricity | Self::NaturalGas => DAYS_IN_YEAR,
            Self::LpgTanks => 2.0 * DAYS_IN_YEAR,
        }
    }
}

/// Annual consumption per fuel channel plus fixed-connection day counts.
///
/// Used both for a single sub-system (heating, cooktop, ...) and for the
/// aggregated household. Solar generation shows up as negative `day_kwh`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FuelUsageProfile {
    pub elx_connection_days: f64,
    pub day_kwh: f64,
    pub night_kwh: f64,
    pub controlled_kwh: f64,
    pub natural_gas_connection_days: f64,
    pub natural_gas_kwh: f64,
    pub lpg_tank_rental_days: f64,
    pub lpg_kwh: f64,
    pub wood_kwh: f64,
    pub petrol_litres: f64,
    pub diesel_litres: f64,
}

impl FuelUsageProfile {
    pub fn usage(&self, channel: FuelChannel) -> f64 {
        match channel {
            FuelChannel::ElectricityDay => self.day_kwh,
            FuelChannel::ElectricityNight => self.night_kwh,
            FuelChannel::ElectricityControlled => self.controlled_kwh,
            FuelChannel::NaturalGas => self.natural_gas_kwh,
            FuelChannel::Lpg => self.lpg_kwh,
            FuelChannel::Wood => self.wood_kwh,
            FuelChannel::Petrol => self.petrol_litres,
            FuelChannel::Diesel => self.diesel_litres,
        }
    }

    pub fn connection_days(&self, connection: Connection) -> f64 {
        match connection {
            Connection::Electricity => self.elx_connection_days,
            Connection::NaturalGas => self.natural_gas_connection_days,
            Connection::LpgTanks => self.lpg_tank_rental_days,
        }
    }

    /// Returns a copy with `amount` added to `channel`.
    pub fn with_usage(mut self, channel: FuelChannel, amount: f64) -> Self {
        let field = match channel {
            FuelChannel::ElectricityDay => &mut self.day_kwh,
            FuelChannel::ElectricityNight => &mut self.night_kwh,
            FuelChannel::ElectricityControlled => &mut self.controlled_kwh,
            FuelChannel::NaturalGas => &mut self.natural_gas_kwh,
            FuelChannel::Lpg => &mut self.lpg_kwh,
            FuelChannel::Wood => &mut self.wood_kwh,
            FuelChannel::Petrol => &mut self.petrol_litres,
            FuelChannel::Diesel => &mut self.diesel_litres,
        };
        *field += amount;
        self
    }

    /// Returns a copy with `connection` set to `days`.
    pub fn with_connection_days(mut self, connection: Connection, days: f64) -> Self {
        match connection {
            Connection::Electricity => self.elx_connection_days = days,
            Connection::NaturalGas => self.natural_gas_connection_days = days,
            Connection::LpgTanks => self.lpg_tank_rental_days = days,
        }
        self
    }

    /// Returns a copy drawing `amount` from `channel`, with that channel's
    /// connection (if any) held for the full year.
    pub fn with_supply(self, channel: FuelChannel, amount: f64) -> Self {
        let profile = self.with_usage(channel, amount);
        match channel.connection() {
            Some(connection) => profile.with_connection_days(connection, connection.yearly_days()),
            None => profile,
        }
    }

    /// Returns a copy with every usage and connection field multiplied by `factor`.
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            elx_connection_days: self.elx_connection_days * factor,
            day_kwh: self.day_kwh * factor,
            night_kwh: self.night_kwh * factor,
            controlled_kwh: self.controlled_kwh * factor,
            natural_gas_connection_days: self.natural_gas_connection_days * factor,
            natural_gas_kwh: self.natural_gas_kwh * factor,
            lpg_tank_rental_days: self.lpg_tank_rental_days * factor,
            lpg_kwh: self.lpg_kwh * factor,
            wood_kwh: self.wood_kwh * factor,
            petrol_litres: self.petrol_litres * factor,
            diesel_litres: self.diesel_litres * factor,
        }
    }

    pub fn total_electricity_kwh(&self) -> f64 {
        self.day_kwh + self.night_kwh + self.controlled_kwh
    }
}
