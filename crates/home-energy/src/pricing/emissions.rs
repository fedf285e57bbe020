use crate::household::{FuelChannel, FuelUsageProfile};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fuel as far as emissions accounting is concerned; all electricity rates
/// share one grid factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmissionsSource {
    Electricity,
    NaturalGas,
    Lpg,
    Wood,
    Petrol,
    Diesel,
}

impl From<FuelChannel> for EmissionsSource {
    fn from(channel: FuelChannel) -> Self {
        match channel {
            FuelChannel::ElectricityDay
            | FuelChannel::ElectricityNight
            | FuelChannel::ElectricityControlled => Self::Electricity,
            FuelChannel::NaturalGas => Self::NaturalGas,
            FuelChannel::Lpg => Self::Lpg,
            FuelChannel::Wood => Self::Wood,
            FuelChannel::Petrol => Self::Petrol,
            FuelChannel::Diesel => Self::Diesel,
        }
    }
}

/// kg CO2e per kWh or litre, keyed by source.
///
/// A source with no entry contributes nothing. This is deliberately lenient,
/// unlike the converter tables: an unmodelled fuel drops out of the total
/// instead of failing the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmissionsFactors(HashMap<EmissionsSource, f64>);

impl EmissionsFactors {
    pub fn new(factors: HashMap<EmissionsSource, f64>) -> Self {
        Self(factors)
    }

    /// New Zealand factors. Wood is treated as biogenic and left out.
    pub fn standard() -> Self {
        Self(HashMap::from([
            (EmissionsSource::Electricity, 0.077),
            (EmissionsSource::NaturalGas, 0.195),
            (EmissionsSource::Lpg, 0.214),
            (EmissionsSource::Petrol, 2.41),
            (EmissionsSource::Diesel, 2.67),
        ]))
    }

    pub fn factor(&self, source: EmissionsSource) -> f64 {
        self.0.get(&source).copied().unwrap_or(0.0)
    }

    /// Annual kg CO2e for a usage profile.
    pub fn emissions(&self, profile: &FuelUsageProfile) -> f64 {
        FuelChannel::ordered()
            .into_iter()
            .map(|channel| profile.usage(channel) * self.factor(channel.into()))
            .sum()
    }
}

impl Default for EmissionsFactors {
    fn default() -> Self {
        Self::standard()
    }
}
