use super::answers::Household;
use super::estimate::{EstimateError, EstimateUsage, EstimationContext};
use super::profile::{Connection, FuelChannel, FuelUsageProfile};

/// Which fixed-charge connections a household holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelPresence {
    pub electricity: bool,
    pub natural_gas: bool,
    pub lpg: bool,
}

impl ChannelPresence {
    /// Electricity is always assumed connected. Gas and LPG are present when
    /// any sub-system's selected category draws on them.
    pub fn from_profiles(profiles: &[FuelUsageProfile]) -> Self {
        let draws = |channel: FuelChannel, connection: Connection| {
            profiles.iter().any(|profile| {
                profile.usage(channel) > 0.0 || profile.connection_days(connection) > 0.0
            })
        };

        Self {
            electricity: true,
            natural_gas: draws(FuelChannel::NaturalGas, Connection::NaturalGas),
            lpg: draws(FuelChannel::Lpg, Connection::LpgTanks),
        }
    }

    pub fn has(&self, connection: Connection) -> bool {
        match connection {
            Connection::Electricity => self.electricity,
            Connection::NaturalGas => self.natural_gas,
            Connection::LpgTanks => self.lpg,
        }
    }
}

/// Merge sub-system profiles into one household profile.
///
/// Usage fields are summed. Connection days are not: a connection is a
/// property of the household and is charged for the whole year once present.
pub fn aggregate(profiles: &[FuelUsageProfile], presence: ChannelPresence) -> FuelUsageProfile {
    let usage = FuelChannel::ordered()
        .into_iter()
        .fold(FuelUsageProfile::default(), |household, channel| {
            let total: f64 = profiles.iter().map(|profile| profile.usage(channel)).sum();
            household.with_usage(channel, total)
        });

    Connection::ordered()
        .into_iter()
        .filter(|connection| presence.has(*connection))
        .fold(usage, |household, connection| {
            household.with_connection_days(connection, connection.yearly_days())
        })
}

/// Estimate every sub-system and merge the results.
pub fn household_profile(
    household: &Household,
    context: &EstimationContext<'_>,
) -> Result<FuelUsageProfile, EstimateError> {
    let home = &household.your_home;
    let profiles = [
        household.heating.estimate(home, context)?,
        household.hot_water.estimate(home, context)?,
        household.cooktop.estimate(home, context)?,
        household.driving.estimate(home, context)?,
        household.solar.estimate(home, context)?,
    ];

    Ok(aggregate(&profiles, ChannelPresence::from_profiles(&profiles)))
}
