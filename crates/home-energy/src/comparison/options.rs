use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::household::{
    EstimateError, EstimationContext, FuelUsageProfile, SwitchableAnswers, YourHome,
};
use crate::pricing::{EmissionsFactors, TariffPlan};

/// Annual cost (NZD) and emissions (kg CO2e) of a usage profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub cost: f64,
    pub emissions: f64,
}

impl Footprint {
    pub fn of(profile: &FuelUsageProfile, plan: &TariffPlan, factors: &EmissionsFactors) -> Self {
        Self {
            cost: plan.cost(profile),
            emissions: factors.emissions(profile),
        }
    }

    /// What moving from `self` to `candidate` saves.
    pub fn savings_to(&self, candidate: &Footprint) -> SavingsOption {
        SavingsOption {
            savings: self.cost - candidate.cost,
            emissions_reduction_percentage: reduction_percentage(
                self.emissions,
                candidate.emissions,
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SavingsOption {
    pub savings: f64,
    pub emissions_reduction_percentage: f64,
}

/// Candidate label to savings, in the field's declared value order.
pub type SavingsOptions = IndexMap<&'static str, SavingsOption>;

/// Percentage drop from `baseline` to `candidate`, relative to the baseline's
/// magnitude. A zero baseline has nothing to reduce and reports 0. A negative
/// baseline (net generation) still reports a positive value when emissions fall.
pub fn reduction_percentage(baseline: f64, candidate: f64) -> f64 {
    if baseline == 0.0 {
        0.0
    } else {
        100.0 * (baseline - candidate) / baseline.abs()
    }
}

/// Price every legal value of `field` against the current answers.
///
/// Only the given sub-system is re-estimated; the rest of the household does
/// not enter the comparison. The current value is included and always shows
/// zero savings.
pub fn savings_options<A: SwitchableAnswers>(
    answers: &A,
    field: A::Field,
    home: &YourHome,
    plan: &TariffPlan,
    factors: &EmissionsFactors,
    context: &EstimationContext<'_>,
) -> Result<SavingsOptions, EstimateError> {
    let baseline = Footprint::of(&answers.estimate(home, context)?, plan, factors);

    answers
        .candidates(field)
        .into_iter()
        .map(|candidate| {
            let profile = candidate.answers.estimate(home, context)?;
            let footprint = Footprint::of(&profile, plan, factors);
            Ok((candidate.label, baseline.savings_to(&footprint)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_baseline_reports_no_reduction() {
        assert_eq!(reduction_percentage(0.0, 0.0), 0.0);
        assert_eq!(reduction_percentage(0.0, 120.0), 0.0);
    }

    #[test]
    fn reduction_is_relative_to_baseline() {
        assert_eq!(reduction_percentage(200.0, 50.0), 75.0);
        assert_eq!(reduction_percentage(100.0, 150.0), -50.0);
    }

    #[test]
    fn negative_baseline_keeps_the_direction_of_change() {
        assert_eq!(reduction_percentage(-200.0, -300.0), 50.0);
        assert_eq!(reduction_percentage(-200.0, -100.0), -50.0);
        assert_eq!(reduction_percentage(-200.0, 0.0), -100.0);
    }

    #[test]
    fn savings_to_self_is_zero() {
        let footprint = Footprint {
            cost: 812.4,
            emissions: 148.2,
        };
        assert_eq!(footprint.savings_to(&footprint), SavingsOption::default());
    }
}
