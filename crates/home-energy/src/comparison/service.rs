use std::sync::Arc;

use tracing::{debug, info};

use super::options::{savings_options, Footprint, SavingsOptions};
use super::report::{HouseholdReport, SubsystemSavings};
use crate::household::{
    household_profile, EstimateError, EstimationContext, EstimationParameters, FuelUsageProfile,
    Household, HouseholdAnswers, SwitchableAnswers, YourHome,
};
use crate::pricing::{ClimateZone, EmissionsFactors, RegionResolver, TariffPlan};

/// Shared, read-only state behind every comparison: the region resolver and
/// the tables loaded at startup.
pub struct ComparisonService<R> {
    resolver: Arc<R>,
    parameters: Arc<EstimationParameters>,
    factors: Arc<EmissionsFactors>,
}

impl<R> ComparisonService<R>
where
    R: RegionResolver + 'static,
{
    pub fn new(
        resolver: Arc<R>,
        parameters: Arc<EstimationParameters>,
        factors: Arc<EmissionsFactors>,
    ) -> Self {
        Self {
            resolver,
            parameters,
            factors,
        }
    }

    /// Service over the standard New Zealand tables.
    pub fn standard(resolver: R) -> Self {
        Self::new(
            Arc::new(resolver),
            Arc::new(EstimationParameters::standard()),
            Arc::new(EmissionsFactors::standard()),
        )
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn parameters(&self) -> &EstimationParameters {
        &self.parameters
    }

    pub fn factors(&self) -> &EmissionsFactors {
        &self.factors
    }

    /// Plan and climate zone for a home's postcode.
    pub fn region(&self, home: &YourHome) -> (TariffPlan, ClimateZone) {
        let postcode = home.postcode();
        (
            self.resolver.resolve_plan(postcode),
            self.resolver.resolve_climate_zone(postcode),
        )
    }

    pub fn context(&self, climate_zone: ClimateZone) -> EstimationContext<'_> {
        EstimationContext::new(&self.parameters, climate_zone)
    }

    pub fn household_profile(
        &self,
        household: &Household,
    ) -> Result<FuelUsageProfile, EstimateError> {
        let climate_zone = self.resolver.resolve_climate_zone(household.your_home.postcode());
        household_profile(household, &self.context(climate_zone))
    }

    /// Savings for every value of `field`, or of the primary fuel field when none is given.
    pub fn savings_options<A: SwitchableAnswers>(
        &self,
        answers: &A,
        field: Option<A::Field>,
        home: &YourHome,
    ) -> Result<SavingsOptions, EstimateError> {
        let field = field.unwrap_or(A::PRIMARY_FIELD);
        let (plan, climate_zone) = self.region(home);
        debug!(
            subsystem = A::SUBSYSTEM,
            ?field,
            postcode = home.postcode(),
            plan = %plan.name,
            "computing savings options"
        );

        let options = savings_options(
            answers,
            field,
            home,
            &plan,
            &self.factors,
            &self.context(climate_zone),
        )?;

        info!(
            subsystem = A::SUBSYSTEM,
            ?field,
            candidates = options.len(),
            "savings options computed"
        );
        Ok(options)
    }

    /// Whole-household footprint now and after every submitted alternative.
    pub fn household_report(
        &self,
        answers: HouseholdAnswers,
    ) -> Result<HouseholdReport, EstimateError> {
        let household = answers.resolve();
        let home = &household.your_home;
        let (plan, climate_zone) = self.region(home);
        let context = self.context(climate_zone);

        let usage_profile = household_profile(&household, &context)?;
        let alternative_usage_profile = household_profile(&household.switched(), &context)?;
        let current = Footprint::of(&usage_profile, &plan, &self.factors);
        let alternative = Footprint::of(&alternative_usage_profile, &plan, &self.factors);

        let report = HouseholdReport {
            heating: self.switch_savings(&household.heating, home, &plan, &context)?,
            hot_water: self.switch_savings(&household.hot_water, home, &plan, &context)?,
            cooktop: self.switch_savings(&household.cooktop, home, &plan, &context)?,
            driving: self.switch_savings(&household.driving, home, &plan, &context)?,
            overall: current.savings_to(&alternative),
            plan_name: plan.name,
            climate_zone,
            usage_profile,
            alternative_usage_profile,
            current,
            alternative,
        };

        info!(
            postcode = home.postcode(),
            people = home.people_in_house(),
            cost = report.current.cost,
            emissions = report.current.emissions,
            savings = report.overall.savings,
            "household report computed"
        );
        Ok(report)
    }

    fn switch_savings<A: SwitchableAnswers>(
        &self,
        answers: &A,
        home: &YourHome,
        plan: &TariffPlan,
        context: &EstimationContext<'_>,
    ) -> Result<SubsystemSavings, EstimateError> {
        let Some(switched) = answers.switched() else {
            return Ok(SubsystemSavings::unchanged());
        };

        let before = Footprint::of(&answers.estimate(home, context)?, plan, &self.factors);
        let after = Footprint::of(&switched.estimate(home, context)?, plan, &self.factors);
        Ok(SubsystemSavings::switched(before.savings_to(&after)))
    }
}
