use crate::math::stats::StatsHelper;
use crate::math::units::UnitHelper;
use crate::prelude::ImpactResult;
use serde::{Deserialize, Serialize};

/// Current mix measured against a reference mix over the same energy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactComparison {
    pub current: ImpactResult,
    pub baseline: ImpactResult,
    /// Kilograms CO2eq avoided by switching to the baseline.
    pub emissions_delta: f64,
    /// How many times deadlier the current mix is; zero when the baseline
    /// carries no mortality.
    pub mortality_ratio: f64,
}

impl ImpactComparison {
    pub fn between(current: ImpactResult, baseline: ImpactResult) -> Self {
        Self {
            current,
            baseline,
            emissions_delta: emissions_delta(&current, &baseline),
            mortality_ratio: mortality_ratio(&current, &baseline),
        }
    }

    pub fn emissions_delta_tonnes(&self) -> f64 {
        UnitHelper::kilograms_to_tonnes(self.emissions_delta)
    }
}

pub fn emissions_delta(current: &ImpactResult, baseline: &ImpactResult) -> f64 {
    current.total_emissions - baseline.total_emissions
}

pub fn mortality_ratio(current: &ImpactResult, baseline: &ImpactResult) -> f64 {
    StatsHelper::ratio_or_zero(current.total_mortality, baseline.total_mortality)
}
