use crate::workflow::config::ScenarioConfig;
use impactcore::{EnergyMix, ImpactComparison, ImpactResult};
use serde::{Deserialize, Serialize};

/// Everything the presentation side needs for one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub scenario: String,
    pub monthly_usage_kwh: f64,
    pub annual_energy_kwh: f64,
    pub mix: EnergyMix,
    pub mix_total: f64,
    pub current: ImpactResult,
    pub baseline: ImpactResult,
    pub emissions_delta_kg: f64,
    pub emissions_delta_tonnes: f64,
    pub mortality_ratio: f64,
}

impl ScenarioReport {
    pub fn new(config: &ScenarioConfig, mix_total: f64, comparison: ImpactComparison) -> Self {
        Self {
            scenario: config.display_name().to_string(),
            monthly_usage_kwh: config.monthly_usage_kwh,
            annual_energy_kwh: config.annual_energy_kwh(),
            mix: config.mix.clone(),
            mix_total,
            current: comparison.current,
            baseline: comparison.baseline,
            emissions_delta_kg: comparison.emissions_delta,
            emissions_delta_tonnes: comparison.emissions_delta_tonnes(),
            mortality_ratio: comparison.mortality_ratio,
        }
    }

    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            format!(
                "Scenario {} -> {:.0} kWh/year",
                self.scenario, self.annual_energy_kwh
            ),
            format!(
                "Current  : {:.0} kg CO2eq, {:.3e} expected deaths",
                self.current.total_emissions, self.current.total_mortality
            ),
            format!(
                "Baseline : {:.0} kg CO2eq, {:.3e} expected deaths",
                self.baseline.total_emissions, self.baseline.total_mortality
            ),
            format!(
                "Switching to the baseline saves roughly {:.1} tonnes of CO2 per year.",
                self.emissions_delta_tonnes
            ),
            format!(
                "Current mix has a {:.1}x higher associated death rate than the baseline.",
                self.mortality_ratio
            ),
        ]
    }
}
