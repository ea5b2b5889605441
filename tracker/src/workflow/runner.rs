use crate::report_bridge::model::ScenarioReport;
use crate::workflow::config::ScenarioConfig;
use anyhow::Context;
use impactcore::{validate_mix, ImpactCalculator};

/// Validates a scenario and measures it against its baseline.
pub struct Runner {
    calculator: ImpactCalculator<'static>,
}

impl Runner {
    pub fn new() -> Self {
        Self {
            calculator: ImpactCalculator::new(),
        }
    }

    pub fn execute(&self, config: &ScenarioConfig) -> anyhow::Result<ScenarioReport> {
        let mix_total = validate_mix(&config.mix).context("validating energy mix")?;

        let annual_energy = config.annual_energy_kwh();
        let comparison = self
            .calculator
            .compare(&config.mix, &config.baseline, annual_energy)
            .with_context(|| format!("computing impact for {}", config.display_name()))?;

        Ok(ScenarioReport::new(config, mix_total, comparison))
    }

    /// `(calculations, errors)` seen by the underlying calculator.
    pub fn metrics(&self) -> (usize, usize) {
        self.calculator.metrics()
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use impactcore::{EnergyMix, ImpactError, MixValidationError};

    #[test]
    fn runner_reports_default_scenario() {
        let runner = Runner::new();
        let report = runner.execute(&ScenarioConfig::default()).unwrap();
        assert_eq!(report.annual_energy_kwh, 6000.0);
        assert!((report.current.total_emissions - 3111.0).abs() < 1e-6);
        assert!((report.baseline.total_emissions - 168.0).abs() < 1e-9);
        assert!((report.emissions_delta_kg - 2943.0).abs() < 1e-6);
        assert!(report.mortality_ratio > 1.0);
        assert_eq!(runner.metrics(), (2, 0));
    }

    #[test]
    fn runner_refuses_mix_not_summing_to_hundred() {
        let runner = Runner::new();
        let config = ScenarioConfig::from_args(500.0, EnergyMix::new().with_share("Coal", 90.0));
        let err = runner.execute(&config).unwrap_err();
        assert_eq!(
            err.downcast_ref::<MixValidationError>(),
            Some(&MixValidationError::SumMismatch { total: 90.0 })
        );
        assert_eq!(runner.metrics(), (0, 0));
    }

    #[test]
    fn runner_surfaces_unknown_sources() {
        let runner = Runner::new();
        let config =
            ScenarioConfig::from_args(500.0, EnergyMix::new().with_share("Plutonium", 100.0));
        let err = runner.execute(&config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ImpactError>(),
            Some(ImpactError::UnknownSource(_))
        ));
    }

    #[test]
    fn runner_rejects_negative_usage() {
        let runner = Runner::new();
        let mut config = ScenarioConfig::default();
        config.monthly_usage_kwh = -10.0;
        let err = runner.execute(&config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ImpactError>(),
            Some(ImpactError::InvalidQuantity(_))
        ));
    }
}
