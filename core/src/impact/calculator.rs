use crate::coefficients::CoefficientTable;
use crate::impact::baseline::BaselineMix;
use crate::impact::comparison::ImpactComparison;
use crate::math::units::UnitHelper;
use crate::prelude::{CalcResult, EnergyMix, ImpactError, ImpactResult};
use crate::telemetry::{LogManager, MetricsRecorder};

/// Impact of `mix` over `total_energy` kWh using the standard coefficients.
///
/// Shares are applied literally; a mix that does not sum to 100 is not
/// rejected here (see [`crate::validate_mix`]). Entries with a zero or
/// negative share are skipped without a lookup. Negative or non-finite
/// energy is rejected with [`ImpactError::InvalidQuantity`], never clamped,
/// as is energy large enough to overflow either total.
pub fn compute_impact(mix: &EnergyMix, total_energy: f64) -> CalcResult<ImpactResult> {
    accumulate(CoefficientTable::standard(), mix, total_energy)
}

fn accumulate(
    table: &CoefficientTable,
    mix: &EnergyMix,
    total_energy: f64,
) -> CalcResult<ImpactResult> {
    if !total_energy.is_finite() || total_energy < 0.0 {
        return Err(ImpactError::InvalidQuantity(total_energy));
    }

    let mut result = ImpactResult::zero();
    for (name, percentage) in mix.iter() {
        if percentage.is_nan() || percentage <= 0.0 {
            continue;
        }
        let profile = table.lookup(name)?;
        let source_energy = UnitHelper::share_of(total_energy, percentage);

        result.total_emissions +=
            UnitHelper::grams_to_kilograms(source_energy * profile.carbon_intensity);
        result.total_mortality += UnitHelper::kwh_to_twh(source_energy) * profile.mortality_rate;
    }

    if !result.total_emissions.is_finite() || !result.total_mortality.is_finite() {
        return Err(ImpactError::InvalidQuantity(total_energy));
    }
    Ok(result)
}

/// Calculator bound to a coefficient table, with logging and counters.
pub struct ImpactCalculator<'a> {
    table: &'a CoefficientTable,
    logger: LogManager,
    metrics: MetricsRecorder,
}

impl ImpactCalculator<'static> {
    pub fn new() -> Self {
        Self::with_table(CoefficientTable::standard())
    }
}

impl Default for ImpactCalculator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> ImpactCalculator<'a> {
    pub fn with_table(table: &'a CoefficientTable) -> Self {
        Self {
            table,
            logger: LogManager::new(),
            metrics: MetricsRecorder::new(),
        }
    }

    pub fn table(&self) -> &'a CoefficientTable {
        self.table
    }

    pub fn compute(&self, mix: &EnergyMix, total_energy: f64) -> CalcResult<ImpactResult> {
        match accumulate(self.table, mix, total_energy) {
            Ok(result) => {
                self.metrics.record_calculation();
                self.logger.record(&format!(
                    "impact over {:.1} kWh -> {:.3} kg CO2eq, {:.3e} deaths",
                    total_energy, result.total_emissions, result.total_mortality
                ));
                Ok(result)
            }
            Err(err) => {
                self.metrics.record_error();
                self.logger.reject(&format!("impact calculation rejected: {}", err));
                Err(err)
            }
        }
    }

    /// Computes `mix` and `baseline` over the same energy and compares them.
    pub fn compare(
        &self,
        mix: &EnergyMix,
        baseline: &BaselineMix,
        total_energy: f64,
    ) -> CalcResult<ImpactComparison> {
        let current = self.compute(mix, total_energy)?;
        let reference = self.compute(baseline.mix(), total_energy)?;
        Ok(ImpactComparison::between(current, reference))
    }

    /// `(calculations, errors)` served by this calculator.
    pub fn metrics(&self) -> (usize, usize) {
        self.metrics.snapshot()
    }
}
