//! Per-source coefficients.
//!
//! Mortality rates are deaths per TWh from air pollution and accidents
//! (Markandya & Wilkinson 2007; Sovacool et al. 2016; Our World in Data).
//! Carbon intensities are lifecycle gCO2eq per kWh (IPCC AR5 / UNECE 2021
//! medians). All values are global averages and treated as exact constants.

use crate::coefficients::source::EnergySource;
use crate::prelude::CalcResult;
use serde::Serialize;

/// Static coefficients for one generation source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergySourceProfile {
    pub source: EnergySource,
    pub name: &'static str,
    /// Deaths per TWh (10^9 kWh).
    pub mortality_rate: f64,
    /// Grams CO2-equivalent per kWh.
    pub carbon_intensity: f64,
    /// Chart color; unused by the calculation.
    pub display_color: &'static str,
}

const fn profile(
    source: EnergySource,
    name: &'static str,
    mortality_rate: f64,
    carbon_intensity: f64,
    display_color: &'static str,
) -> EnergySourceProfile {
    EnergySourceProfile {
        source,
        name,
        mortality_rate,
        carbon_intensity,
        display_color,
    }
}

// Row order must match `EnergySource::ALL`.
static PROFILES: [EnergySourceProfile; 8] = [
    profile(EnergySource::Coal, "Coal", 24.62, 820.0, "#2c3e50"),
    profile(EnergySource::Oil, "Oil", 18.43, 720.0, "#34495e"),
    profile(EnergySource::NaturalGas, "Natural Gas", 2.82, 490.0, "#7f8c8d"),
    profile(EnergySource::Biomass, "Biomass", 4.63, 230.0, "#d35400"),
    profile(EnergySource::Hydropower, "Hydropower", 1.30, 24.0, "#2980b9"),
    profile(EnergySource::Wind, "Wind", 0.04, 11.0, "#16a085"),
    profile(EnergySource::Nuclear, "Nuclear", 0.03, 12.0, "#8e44ad"),
    profile(EnergySource::Solar, "Solar", 0.02, 45.0, "#f1c40f"),
];

static STANDARD: CoefficientTable = CoefficientTable {
    profiles: &PROFILES,
};

/// Read-only view over the process-wide coefficient rows.
#[derive(Debug, Clone, Copy)]
pub struct CoefficientTable {
    profiles: &'static [EnergySourceProfile],
}

impl CoefficientTable {
    pub fn standard() -> &'static CoefficientTable {
        &STANDARD
    }

    /// Resolves a user-facing source name.
    pub fn lookup(&self, name: &str) -> CalcResult<&'static EnergySourceProfile> {
        let source: EnergySource = name.parse()?;
        Ok(self.profile(source))
    }

    pub fn profile(&self, source: EnergySource) -> &'static EnergySourceProfile {
        &self.profiles[source.index()]
    }

    pub fn source_names(&self) -> impl Iterator<Item = &'static str> {
        self.profiles.iter().map(|profile| profile.name)
    }

    pub fn profiles(&self) -> impl Iterator<Item = &'static EnergySourceProfile> {
        self.profiles.iter()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::ImpactError;

    #[test]
    fn rows_line_up_with_sources() {
        let table = CoefficientTable::standard();
        for source in EnergySource::ALL {
            let row = table.profile(source);
            assert_eq!(row.source, source);
            assert_eq!(row.name, source.display_name());
        }
    }

    #[test]
    fn lookup_returns_published_values() {
        let nuclear = CoefficientTable::standard().lookup("Nuclear").unwrap();
        assert_eq!(nuclear.mortality_rate, 0.03);
        assert_eq!(nuclear.carbon_intensity, 12.0);

        let gas = CoefficientTable::standard().lookup("NaturalGas").unwrap();
        assert_eq!(gas.carbon_intensity, 490.0);
    }

    #[test]
    fn lookup_rejects_unknown_source() {
        let err = CoefficientTable::standard().lookup("Plutonium").unwrap_err();
        assert_eq!(err, ImpactError::UnknownSource("Plutonium".into()));
        assert!(!CoefficientTable::standard().contains("Plutonium"));
    }

    #[test]
    fn coefficients_are_non_negative() {
        for row in CoefficientTable::standard().profiles() {
            assert!(row.mortality_rate >= 0.0, "{}", row.name);
            assert!(row.carbon_intensity >= 0.0, "{}", row.name);
        }
    }

    #[test]
    fn source_names_are_unique() {
        let mut names: Vec<_> = CoefficientTable::standard().source_names().collect();
        let count = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), count);
        assert_eq!(count, 8);
    }
}
