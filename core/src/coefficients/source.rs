use crate::prelude::ImpactError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Generation sources known to the coefficient table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EnergySource {
    Coal,
    Oil,
    NaturalGas,
    Biomass,
    Hydropower,
    Wind,
    Nuclear,
    Solar,
}

impl EnergySource {
    pub const ALL: [EnergySource; 8] = [
        EnergySource::Coal,
        EnergySource::Oil,
        EnergySource::NaturalGas,
        EnergySource::Biomass,
        EnergySource::Hydropower,
        EnergySource::Wind,
        EnergySource::Nuclear,
        EnergySource::Solar,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            EnergySource::Coal => "Coal",
            EnergySource::Oil => "Oil",
            EnergySource::NaturalGas => "Natural Gas",
            EnergySource::Biomass => "Biomass",
            EnergySource::Hydropower => "Hydropower",
            EnergySource::Wind => "Wind",
            EnergySource::Nuclear => "Nuclear",
            EnergySource::Solar => "Solar",
        }
    }

    /// Table row for this source.
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for EnergySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Case-insensitive; whitespace is ignored so "Natural Gas" and
/// "NaturalGas" name the same source.
impl FromStr for EnergySource {
    type Err = ImpactError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_name(name);
        EnergySource::ALL
            .into_iter()
            .find(|source| normalize_name(source.display_name()) == wanted)
            .ok_or_else(|| ImpactError::UnknownSource(name.to_string()))
    }
}

/// Lowercased with whitespace removed; the key names are compared by.
pub(crate) fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
