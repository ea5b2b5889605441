use anyhow::Context;
use impactcore::math::units::UnitHelper;
use impactcore::{BaselineMix, EnergyMix, EnergySource};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Sources offered as sliders, with their starting percentages.
pub const SLIDER_DEFAULTS: [(EnergySource, f64); 6] = [
    (EnergySource::Coal, 40.0),
    (EnergySource::NaturalGas, 30.0),
    (EnergySource::Oil, 5.0),
    (EnergySource::Hydropower, 10.0),
    (EnergySource::Solar, 10.0),
    (EnergySource::Nuclear, 5.0),
];

pub const DEFAULT_MONTHLY_USAGE_KWH: f64 = 500.0;

fn default_monthly_usage() -> f64 {
    DEFAULT_MONTHLY_USAGE_KWH
}

/// One household scenario: usage, current mix, and the mix to compare with.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_monthly_usage")]
    pub monthly_usage_kwh: f64,
    pub mix: EnergyMix,
    #[serde(default)]
    pub baseline: BaselineMix,
}

impl ScenarioConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading scenario config {}", path_ref.display()))?;
        let config: ScenarioConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing scenario config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(monthly_usage_kwh: f64, mix: EnergyMix) -> Self {
        Self {
            name: None,
            monthly_usage_kwh,
            mix,
            baseline: BaselineMix::default(),
        }
    }

    pub fn annual_energy_kwh(&self) -> f64 {
        UnitHelper::annualize_monthly(self.monthly_usage_kwh)
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("current mix")
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self::from_args(DEFAULT_MONTHLY_USAGE_KWH, default_mix())
    }
}

pub fn default_mix() -> EnergyMix {
    SLIDER_DEFAULTS
        .iter()
        .map(|(source, share)| (source.display_name(), *share))
        .collect()
}
