use crate::coefficients::EnergySource;
use crate::prelude::EnergyMix;
use serde::{Deserialize, Serialize};

/// Reference mix the current mix is compared against. Chosen by the caller;
/// defaults to an even solar/wind split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BaselineMix {
    mix: EnergyMix,
}

impl BaselineMix {
    pub fn from_mix(mix: EnergyMix) -> Self {
        Self { mix }
    }

    /// `solar_share` percent solar, the remainder wind.
    pub fn solar_wind_split(solar_share: f64) -> Self {
        let solar_share = solar_share.clamp(0.0, 100.0);
        Self::from_mix(
            EnergyMix::new()
                .with_share(EnergySource::Solar.display_name(), solar_share)
                .with_share(EnergySource::Wind.display_name(), 100.0 - solar_share),
        )
    }

    pub fn mix(&self) -> &EnergyMix {
        &self.mix
    }
}

impl Default for BaselineMix {
    fn default() -> Self {
        Self::solar_wind_split(50.0)
    }
}
