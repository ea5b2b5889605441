use crate::coefficients::source::normalize_name;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Percentage share per source name, as entered by the user.
///
/// Names are kept as given; they are resolved against the coefficient table
/// only when a share is positive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnergyMix {
    shares: BTreeMap<String, f64>,
}

impl EnergyMix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the share for `source`, replacing any previous value.
    pub fn with_share(mut self, source: impl Into<String>, percentage: f64) -> Self {
        self.set_share(source, percentage);
        self
    }

    pub fn set_share(&mut self, source: impl Into<String>, percentage: f64) {
        self.shares.insert(source.into(), percentage);
    }

    /// Share for `source`, matched the same way the coefficient table
    /// resolves names (case and whitespace ignored). Keys that resolve to
    /// the same name are summed; missing sources read as zero.
    pub fn share(&self, source: &str) -> f64 {
        let wanted = normalize_name(source);
        self.shares
            .iter()
            .filter(|(name, _)| normalize_name(name) == wanted)
            .map(|(_, share)| *share)
            .sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.shares.iter().map(|(name, share)| (name.as_str(), *share))
    }

    pub fn total(&self) -> f64 {
        self.shares.values().sum()
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for EnergyMix {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            shares: iter
                .into_iter()
                .map(|(name, share)| (name.into(), share))
                .collect(),
        }
    }
}

/// Aggregate impact of one mix over one energy quantity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ImpactResult {
    /// Kilograms CO2-equivalent.
    pub total_emissions: f64,
    /// Expected premature deaths; a real-valued expectation.
    pub total_mortality: f64,
}

impl ImpactResult {
    pub fn new(total_emissions: f64, total_mortality: f64) -> Self {
        Self {
            total_emissions,
            total_mortality,
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }
}

/// Errors raised by table lookups and impact calculation.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ImpactError {
    #[error("unknown energy source: {0}")]
    UnknownSource(String),
    #[error("invalid energy quantity: {0} (must be finite and non-negative)")]
    InvalidQuantity(f64),
}

/// Reasons a mix is not fit for display. Never raised by the calculator.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum MixValidationError {
    #[error("share for {name} is negative ({share}%)")]
    NegativeShare { name: String, share: f64 },
    #[error("share for {name} is not a finite number")]
    NonFiniteShare { name: String },
    #[error("Total mix is {total}%. Please adjust to equal 100%.")]
    SumMismatch { total: f64 },
}

pub type CalcResult<T> = Result<T, ImpactError>;
