//! Calculation core for the clean energy transition tracker.
//!
//! A static coefficient table maps each generation source to its carbon
//! intensity and mortality rate; the impact calculator turns a percentage
//! mix and an energy quantity into aggregate emissions and expected deaths.
//! Everything here is synchronous and free of I/O.

pub mod coefficients;
pub mod impact;
pub mod math;
pub mod prelude;
pub mod telemetry;

pub use coefficients::{CoefficientTable, EnergySource, EnergySourceProfile};
pub use impact::{compute_impact, validate_mix, BaselineMix, ImpactCalculator, ImpactComparison};
pub use prelude::{CalcResult, EnergyMix, ImpactError, ImpactResult, MixValidationError};
