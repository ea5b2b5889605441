pub mod baseline;
pub mod calculator;
pub mod comparison;
pub mod validation;

pub use baseline::BaselineMix;
pub use calculator::{compute_impact, ImpactCalculator};
pub use comparison::ImpactComparison;
pub use validation::{validate_mix, MIX_TOLERANCE};
