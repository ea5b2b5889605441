use crate::math::stats::StatsHelper;
use crate::prelude::{EnergyMix, MixValidationError};

/// Allowed distance between a mix total and 100.
pub const MIX_TOLERANCE: f64 = 1e-6;

/// Checks that a mix is fit to display: every share finite and
/// non-negative, the total equal to 100 within [`MIX_TOLERANCE`].
///
/// Returns the total on success. Source names are not resolved here.
pub fn validate_mix(mix: &EnergyMix) -> Result<f64, MixValidationError> {
    for (source, share) in mix.iter() {
        if !share.is_finite() {
            return Err(MixValidationError::NonFiniteShare {
                name: source.to_string(),
            });
        }
        if share < 0.0 {
            return Err(MixValidationError::NegativeShare {
                name: source.to_string(),
                share,
            });
        }
    }

    let total = mix.total();
    if !StatsHelper::approx_eq(total, 100.0, MIX_TOLERANCE) {
        return Err(MixValidationError::SumMismatch { total });
    }
    Ok(total)
}
