/// kWh per TWh; mortality rates are quoted per TWh.
pub const KWH_PER_TWH: f64 = 1_000_000_000.0;
pub const GRAMS_PER_KILOGRAM: f64 = 1_000.0;
pub const KILOGRAMS_PER_TONNE: f64 = 1_000.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;

pub struct UnitHelper;

impl UnitHelper {
    pub fn kwh_to_twh(kwh: f64) -> f64 {
        kwh / KWH_PER_TWH
    }

    pub fn grams_to_kilograms(grams: f64) -> f64 {
        grams / GRAMS_PER_KILOGRAM
    }

    pub fn kilograms_to_tonnes(kilograms: f64) -> f64 {
        kilograms / KILOGRAMS_PER_TONNE
    }

    pub fn annualize_monthly(monthly: f64) -> f64 {
        monthly * MONTHS_PER_YEAR
    }

    /// Portion of `total` carried by a percentage share.
    pub fn share_of(total: f64, percentage: f64) -> f64 {
        total * (percentage / 100.0)
    }
}
