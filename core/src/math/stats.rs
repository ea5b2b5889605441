pub struct StatsHelper;

impl StatsHelper {
    /// `numerator / denominator`, or zero when the denominator is zero.
    pub fn ratio_or_zero(numerator: f64, denominator: f64) -> f64 {
        if denominator == 0.0 {
            return 0.0;
        }
        numerator / denominator
    }

    pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() <= tolerance
    }
}
