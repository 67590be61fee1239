use crate::domain::{InterpolationMode, TurbineParameters};

/// Fractional power `g(v)` applied to rated power in the ramp-up region.
///
/// Only meaningful for `cut_in <= v < rated`; callers outside that range get
/// the raw formula value. The cubic form is `v^3 / rated^3` and is NOT zero at
/// cut-in, so the curve jumps at both region boundaries in cubic mode.
pub fn fractional_power(
    mode: InterpolationMode,
    wind_speed: f64,
    params: &TurbineParameters,
) -> f64 {
    match mode {
        InterpolationMode::Linear => {
            (wind_speed - params.cut_in_wind_speed)
                / (params.rated_wind_speed - params.cut_in_wind_speed)
        }
        InterpolationMode::Cubic => wind_speed.powi(3) / params.rated_wind_speed.powi(3),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_endpoints() {
        let params = TurbineParameters::default();
        assert_eq!(fractional_power(InterpolationMode::Linear, 3.0, &params), 0.0);
        assert_eq!(fractional_power(InterpolationMode::Linear, 7.0, &params), 0.5);
        assert_eq!(fractional_power(InterpolationMode::Linear, 11.0, &params), 1.0);
    }

    #[test]
    fn test_cubic_not_normalized_at_cut_in() {
        let params = TurbineParameters::default();
        let g = fractional_power(InterpolationMode::Cubic, 3.0, &params);
        assert!((g - 27.0 / 1331.0).abs() < 1e-12);
        assert!(g > 0.0);
    }

    #[test]
    fn test_cubic_midpoint() {
        let params = TurbineParameters::default();
        let g = fractional_power(InterpolationMode::Cubic, 7.0, &params);
        assert!((g - 343.0 / 1331.0).abs() < 1e-12);
    }
}
