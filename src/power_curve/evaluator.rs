use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::trace;

use super::interpolation::fractional_power;
use crate::domain::{InterpolationMode, OperatingRegion, TurbineParameters};
use crate::error::Result;

/// Classify a wind speed into its power curve region.
///
/// Precedence: below cut-in, then at/above cut-out, then ramp-up
/// (`cut_in <= v < rated`), otherwise the rated plateau. The parameters are
/// not checked; a NaN wind speed fails every comparison and lands on the plateau.
pub fn operating_region(wind_speed: f64, params: &TurbineParameters) -> OperatingRegion {
    if wind_speed < params.cut_in_wind_speed {
        OperatingRegion::BelowCutIn
    } else if wind_speed >= params.cut_out_wind_speed {
        OperatingRegion::CutOut
    } else if params.cut_in_wind_speed <= wind_speed && wind_speed < params.rated_wind_speed {
        OperatingRegion::RampUp
    } else {
        OperatingRegion::Rated
    }
}

/// Power output of the turbine at `wind_speed`, in the unit of `rated_power`.
pub fn evaluate_power(
    wind_speed: f64,
    params: &TurbineParameters,
    mode: InterpolationMode,
) -> f64 {
    match operating_region(wind_speed, params) {
        OperatingRegion::BelowCutIn | OperatingRegion::CutOut => 0.0,
        OperatingRegion::RampUp => fractional_power(mode, wind_speed, params) * params.rated_power,
        OperatingRegion::Rated => params.rated_power,
    }
}

/// [`evaluate_power`] for callers holding the mode as a string.
///
/// The mode is parsed before anything else; an unrecognized value fails with
/// `PowerCurveError::InvalidArgument` regardless of the wind speed.
pub fn evaluate_power_with_mode_str(
    wind_speed: f64,
    params: &TurbineParameters,
    mode: &str,
) -> Result<f64> {
    let mode = InterpolationMode::from_str(mode)?;
    Ok(evaluate_power(wind_speed, params, mode))
}

/// A turbine paired with the interpolation used for its ramp-up region
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PowerCurve {
    pub params: TurbineParameters,
    pub mode: InterpolationMode,
}

impl PowerCurve {
    pub fn new(params: TurbineParameters, mode: InterpolationMode) -> Self {
        Self { params, mode }
    }

    /// Power output at the given wind speed
    pub fn power_at(&self, wind_speed: f64) -> f64 {
        let power = evaluate_power(wind_speed, &self.params, self.mode);
        trace!(wind_speed, power, mode = %self.mode, "evaluated power curve");
        power
    }

    /// Region the given wind speed falls into
    pub fn region_at(&self, wind_speed: f64) -> OperatingRegion {
        operating_region(wind_speed, &self.params)
    }

    /// Output as a fraction of rated power (0.0 when rated power is zero)
    pub fn capacity_factor_at(&self, wind_speed: f64) -> f64 {
        if self.params.rated_power == 0.0 {
            return 0.0;
        }
        self.power_at(wind_speed) / self.params.rated_power
    }

    /// Tabulate `(wind_speed, power)` pairs for the given speeds
    pub fn sample<I>(&self, wind_speeds: I) -> Vec<(f64, f64)>
    where
        I: IntoIterator<Item = f64>,
    {
        wind_speeds
            .into_iter()
            .map(|v| (v, self.power_at(v)))
            .collect()
    }
}
