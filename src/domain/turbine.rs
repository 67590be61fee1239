//! # Turbine Parameters
//!
//! Named-field description of a turbine's power curve. Defaults describe a
//! 15-unit turbine that cuts in at 3 m/s, reaches rated output at 11 m/s and
//! shuts down at 25 m/s.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::Result;

/// Power curve boundaries and plateau output of a single turbine
///
/// Evaluation never checks these values. Call [`TurbineParameters::validate`]
/// where untrusted input enters (e.g. configuration loading).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_speed_ordering"))]
pub struct TurbineParameters {
    /// Plateau output, same unit as the evaluated power (default 15.0)
    #[validate(range(exclusive_min = 0.0))]
    pub rated_power: f64,
    /// Minimum wind speed for production in m/s (default 3.0)
    #[validate(range(min = 0.0))]
    pub cut_in_wind_speed: f64,
    /// Wind speed at which rated power is reached in m/s (default 11.0)
    #[validate(range(min = 0.0))]
    pub rated_wind_speed: f64,
    /// Wind speed at and above which the turbine shuts down in m/s (default 25.0)
    #[validate(range(min = 0.0))]
    pub cut_out_wind_speed: f64,
}

impl Default for TurbineParameters {
    fn default() -> Self {
        Self {
            rated_power: 15.0,
            cut_in_wind_speed: 3.0,
            rated_wind_speed: 11.0,
            cut_out_wind_speed: 25.0,
        }
    }
}

impl TurbineParameters {
    /// Create parameters from explicit values
    pub fn new(
        rated_power: f64,
        cut_in_wind_speed: f64,
        rated_wind_speed: f64,
        cut_out_wind_speed: f64,
    ) -> Self {
        Self {
            rated_power,
            cut_in_wind_speed,
            rated_wind_speed,
            cut_out_wind_speed,
        }
    }

    /// Replace the plateau output
    pub fn with_rated_power(mut self, rated_power: f64) -> Self {
        self.rated_power = rated_power;
        self
    }

    /// Replace the three wind speed boundaries
    pub fn with_speeds(mut self, cut_in: f64, rated: f64, cut_out: f64) -> Self {
        self.cut_in_wind_speed = cut_in;
        self.rated_wind_speed = rated;
        self.cut_out_wind_speed = cut_out;
        self
    }

    /// Check `rated_power > 0`, non-negative finite speeds and
    /// `cut_in < rated < cut_out`
    pub fn validate(&self) -> Result<()> {
        Validate::validate(self)?;
        Ok(())
    }
}

fn validate_speed_ordering(params: &TurbineParameters) -> std::result::Result<(), ValidationError> {
    let values = [
        params.rated_power,
        params.cut_in_wind_speed,
        params.rated_wind_speed,
        params.cut_out_wind_speed,
    ];
    if values.iter().any(|v| !v.is_finite()) {
        let mut err = ValidationError::new("non_finite");
        err.message = Some("turbine parameters must be finite".into());
        return Err(err);
    }

    if !(params.cut_in_wind_speed < params.rated_wind_speed
        && params.rated_wind_speed < params.cut_out_wind_speed)
    {
        let mut err = ValidationError::new("speed_ordering");
        err.message = Some(
            "wind speeds must satisfy cut_in_wind_speed < rated_wind_speed < cut_out_wind_speed"
                .into(),
        );
        return Err(err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PowerCurveError;

    #[test]
    fn test_default_parameters() {
        let params = TurbineParameters::default();
        assert_eq!(params.rated_power, 15.0);
        assert_eq!(params.cut_in_wind_speed, 3.0);
        assert_eq!(params.rated_wind_speed, 11.0);
        assert_eq!(params.cut_out_wind_speed, 25.0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_builder_helpers() {
        let params = TurbineParameters::default()
            .with_rated_power(3.6)
            .with_speeds(4.0, 13.0, 25.0);
        assert_eq!(params, TurbineParameters::new(3.6, 4.0, 13.0, 25.0));
    }

    #[test]
    fn test_rejects_non_positive_rated_power() {
        let params = TurbineParameters::default().with_rated_power(0.0);
        assert!(matches!(
            params.validate(),
            Err(PowerCurveError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_rejects_negative_speed() {
        let params = TurbineParameters::default().with_speeds(-1.0, 11.0, 25.0);
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_rejects_unordered_speeds() {
        let swapped = TurbineParameters::default().with_speeds(11.0, 3.0, 25.0);
        assert!(swapped.validate().is_err());

        let equal = TurbineParameters::default().with_speeds(3.0, 11.0, 11.0);
        assert!(equal.validate().is_err());
    }

    #[test]
    fn test_rejects_nan() {
        let params = TurbineParameters::default().with_rated_power(f64::NAN);
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_partial_deserialize_uses_defaults() {
        let params: TurbineParameters =
            serde_json::from_str(r#"{ "rated_power": 5.0 }"#).unwrap();
        assert_eq!(params.rated_power, 5.0);
        assert_eq!(params.rated_wind_speed, 11.0);
    }
}
