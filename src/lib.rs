//! Wind turbine power curve evaluation.
//!
//! ```rust
//! use wind_power_curve::domain::{InterpolationMode, TurbineParameters};
//! use wind_power_curve::power_curve::evaluate_power;
//!
//! let power = evaluate_power(7.0, &TurbineParameters::default(), InterpolationMode::Linear);
//! assert_eq!(power, 7.5);
//! ```

pub mod config;
pub mod demo;
pub mod domain;
pub mod error;
pub mod power_curve;
pub mod telemetry;

pub use domain::{InterpolationMode, OperatingRegion, TurbineParameters};
pub use error::{PowerCurveError, Result};
pub use power_curve::{evaluate_power, evaluate_power_with_mode_str, PowerCurve};
