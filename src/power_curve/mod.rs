//! # Power Curve Evaluation
//!
//! Piecewise wind turbine power curve:
//!
//! - `v < cut_in` or `v >= cut_out`: 0.0 (idle or shut down)
//! - `cut_in <= v < rated`: `rated_power * g(v)` from the selected interpolation
//! - `rated <= v < cut_out`: `rated_power` (plateau)
//!
//! Everything here is pure arithmetic; safe to call from any thread.

pub mod evaluator;
pub mod interpolation;

pub use evaluator::{evaluate_power, evaluate_power_with_mode_str, operating_region, PowerCurve};
pub use interpolation::fractional_power;
