use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Strategy used for the fractional power `g(v)` between cut-in and rated speed.
///
/// String forms are exactly `"linear"` and `"cubic"`; anything else is rejected
/// when parsed (see [`crate::power_curve::evaluate_power_with_mode_str`]).
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum InterpolationMode {
    /// `(v - cut_in) / (rated - cut_in)`, 0 at cut-in and 1 at rated speed
    #[default]
    Linear,
    /// `v^3 / rated^3`, not normalized to 0 at cut-in
    Cubic,
}

/// Piecewise region of the power curve a wind speed falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OperatingRegion {
    /// Wind too weak, turbine idle
    BelowCutIn,
    /// Between cut-in and rated speed, output follows the interpolation
    RampUp,
    /// Plateau at rated power
    Rated,
    /// Wind too strong, turbine shut down for safety
    CutOut,
}

impl OperatingRegion {
    /// Whether the turbine produces any output in this region
    pub fn is_producing(&self) -> bool {
        matches!(self, OperatingRegion::RampUp | OperatingRegion::Rated)
    }
}
