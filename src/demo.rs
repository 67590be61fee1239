//! Sample invocations printed by the `wind-power-curve` binary.
//!
//! Each scenario goes through the string boundary so the invalid-mode case
//! shows the error a caller would receive.

use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

use crate::domain::TurbineParameters;
use crate::power_curve::evaluate_power_with_mode_str;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoScenario {
    pub label: &'static str,
    pub wind_speed: f64,
    pub mode: &'static str,
}

pub const SCENARIOS: [DemoScenario; 6] = [
    DemoScenario { label: "Linear Interpolation", wind_speed: 7.0, mode: "linear" },
    DemoScenario { label: "Cubic Interpolation", wind_speed: 7.0, mode: "cubic" },
    DemoScenario { label: "Below Cut-in Wind Speed", wind_speed: 2.0, mode: "linear" },
    DemoScenario { label: "At Rated Wind Speed", wind_speed: 11.0, mode: "linear" },
    DemoScenario { label: "Above Cut-out Wind Speed", wind_speed: 26.0, mode: "linear" },
    DemoScenario { label: "Invalid Interpolation Option", wind_speed: 5.0, mode: "invalid" },
];

pub fn scenarios() -> &'static [DemoScenario] {
    &SCENARIOS
}

/// Result of one scenario; exactly one of `power` / `error` is set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoOutcome {
    pub label: String,
    pub wind_speed: f64,
    pub mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl fmt::Display for DemoOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.power, &self.error) {
            (_, Some(error)) => write!(f, "Caught expected error: {}", error),
            (Some(power), None) => write!(
                f,
                "For a wind speed of {:.1} m/s ({}), the power output is: {:.2}",
                self.wind_speed, self.mode, power
            ),
            (None, None) => write!(f, "For a wind speed of {:.1} m/s: no result", self.wind_speed),
        }
    }
}

/// Evaluate every scenario against `params`
pub fn run(params: &TurbineParameters) -> Vec<DemoOutcome> {
    scenarios()
        .iter()
        .map(|scenario| {
            let result = evaluate_power_with_mode_str(scenario.wind_speed, params, scenario.mode);
            let (power, error) = match result {
                Ok(power) => {
                    debug!(label = scenario.label, wind_speed = scenario.wind_speed, power, "scenario evaluated");
                    (Some(power), None)
                }
                Err(e) => {
                    warn!(label = scenario.label, error = %e, "scenario rejected");
                    (None, Some(e.to_string()))
                }
            };
            DemoOutcome {
                label: scenario.label.to_string(),
                wind_speed: scenario.wind_speed,
                mode: scenario.mode.to_string(),
                power,
                error,
            }
        })
        .collect()
}
