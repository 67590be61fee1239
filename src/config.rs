use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::{InterpolationMode, TurbineParameters};
use crate::power_curve::PowerCurve;

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
pub const ENV_PREFIX: &str = "WPC__";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub turbine: TurbineParameters,
    pub interpolation: InterpolationMode,
    pub output: OutputFormat,
}

/// How the demo binary prints its results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Config {
    /// Defaults, then `config/default.toml` if present, then `WPC__*` env vars
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));
        figment
            .extract()
            .with_context(|| format!("failed to load configuration from {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        self.turbine
            .validate()
            .context("invalid [turbine] configuration")
    }

    pub fn power_curve(&self) -> PowerCurve {
        PowerCurve::new(self.turbine, self.interpolation)
    }
}
