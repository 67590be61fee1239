use thiserror::Error;

/// Message returned whenever an interpolation mode string is not recognized.
pub const INVALID_INTERPOLATION_MESSAGE: &str =
    "Invalid interpolation option. Choose 'linear' or 'cubic'.";

/// Power curve errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PowerCurveError {
    /// Argument outside its recognized set (e.g. an unknown interpolation mode)
    #[error("{0}")]
    InvalidArgument(String),

    /// Turbine parameters rejected by `TurbineParameters::validate`
    #[error("Invalid turbine parameters: {0}")]
    InvalidParameters(String),
}

pub type Result<T> = std::result::Result<T, PowerCurveError>;

impl PowerCurveError {
    /// Error for an interpolation mode outside {linear, cubic}
    pub fn invalid_interpolation() -> Self {
        PowerCurveError::InvalidArgument(INVALID_INTERPOLATION_MESSAGE.to_string())
    }
}

impl From<strum::ParseError> for PowerCurveError {
    fn from(_: strum::ParseError) -> Self {
        PowerCurveError::invalid_interpolation()
    }
}

impl From<validator::ValidationErrors> for PowerCurveError {
    fn from(errors: validator::ValidationErrors) -> Self {
        PowerCurveError::InvalidParameters(errors.to_string())
    }
}
