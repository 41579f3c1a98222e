use thiserror::Error;

use crate::components::CurveError;
use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum AeroError {
    #[error("Curve error: {0}")]
    Curve(#[from] CurveError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid timestep: {0} (must be finite and > 0)")]
    InvalidTimestep(f64),
}

pub type Result<T> = std::result::Result<T, AeroError>;

/// Strict timestep check for callers that want to reject a bad `dt` before ticking.
pub fn checked_timestep(dt: f64) -> Result<f64> {
    if dt.is_finite() && dt > 0.0 {
        Ok(dt)
    } else {
        Err(AeroError::InvalidTimestep(dt))
    }
}
