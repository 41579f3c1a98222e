/// Below this local velocity magnitude-squared both angles of attack read as zero.
pub const AOA_MIN_VELOCITY_SQUARED: f64 = 0.1; // (m/s)^2

/// Below this local velocity magnitude-squared a lifting surface produces no force.
pub const LIFT_MIN_VELOCITY_SQUARED: f64 = 1.0; // (m/s)^2

/// Smallest vector norm we are willing to normalize.
pub const MIN_NORMALIZE_NORM: f64 = 1e-9;

pub const DEFAULT_TIMESTEP: f64 = 1.0 / 120.0; // 120 Hz
