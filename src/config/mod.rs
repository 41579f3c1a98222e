pub mod aircraft;
pub mod loader;
pub mod physics;

pub use aircraft::{AeroConfig, AircraftAeroConfig, DragCurveSet};
pub use loader::ConfigError;
pub use physics::PhysicsConfig;
