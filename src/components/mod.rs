pub mod aerodynamics;
pub mod curve;
pub mod physics;
pub mod spatial;

pub use aerodynamics::{AeroForces, ControlInputs, FlightState, LocalFrameSample};
pub use curve::{CurveError, CurveKey, InterpolationMode, ResponseCurve};
pub use physics::{Force, ForceCategory, PhysicsComponent, ReferenceFrame};
pub use spatial::SpatialComponent;
