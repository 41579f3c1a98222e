//! Curve-driven aerodynamic force model for a fixed-wing rigid body.
//!
//! Each fixed tick the integrator's state is turned into body-frame measurements
//! ([`components::FlightState`]), from which thrust, drag and lift are computed as
//! body-frame force vectors and handed back through [`components::PhysicsComponent`].
//! The body frame is +x right, +y up, +z forward.

pub mod components;
pub mod config;
pub mod plugins;
pub mod systems;
pub mod utils;

pub use components::{AeroForces, ControlInputs, FlightState, LocalFrameSample, ResponseCurve};
pub use config::{AeroConfig, AircraftAeroConfig, DragCurveSet};
pub use plugins::AerodynamicsPlugin;
